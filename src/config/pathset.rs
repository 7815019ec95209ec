use core::str::{FromStr, Split};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Error {
    UnknownPath,
    ExpectValue,
    InvalidValue,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let err_string = match self {
            Self::UnknownPath => "Specified path not exists or invalid",
            Self::ExpectValue => "Expect value",
            Self::InvalidValue => "Value not valid",
        };
        write!(f, "{}", err_string)
    }
}

/// Value to be set, `None` meaning reset to default
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Value<'a>(pub Option<&'a str>);

impl<'a> Value<'a> {
    pub fn of(string: &'a str) -> Value<'a> {
        Value(Some(string))
    }

    pub fn parse<T: FromStr>(&self) -> Result<T, Error> {
        match self.0 {
            Some(s) => FromStr::from_str(s).map_err(|_| Error::InvalidValue),
            None => Err(Error::ExpectValue),
        }
    }

    pub fn parse_or<T: FromStr>(&self, or: T) -> Result<T, Error> {
        match self.0 {
            Some(s) => FromStr::from_str(s).map_err(|_| Error::InvalidValue),
            None => Ok(or),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Path<'a>(Split<'a, char>);

impl<'a> Path<'a> {
    pub fn new(path: &'a str) -> Self {
        Self(path.split('.'))
    }

    pub fn str(&mut self) -> Result<&'a str, Error> {
        self.0.next().ok_or(Error::UnknownPath)
    }

    pub fn is_end(&self) -> bool {
        self.0.clone().next().is_none()
    }
}

pub trait PathSet {
    fn set(&mut self, path: Path, value: Value) -> Result<(), Error>;
}

/// Terminal path segment setter, rejecting any trailing segment
pub(crate) fn leaf<T: FromStr>(path: &Path, value: Value, or: T) -> Result<T, Error> {
    if !path.is_end() {
        return Err(Error::UnknownPath);
    }
    value.parse_or(or)
}

mod test {
    #[test]
    fn test_value_parse() {
        use super::{Error, Value};

        assert_eq!(Ok(3u8), Value::of("3").parse());
        assert_eq!(Err(Error::InvalidValue), Value::of("three").parse::<u8>());
        assert_eq!(Err(Error::ExpectValue), Value(None).parse::<u8>());
        assert_eq!(Ok(7u8), Value(None).parse_or(7u8));
    }

    #[test]
    fn test_path() {
        use super::{leaf, Error, Path, Value};

        let mut path = Path::new("osd.ahi-steps");
        assert_eq!(Ok("osd"), path.str());
        assert!(!path.is_end());
        assert_eq!(Ok("ahi-steps"), path.str());
        assert!(path.is_end());
        assert_eq!(Err(Error::UnknownPath), path.str());

        let mut path = Path::new("gesture.high.extra");
        path.str().ok();
        path.str().ok();
        assert_eq!(Err(Error::UnknownPath), leaf(&path, Value::of("1"), 0u16));
    }
}
