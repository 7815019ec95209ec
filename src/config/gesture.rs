use hal::clock::Duration;

use super::pathset::{leaf, Error, Path, PathSet, Value};
use crate::types::control::Thresholds;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gesture {
    pub high: u16,
    pub low: u16,
    /// Minimum interval between two commands, in milliseconds
    pub debounce: u16,
    /// Splash screen duration since startup, in milliseconds
    pub welcome: u16,
}

impl Default for Gesture {
    fn default() -> Self {
        Self { high: 1750, low: 1250, debounce: 250, welcome: 5000 }
    }
}

impl Gesture {
    pub fn thresholds(&self) -> Thresholds {
        Thresholds { low: self.low, high: self.high }
    }

    pub fn debounce(&self) -> Duration {
        Duration::millis(self.debounce as u64)
    }

    pub fn welcome(&self) -> Duration {
        Duration::millis(self.welcome as u64)
    }
}

impl PathSet for Gesture {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        let default = Self::default();
        let mut gesture = *self;
        match path.str()? {
            "high" => gesture.high = leaf(&path, value, default.high)?,
            "low" => gesture.low = leaf(&path, value, default.low)?,
            "debounce" => gesture.debounce = leaf(&path, value, default.debounce)?,
            "welcome" => gesture.welcome = leaf(&path, value, default.welcome)?,
            _ => return Err(Error::UnknownPath),
        }
        if gesture.low >= gesture.high {
            return Err(Error::InvalidValue);
        }
        *self = gesture;
        Ok(())
    }
}

mod test {
    #[test]
    fn test_set_gesture() {
        use super::{Error, Gesture, Path, PathSet, Value};

        let mut gesture = Gesture::default();
        gesture.set(Path::new("debounce"), Value::of("300")).unwrap();
        assert_eq!(300, gesture.debounce().to_millis());
        assert_eq!(5000, gesture.welcome().to_millis());
        assert_eq!(Err(Error::InvalidValue), gesture.set(Path::new("low"), Value::of("1800")));
        assert_eq!(1250, gesture.low);
    }
}
