use core::str::FromStr;

use super::pathset::{leaf, Error, Path, PathSet, Value};
use crate::osd::horizon::PITCH_STEP;

/// Pitch range covered by the attitude ladder, in degrees
pub const MAX_PITCH: u8 = 30;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SticksDisplay {
    Off,
    /// Throttle on the left stick
    Mode2,
    /// Throttle on the right stick
    Mode1,
}

impl Default for SticksDisplay {
    fn default() -> Self {
        Self::Off
    }
}

impl FromStr for SticksDisplay {
    type Err = ();

    fn from_str(string: &str) -> Result<Self, ()> {
        match string {
            "off" => Ok(Self::Off),
            "mode1" => Ok(Self::Mode1),
            "mode2" => Ok(Self::Mode2),
            _ => Err(()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Metric,
    Imperial,
}

impl Default for Units {
    fn default() -> Self {
        Self::Metric
    }
}

impl FromStr for Units {
    type Err = ();

    fn from_str(string: &str) -> Result<Self, ()> {
        match string {
            "metric" => Ok(Self::Metric),
            "imperial" => Ok(Self::Imperial),
            _ => Err(()),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct OSD {
    pub ahi_steps: u8,
    pub altitude_scale: bool,
    pub sticks: SticksDisplay,
    pub alternate: bool,
    pub units: Units,
    pub font: u8,
}

impl Default for OSD {
    fn default() -> Self {
        Self {
            ahi_steps: 2,
            altitude_scale: true,
            sticks: SticksDisplay::Off,
            alternate: false,
            units: Units::Metric,
            font: 0,
        }
    }
}

impl PathSet for OSD {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        let default = Self::default();
        match path.str()? {
            "ahi-steps" => {
                let steps = leaf(&path, value, default.ahi_steps)?;
                if steps as i16 > MAX_PITCH as i16 / PITCH_STEP {
                    return Err(Error::InvalidValue);
                }
                self.ahi_steps = steps
            }
            "altitude-scale" => self.altitude_scale = leaf(&path, value, default.altitude_scale)?,
            "sticks" => self.sticks = leaf(&path, value, default.sticks)?,
            "alternate" => self.alternate = leaf(&path, value, default.alternate)?,
            "units" => self.units = leaf(&path, value, default.units)?,
            "font" => self.font = leaf(&path, value, default.font)?,
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}

mod test {
    #[test]
    fn test_set_osd() {
        use super::{Error, Path, PathSet, SticksDisplay, Value, OSD};

        let mut osd = OSD::default();
        osd.set(Path::new("sticks"), Value::of("mode1")).unwrap();
        assert_eq!(SticksDisplay::Mode1, osd.sticks);
        osd.set(Path::new("ahi-steps"), Value::of("3")).unwrap();
        assert_eq!(3, osd.ahi_steps);
        assert_eq!(Err(Error::InvalidValue), osd.set(Path::new("ahi-steps"), Value::of("4")));
        assert_eq!(3, osd.ahi_steps);
        osd.set(Path::new("ahi-steps"), Value(None)).unwrap();
        assert_eq!(2, osd.ahi_steps);
        assert_eq!(Err(Error::InvalidValue), osd.set(Path::new("units"), Value::of("furlong")));
        assert_eq!(Err(Error::UnknownPath), osd.set(Path::new("ladder"), Value::of("1")));
    }
}
