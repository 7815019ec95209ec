pub mod gesture;
pub mod osd;
pub mod pathset;
pub mod video;

pub use gesture::Gesture;
pub use osd::{SticksDisplay, Units, OSD};
pub use video::Video;

use pathset::{Error, Path, PathSet, Value};

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub osd: OSD,
    pub video: Video,
    pub gesture: Gesture,
}

impl PathSet for Config {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        match path.str()? {
            "osd" => self.osd.set(path, value),
            "video" => self.video.set(path, value),
            "gesture" => self.gesture.set(path, value),
            _ => Err(Error::UnknownPath),
        }
    }
}

impl Config {
    /// Set a single value by dotted path, e.g. `osd.ahi-steps`,
    /// resetting it to default when `value` is `None`
    pub fn set_path(&mut self, path: &str, value: Option<&str>) -> Result<(), Error> {
        match self.set(Path::new(path), Value(value)) {
            Ok(()) => {
                trace!("Set {} = {:?}", path, value);
                Ok(())
            }
            Err(e) => {
                warn!("Set {} failed: {}", path, e);
                Err(e)
            }
        }
    }
}

pub fn reset(config: &mut Config) {
    *config = Config::default();
    info!("Config reset to default");
}

mod test {
    #[test]
    fn test_default_config() {
        use serde_json::json;

        use super::Config;

        let expected = json!({
            "osd": {
                "ahi-steps": 2,
                "altitude-scale": true,
                "sticks": "off",
                "alternate": false,
                "units": "metric",
                "font": 0
            },
            "video": {
                "sync-threshold": 120,
                "white-level": 110,
                "black-level": 20,
                "x-offset": 0,
                "x-scale": 8,
                "sbs-3d": false,
                "sbs-3d-right-eye-offset": 30
            },
            "gesture": {"high": 1750, "low": 1250, "debounce": 250, "welcome": 5000}
        });
        assert_eq!(expected, serde_json::to_value(&Config::default()).unwrap());
    }

    #[test]
    fn test_set_path_and_reset() {
        use super::pathset::Error;
        use super::{reset, Config, SticksDisplay};

        let mut config = Config::default();
        config.set_path("osd.sticks", Some("mode2")).unwrap();
        config.set_path("osd.alternate", Some("true")).unwrap();
        config.set_path("video.x-offset", Some("-3")).unwrap();
        assert_eq!(SticksDisplay::Mode2, config.osd.sticks);
        assert!(config.osd.alternate);
        assert_eq!(-3, config.video.x_offset);
        assert_eq!(Err(Error::UnknownPath), config.set_path("imu.bias", Some("1")));
        assert_eq!(Err(Error::UnknownPath), config.set_path("osd", Some("1")));

        reset(&mut config);
        assert_eq!(Config::default(), config);
    }
}
