pub const CHANNEL_MIN: u16 = 1000;
pub const CHANNEL_CENTER: u16 = 1500;

/// Raw receiver channel values, 1000 ~ 2000 with 1500 as center
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channels {
    pub throttle: u16,
    pub roll: u16,
    pub pitch: u16,
    pub yaw: u16,
}

impl Default for Channels {
    fn default() -> Self {
        Self {
            throttle: CHANNEL_MIN,
            roll: CHANNEL_CENTER,
            pitch: CHANNEL_CENTER,
            yaw: CHANNEL_CENTER,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    Low,
    Mid,
    High,
}

/// Stick position boundaries, exclusive on both ends so that
/// a value sitting exactly on a boundary is neither
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Thresholds {
    pub low: u16,
    pub high: u16,
}

impl Thresholds {
    pub fn level(&self, value: u16) -> Option<Level> {
        match value {
            v if v > self.high => Some(Level::High),
            v if v < self.low => Some(Level::Low),
            v if v > self.low && v < self.high => Some(Level::Mid),
            _ => None,
        }
    }

    pub fn is(&self, value: u16, level: Level) -> bool {
        self.level(value) == Some(level)
    }
}

mod test {
    #[test]
    fn test_level() {
        use super::{Level, Thresholds};

        let thresholds = Thresholds { low: 1250, high: 1750 };
        assert_eq!(Some(Level::High), thresholds.level(1751));
        assert_eq!(Some(Level::Low), thresholds.level(1249));
        assert_eq!(Some(Level::Mid), thresholds.level(1500));
        assert_eq!(None, thresholds.level(1750));
        assert_eq!(None, thresholds.level(1250));
        assert!(thresholds.is(2000, Level::High));
        assert!(!thresholds.is(1500, Level::Low));
    }
}
