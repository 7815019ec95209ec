use core::f32::consts::PI;

pub type DeciDegree = i16;

pub const DECIDEGREE_PER_DEGREE: i16 = 10;

pub fn decidegree_to_radian(value: DeciDegree) -> f32 {
    value as f32 / DECIDEGREE_PER_DEGREE as f32 * PI / 180.0
}

pub fn decidegree_to_degree(value: DeciDegree) -> f32 {
    value as f32 / DECIDEGREE_PER_DEGREE as f32
}

/// Attitude as provided by sensor fusion, in tenths of a degree
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttitudeSample {
    pub roll: DeciDegree,
    pub pitch: DeciDegree,
}

impl AttitudeSample {
    pub const fn new(roll: DeciDegree, pitch: DeciDegree) -> Self {
        Self { roll, pitch }
    }

    pub fn degrees(roll: i16, pitch: i16) -> Self {
        Self { roll: roll * DECIDEGREE_PER_DEGREE, pitch: pitch * DECIDEGREE_PER_DEGREE }
    }
}

mod test {
    #[test]
    fn test_decidegree_conversion() {
        use super::{decidegree_to_degree, decidegree_to_radian};

        assert_eq!(9.5, decidegree_to_degree(95));
        assert_eq!(-30.0, decidegree_to_degree(-300));
        assert!((decidegree_to_radian(900) - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn test_attitude_sample_serialize() {
        use serde_json::json;

        use super::AttitudeSample;

        let sample = AttitudeSample::degrees(-15, 30);
        assert_eq!(json!({"roll": -150, "pitch": 300}), serde_json::to_value(&sample).unwrap());
    }
}
