use super::pathset::{leaf, Error, Path, PathSet, Value};

/// Analog video levels, consumed by the video driver rather than the overlays
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Video {
    pub sync_threshold: u8,
    pub white_level: u8,
    pub black_level: u8,
    pub x_offset: i8,
    pub x_scale: u8,
    pub sbs_3d: bool,
    pub sbs_3d_right_eye_offset: u8,
}

impl Default for Video {
    fn default() -> Self {
        Self {
            sync_threshold: 120,
            white_level: 110,
            black_level: 20,
            x_offset: 0,
            x_scale: 8,
            sbs_3d: false,
            sbs_3d_right_eye_offset: 30,
        }
    }
}

impl PathSet for Video {
    fn set(&mut self, mut path: Path, value: Value) -> Result<(), Error> {
        let d = Self::default();
        match path.str()? {
            "sync-threshold" => self.sync_threshold = leaf(&path, value, d.sync_threshold)?,
            "white-level" => self.white_level = leaf(&path, value, d.white_level)?,
            "black-level" => self.black_level = leaf(&path, value, d.black_level)?,
            "x-offset" => self.x_offset = leaf(&path, value, d.x_offset)?,
            "x-scale" => self.x_scale = leaf(&path, value, d.x_scale)?,
            "sbs-3d" => self.sbs_3d = leaf(&path, value, d.sbs_3d)?,
            "sbs-3d-right-eye-offset" => {
                self.sbs_3d_right_eye_offset = leaf(&path, value, d.sbs_3d_right_eye_offset)?
            }
            _ => return Err(Error::UnknownPath),
        }
        Ok(())
    }
}
