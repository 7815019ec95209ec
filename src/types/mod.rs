pub mod attitude;
pub mod control;

pub use attitude::{AttitudeSample, DeciDegree};
pub use control::{Channels, Level};
