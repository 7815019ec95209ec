use hal::canvas::{Canvas, HAlign, Point, Primitive, Scale};
use hal::clock::Instant;

use super::horizon::{ArtificialHorizon, RenderConfig};
use super::{mode::Event, stick, Frame, Overlay};
use crate::config::{osd::MAX_PITCH, Units, OSD};
use crate::types::AttitudeSample;

const SCALE_MARGIN: i16 = 20;

/// Altitude in whole meters or feet
pub fn altitude(centimeters: i32, units: Units) -> i16 {
    let value = match units {
        Units::Metric => centimeters,
        Units::Imperial => centimeters * 328 / 100,
    };
    (value / 100) as i16
}

/// Telemetry overlay supplied by the caller, with the horizon, altitude scale
/// and sticks drawn on top unless a configuration menu is open
pub struct Primary<T> {
    telemetry: T,
    config: OSD,
}

impl<T> Primary<T> {
    pub fn new(telemetry: T, config: OSD) -> Self {
        Self { telemetry, config }
    }

    pub fn reconfigure(&mut self, config: OSD) {
        self.config = config;
    }
}

impl<T: Overlay> Overlay for Primary<T> {
    fn draw(&mut self, canvas: &mut dyn Canvas, frame: &Frame, now: Instant, event: Option<Event>) {
        self.telemetry.draw(canvas, frame, now, event);
        if frame.in_menu {
            return;
        }

        let screen = canvas.screen();
        // horizontal extent follows the short side of the screen
        let horizon = ArtificialHorizon::new(RenderConfig {
            max_pitch: MAX_PITCH,
            steps: self.config.ahi_steps,
            origin: screen.middle(),
            width: screen.bottom * 4 / 5,
            height: screen.right * 4 / 5,
        });
        // attitude pitch is positive nose down
        let attitude = AttitudeSample::new(frame.attitude.roll, -frame.attitude.pitch);
        horizon.draw(canvas, attitude);

        if let Some(centimeters) = frame.altitude.filter(|_| self.config.altitude_scale) {
            canvas.draw(Primitive::VerticalScale(Scale {
                value: altitude(centimeters, self.config.units),
                range: 100,
                align: HAlign::Right,
                at: Point::new(screen.right - SCALE_MARGIN, screen.y_middle()),
                height: 120,
                minor_step: 10,
                major_step: 20,
                minor_length: 5,
                major_length: 8,
                bound_length: 11,
            }));
        }

        stick::draw_sticks(canvas, self.config.sticks, &frame.channels);
    }
}

mod test {
    #[test]
    fn test_altitude() {
        use super::altitude;
        use crate::config::Units;

        assert_eq!(12, altitude(1234, Units::Metric));
        assert_eq!(40, altitude(1234, Units::Imperial));
        assert_eq!(-3, altitude(-345, Units::Metric));
    }
}
