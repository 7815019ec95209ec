use hal::clock::Instant;

use crate::config::Gesture;
use crate::types::control::{Channels, Level};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Welcome,
    Primary,
    Alternate,
}

/// Stick command forwarded to the alternate overlay
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Event {
    SwapAxis,
}

/// Selects the active overlay from stick gestures.
///
/// Nothing but the welcome timeout changes the mode while armed,
/// so regular stick movement in flight never switches overlays.
pub struct Controller {
    gesture: Gesture,
    alternate: bool,
    mode: Mode,
    last_trigger: Option<Instant>,
}

impl Controller {
    pub fn new(gesture: Gesture, alternate: bool) -> Self {
        Self { gesture, alternate, mode: Mode::Welcome, last_trigger: None }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn reconfigure(&mut self, gesture: Gesture, alternate: bool) {
        self.gesture = gesture;
        self.alternate = alternate;
        if !alternate && self.mode == Mode::Alternate {
            self.transit(Mode::Primary);
        }
    }

    fn transit(&mut self, mode: Mode) {
        if self.mode != mode {
            info!("OSD mode {:?} => {:?}", self.mode, mode);
            self.mode = mode;
        }
    }

    fn debounced(&self, now: Instant) -> bool {
        let last = match self.last_trigger {
            Some(instant) => instant,
            None => return true,
        };
        match now.checked_duration_since(last) {
            Some(elapsed) => elapsed >= self.gesture.debounce(),
            None => false,
        }
    }

    pub fn update(&mut self, now: Instant, channels: &Channels, armed: bool) -> Option<Event> {
        if self.mode == Mode::Welcome {
            if now.duration_since_epoch() < self.gesture.welcome() {
                return None;
            }
            self.transit(Mode::Primary);
        }

        if armed || !self.alternate {
            return None;
        }

        let thresholds = self.gesture.thresholds();
        let is = |value, level| thresholds.is(value, level);
        if is(channels.throttle, Level::Mid)
            && is(channels.yaw, Level::High)
            && is(channels.pitch, Level::High)
        {
            self.transit(Mode::Alternate);
            return None;
        }

        if self.mode != Mode::Alternate {
            return None;
        }

        let mut event = None;
        if is(channels.roll, Level::High) && self.debounced(now) {
            debug!("Gesture event {:?}", Event::SwapAxis);
            self.last_trigger = Some(now);
            event = Some(Event::SwapAxis);
        }
        if is(channels.roll, Level::Low) {
            self.transit(Mode::Primary);
        }
        event
    }
}

#[cfg(test)]
mod test {
    use hal::clock::Instant;

    use super::{Controller, Event, Mode};
    use crate::config::Gesture;
    use crate::types::Channels;

    const ENTER: Channels = Channels { throttle: 1500, roll: 1500, pitch: 1900, yaw: 1900 };
    const IDLE: Channels = Channels { throttle: 1500, roll: 1500, pitch: 1500, yaw: 1500 };
    const ROLL_HIGH: Channels = Channels { throttle: 1500, roll: 1900, pitch: 1500, yaw: 1500 };
    const ROLL_LOW: Channels = Channels { throttle: 1500, roll: 1100, pitch: 1500, yaw: 1500 };

    fn at(millis: u64) -> Instant {
        Instant::from_ticks(millis * 1000)
    }

    fn controller() -> Controller {
        let mut controller = Controller::new(Gesture::default(), true);
        assert_eq!(None, controller.update(at(5000), &IDLE, false));
        assert_eq!(Mode::Primary, controller.mode());
        controller
    }

    #[test]
    fn test_welcome() {
        let mut controller = Controller::new(Gesture::default(), true);
        for &millis in [0u64, 100, 2500, 4999].iter() {
            controller.update(at(millis), &ENTER, false);
            assert_eq!(Mode::Welcome, controller.mode());
        }
        controller.update(at(5000), &IDLE, true);
        assert_eq!(Mode::Primary, controller.mode());
        // a clock going backwards never brings the splash back
        controller.update(at(1000), &IDLE, false);
        assert_eq!(Mode::Primary, controller.mode());
        controller.update(at(6000), &ENTER, false);
        assert_eq!(Mode::Alternate, controller.mode());
    }

    #[test]
    fn test_enter_alternate() {
        let mut controller = controller();
        assert_eq!(None, controller.update(at(6000), &ENTER, false));
        assert_eq!(Mode::Alternate, controller.mode());
    }

    #[test]
    fn test_enter_requires_all_conditions() {
        let mut controller = controller();
        let partials = [
            Channels { throttle: 1000, ..ENTER },
            Channels { throttle: 2000, ..ENTER },
            Channels { yaw: 1500, ..ENTER },
            Channels { pitch: 1750, ..ENTER },
        ];
        for (i, channels) in partials.iter().enumerate() {
            controller.update(at(6000 + i as u64 * 20), channels, false);
            assert_eq!(Mode::Primary, controller.mode());
        }
        controller.update(at(7000), &ENTER, true);
        assert_eq!(Mode::Primary, controller.mode());
    }

    #[test]
    fn test_alternate_disabled() {
        let mut controller = Controller::new(Gesture::default(), false);
        controller.update(at(6000), &ENTER, false);
        assert_eq!(Mode::Primary, controller.mode());
    }

    #[test]
    fn test_armed_freezes_mode() {
        let mut controller = controller();
        controller.update(at(6000), &ENTER, false);
        assert_eq!(None, controller.update(at(6500), &ROLL_HIGH, true));
        assert_eq!(None, controller.update(at(7000), &ROLL_LOW, true));
        assert_eq!(Mode::Alternate, controller.mode());

        controller.update(at(7500), &ROLL_LOW, false);
        assert_eq!(Mode::Primary, controller.mode());
        controller.update(at(8000), &ENTER, true);
        assert_eq!(Mode::Primary, controller.mode());
    }

    #[test]
    fn test_debounce() {
        let mut controller = controller();
        controller.update(at(6000), &ENTER, false);
        assert_eq!(Some(Event::SwapAxis), controller.update(at(6100), &ROLL_HIGH, false));
        assert_eq!(None, controller.update(at(6200), &ROLL_HIGH, false));
        assert_eq!(None, controller.update(at(6300), &IDLE, false));
        assert_eq!(Some(Event::SwapAxis), controller.update(at(6600), &ROLL_HIGH, false));
        assert_eq!(Some(Event::SwapAxis), controller.update(at(6900), &ROLL_HIGH, false));
        assert_eq!(Mode::Alternate, controller.mode());
    }

    #[test]
    fn test_debounce_boundary() {
        let mut controller = controller();
        controller.update(at(6000), &ENTER, false);
        assert_eq!(Some(Event::SwapAxis), controller.update(at(6100), &ROLL_HIGH, false));
        assert_eq!(Some(Event::SwapAxis), controller.update(at(6350), &ROLL_HIGH, false));
        assert_eq!(None, controller.update(at(6599), &ROLL_HIGH, false));
        assert_eq!(Some(Event::SwapAxis), controller.update(at(6600), &ROLL_HIGH, false));
    }

    #[test]
    fn test_return_to_primary() {
        let mut controller = controller();
        controller.update(at(6000), &ENTER, false);
        assert_eq!(None, controller.update(at(6100), &ROLL_LOW, false));
        assert_eq!(Mode::Primary, controller.mode());
        // roll high outside of alternate mode is ignored
        assert_eq!(None, controller.update(at(6500), &ROLL_HIGH, false));
    }

    #[test]
    fn test_reconfigure() {
        let mut controller = controller();
        controller.update(at(6000), &ENTER, false);
        controller.reconfigure(Gesture::default(), false);
        assert_eq!(Mode::Primary, controller.mode());
    }
}
