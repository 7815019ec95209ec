pub mod horizon;
pub mod mode;
pub mod primary;
pub mod stick;
pub mod welcome;

use hal::canvas::Canvas;
use hal::clock::{Clock, Instant};

use crate::config::Config;
use crate::types::{AttitudeSample, Channels};

pub use mode::{Event, Mode};

/// Per frame input, sampled by the caller right before rendering
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Frame {
    pub attitude: AttitudeSample,
    pub channels: Channels,
    pub armed: bool,
    pub in_menu: bool,
    /// Barometric altitude in centimeters, `None` without a barometer
    pub altitude: Option<i32>,
}

pub trait Overlay {
    fn draw(&mut self, canvas: &mut dyn Canvas, frame: &Frame, now: Instant, event: Option<Event>);
}

pub struct NoOverlay;

impl Overlay for NoOverlay {
    fn draw(&mut self, _: &mut dyn Canvas, _: &Frame, _: Instant, _: Option<Event>) {}
}

pub struct OSD<T, A> {
    controller: mode::Controller,
    welcome: welcome::Welcome,
    primary: primary::Primary<T>,
    alternate: A,
}

impl<T: Overlay, A: Overlay> OSD<T, A> {
    pub fn new(config: &Config, telemetry: T, alternate: A) -> Self {
        let osd = config.osd;
        debug!("Init OSD with {:?}", osd);
        Self {
            controller: mode::Controller::new(config.gesture, osd.alternate),
            welcome: welcome::Welcome::new(osd.alternate),
            primary: primary::Primary::new(telemetry, osd),
            alternate,
        }
    }

    pub fn reconfigure(&mut self, config: &Config) {
        self.controller.reconfigure(config.gesture, config.osd.alternate);
        self.welcome = welcome::Welcome::new(config.osd.alternate);
        self.primary.reconfigure(config.osd);
    }

    pub fn mode(&self) -> Mode {
        self.controller.mode()
    }

    /// Renders one frame, the canvas is cleared first
    pub fn draw(&mut self, canvas: &mut dyn Canvas, clock: &dyn Clock, frame: &Frame) {
        let now = clock.now();
        let event = self.controller.update(now, &frame.channels, frame.armed);
        canvas.clear();
        let overlay: &mut dyn Overlay = match self.controller.mode() {
            Mode::Welcome => &mut self.welcome,
            Mode::Primary => &mut self.primary,
            Mode::Alternate => &mut self.alternate,
        };
        overlay.draw(canvas, frame, now, event);
    }
}
