use core::fmt::Write;

use git_version::git_version;
use hal::canvas::{Canvas, Font, HAlign, Image, Point, VAlign};
use hal::clock::Instant;

use super::{mode::Event, Frame, Overlay};

pub const VERSION: &str = git_version!(fallback = "unknown");

const LOGO_MARGIN: i16 = 5;

/// Splash screen with gesture hints, shown right after startup
pub struct Welcome {
    alternate: bool,
}

impl Welcome {
    pub fn new(alternate: bool) -> Self {
        Self { alternate }
    }
}

impl Overlay for Welcome {
    fn draw(&mut self, canvas: &mut dyn Canvas, _: &Frame, _: Instant, _: Option<Event>) {
        let screen = canvas.screen();
        let (x, y) = (screen.x_middle(), screen.bottom / 2 - 30);
        canvas.image(Image::Logo, Point::new(x - LOGO_MARGIN, y), (HAlign::Right, VAlign::Middle));
        let at = Point::new(x + LOGO_MARGIN, y);
        canvas.image(Image::FirmwareLogo, at, (HAlign::Left, VAlign::Middle));

        let mut string = heapless::String::<40>::new();
        write!(string, "VERSION: {}", VERSION).ok();
        let align = (HAlign::Center, VAlign::Top);
        let bottom = screen.bottom;
        canvas.text(&string, Point::new(x, bottom - 60), align, Font::Regular8x10);
        let hint = "MENU: THRT MID YAW LEFT PITCH UP";
        canvas.text(hint, Point::new(x, bottom - 35), align, Font::Regular8x10);
        if self.alternate {
            let hint = "ALT: THRT MID YAW RIGHT PITCH UP";
            canvas.text(hint, Point::new(x, bottom - 25), align, Font::Regular8x10);
        }
    }
}

mod test {
    #[cfg(test)]
    fn texts(alternate: bool) -> Vec<hal::canvas::Text> {
        use hal::canvas::{DrawList, Primitive, Screen};
        use hal::clock::Instant;

        use super::{Overlay, Welcome};
        use crate::osd::Frame;

        let mut canvas = DrawList::<8>::new(Screen::new(359, 269));
        let mut welcome = Welcome::new(alternate);
        welcome.draw(&mut canvas, &Frame::default(), Instant::from_ticks(0), None);
        canvas
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_welcome() {
        let texts = texts(false);
        assert_eq!(2, texts.len());
        assert!(texts[0].starts_with("VERSION: "));
        assert_eq!("MENU: THRT MID YAW LEFT PITCH UP", texts[1].as_str());
    }

    #[test]
    fn test_welcome_with_alternate() {
        let texts = texts(true);
        assert_eq!(3, texts.len());
        assert_eq!("ALT: THRT MID YAW RIGHT PITCH UP", texts[2].as_str());
    }
}
