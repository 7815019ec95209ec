use hal::canvas::{Canvas, Color, Point, Primitive};

use crate::config::SticksDisplay;
use crate::types::control::{Channels, CHANNEL_CENTER};

const WIDTH: i16 = 2;
const LENGTH: i16 = 20;
const BOX_SIZE: i16 = 4;
pub const MOVEMENT_EXTENT: i16 = LENGTH - BOX_SIZE / 2;
const HALF_RANGE: i32 = 500;
const CORNER_MARGIN: i16 = 30;

/// Channel value to indicator offset, clamped so the box never leaves the outline
pub fn offset(channel: u16) -> i16 {
    let value = (channel as i32 - CHANNEL_CENTER as i32).clamp(-HALF_RANGE, HALF_RANGE);
    (MOVEMENT_EXTENT as i32 * value / HALF_RANGE) as i16
}

fn hline(canvas: &mut dyn Canvas, x0: i16, x1: i16, y: i16) {
    canvas.draw(Primitive::HLine { x: [x0, x1], y, color: Color::White })
}

fn vline(canvas: &mut dyn Canvas, x: i16, y0: i16, y1: i16) {
    canvas.draw(Primitive::VLine { x, y: [y0, y1], color: Color::White })
}

fn draw_outline(canvas: &mut dyn Canvas, center: Point) {
    let Point { x, y } = center;
    let (w, l) = (WIDTH / 2 + 1, LENGTH + 1);
    let (width, length) = (WIDTH as u16, 2 * LENGTH as u16);
    canvas.rectangle(Point::new(x - LENGTH, y - WIDTH / 2), length, width, Color::Black);
    canvas.rectangle(Point::new(x - WIDTH / 2, y - LENGTH), width, length, Color::Black);

    for &dy in [-w, w].iter() {
        hline(canvas, x - l, x - w, y + dy);
        hline(canvas, x + w, x + l, y + dy);
    }
    hline(canvas, x - w, x + w, y - l);
    hline(canvas, x - w, x + w, y + l);

    for &dx in [-w, w].iter() {
        vline(canvas, x + dx, y - w, y - l);
        vline(canvas, x + dx, y + l, y + w);
    }
    vline(canvas, x - l, y - w, y + w);
    vline(canvas, x + l, y - w, y + w);
}

/// Cross shaped stick track with a box indicating the stick position,
/// `vertical` grows upwards
pub fn draw_stick(canvas: &mut dyn Canvas, center: Point, horizontal: u16, vertical: u16) {
    draw_outline(canvas, center);
    let indicator = center.offset(offset(horizontal), -offset(vertical));
    let size = BOX_SIZE as u16;
    let half = BOX_SIZE / 2;
    canvas.rectangle(indicator.offset(-half - 1, -half - 1), size + 2, size + 2, Color::Black);
    canvas.rectangle(indicator.offset(-half, -half), size, size, Color::White);
}

/// Both sticks at the bottom corners, laid out per transmitter mode
pub fn draw_sticks(canvas: &mut dyn Canvas, display: SticksDisplay, channels: &Channels) {
    let screen = canvas.screen();
    let y = screen.bottom - CORNER_MARGIN;
    let left = Point::new(screen.left() + CORNER_MARGIN, y);
    let right = Point::new(screen.right - CORNER_MARGIN, y);
    let Channels { throttle, roll, pitch, yaw } = *channels;
    match display {
        SticksDisplay::Off => (),
        SticksDisplay::Mode2 => {
            draw_stick(canvas, left, yaw, throttle);
            draw_stick(canvas, right, roll, pitch);
        }
        SticksDisplay::Mode1 => {
            draw_stick(canvas, left, yaw, pitch);
            draw_stick(canvas, right, roll, throttle);
        }
    }
}

mod test {
    #[cfg(test)]
    fn indicator(horizontal: u16, vertical: u16) -> hal::canvas::Point {
        use hal::canvas::{Color, DrawList, Point, Primitive, Screen};

        let mut canvas = DrawList::<32>::new(Screen::new(359, 269));
        super::draw_stick(&mut canvas, Point::new(100, 100), horizontal, vertical);
        match canvas.primitives().last() {
            Some(Primitive::Rectangle { at, width: 4, height: 4, color: Color::White }) => {
                at.offset(2, 2)
            }
            other => panic!("Unexpected {:?}", other),
        }
    }

    #[test]
    fn test_offset() {
        use super::{offset, MOVEMENT_EXTENT};

        assert_eq!(0, offset(1500));
        assert_eq!(MOVEMENT_EXTENT, offset(2000));
        assert_eq!(-MOVEMENT_EXTENT, offset(1000));
        assert_eq!(MOVEMENT_EXTENT, offset(2500));
        assert_eq!(-MOVEMENT_EXTENT, offset(0));
        assert_eq!(9, offset(1750));
    }

    #[test]
    fn test_indicator_position() {
        use hal::canvas::Point;

        assert_eq!(Point::new(100, 100), indicator(1500, 1500));
        assert_eq!(Point::new(118, 100), indicator(2000, 1500));
        assert_eq!(Point::new(82, 100), indicator(1000, 1500));
        // larger vertical value moves up
        assert_eq!(Point::new(100, 82), indicator(1500, 2000));
        assert_eq!(Point::new(100, 118), indicator(1500, 900));
    }

    #[test]
    fn test_outline_is_fixed() {
        use hal::canvas::{DrawList, Point, Screen};

        let mut first = DrawList::<32>::new(Screen::new(359, 269));
        super::draw_stick(&mut first, Point::new(100, 100), 1000, 2000);
        let mut second = DrawList::<32>::new(Screen::new(359, 269));
        super::draw_stick(&mut second, Point::new(100, 100), 1600, 1200);
        let (first, second) = (first.primitives(), second.primitives());
        assert_eq!(2 + 12 + 2, first.len());
        assert_eq!(&first[..14], &second[..14]);
        assert_ne!(&first[14..], &second[14..]);
    }

    #[test]
    fn test_sticks_layout() {
        use hal::canvas::{Color, DrawList, Point, Primitive, Screen};

        use crate::config::SticksDisplay;
        use crate::types::Channels;

        let channels = Channels { throttle: 2000, roll: 1500, pitch: 1500, yaw: 1500 };
        let boxes = |display| {
            let mut canvas = DrawList::<64>::new(Screen::new(359, 269));
            super::draw_sticks(&mut canvas, display, &channels);
            canvas
                .primitives()
                .iter()
                .filter_map(|p| match p {
                    Primitive::Rectangle { at, width: 4, color: Color::White, .. } => Some(*at),
                    _ => None,
                })
                .collect::<Vec<_>>()
        };
        assert!(boxes(SticksDisplay::Off).is_empty());
        // throttle full on the left stick
        assert_eq!(vec![Point::new(28, 219), Point::new(327, 237)], boxes(SticksDisplay::Mode2));
        assert_eq!(vec![Point::new(28, 237), Point::new(327, 219)], boxes(SticksDisplay::Mode1));
    }
}
