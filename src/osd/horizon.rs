//! Artificial horizon, a pitch ladder rotated by roll and scrolled by pitch,
//! with a fixed aircraft reticle at its center.

use hal::canvas::{Canvas, Endcap, Font, HAlign, Point, Stroke, VAlign};
#[cfg(not(any(test, feature = "std")))]
use micromath::F32Ext;

use crate::types::attitude::{decidegree_to_degree, decidegree_to_radian, AttitudeSample};

pub const PITCH_STEP: i16 = 10;

const LABEL_MARGIN: i16 = 4;
const DASH_LENGTH: u8 = 5;
const RUNG_ENDCAPS: [Endcap; 2] = [Endcap::Flat, Endcap::Flat];

const CENTER_BODY: i16 = 3;
const CENTER_WING: i16 = 7;
const CENTER_RUDDER: i16 = 5;

/// Ladder geometry, `max_pitch` must be positive.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Pitch in degrees covered from the origin to either edge
    pub max_pitch: u8,
    /// Rungs drawn on each side of the horizon
    pub steps: u8,
    pub origin: Point,
    pub width: i16,
    pub height: i16,
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
struct Vector(i16, i16);

impl core::ops::Mul<i16> for Vector {
    type Output = Self;

    fn mul(self, m: i16) -> Self {
        Self(self.0 * m, self.1 * m)
    }
}

impl core::ops::Div<i16> for Vector {
    type Output = Self;

    fn div(self, d: i16) -> Self {
        Self(self.0 / d, self.1 / d)
    }
}

/// Per-frame ladder layout, every delta already truncated to whole pixels
#[derive(Copy, Clone, Debug, PartialEq)]
struct Layout {
    origin: Point,
    step_offset: i16,
    /// Half of the horizon line
    half_rung: Vector,
    /// Half of every other rung
    half_short_rung: Vector,
    step: Vector,
    tick: Vector,
}

impl Layout {
    fn new(attitude: AttitudeSample, config: &RenderConfig) -> Self {
        debug_assert!(config.max_pitch > 0);
        let (half_width, half_height) = (config.width / 2, config.height / 2);
        let roll = decidegree_to_radian(attitude.roll);
        let (sin_roll, cos_roll) = (roll.sin(), roll.cos());
        let max_pitch = config.max_pitch as f32;

        let step_offset = attitude.pitch / (PITCH_STEP * 10);
        let residual = decidegree_to_degree(attitude.pitch) - (step_offset * PITCH_STEP) as f32;
        let dx = (half_width as f32 * sin_roll * residual / max_pitch) as i16;
        let dy = (half_height as f32 * cos_roll * residual / max_pitch) as i16;
        let origin = config.origin.offset(dx, dy);

        let radius = (half_width.min(half_height) / 2) as f32;
        let half_rung = Vector((cos_roll * radius) as i16, (sin_roll * radius) as i16) * 3 / 4;
        let half_short_rung = half_rung * 3 / 4;

        let step = PITCH_STEP as f32 / max_pitch;
        let step = Vector(
            (half_width as f32 * sin_roll * step) as i16,
            (half_height as f32 * cos_roll * step) as i16,
        );
        Self { origin, step_offset, half_rung, half_short_rung, step, tick: step / 6 }
    }

    fn center_of(&self, index: i16) -> Point {
        let Vector(x, y) = self.step * index;
        self.origin.offset(-x, -y)
    }
}

/// Folds angles beyond vertical back into [-90, 90]
pub fn fold(angle: i16) -> i16 {
    match angle {
        a if a > 90 => 180 - a,
        a if a < -90 => -180 - a,
        a => a,
    }
}

pub struct ArtificialHorizon {
    config: RenderConfig,
}

impl ArtificialHorizon {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas, attitude: AttitudeSample) {
        let layout = Layout::new(attitude, &self.config);
        let range = self.config.max_pitch as i16 / PITCH_STEP + 1;
        for index in -range..=range {
            let step = layout.step_offset + index;
            if step.abs() > self.config.steps as i16 {
                continue;
            }
            let angle = fold(step * PITCH_STEP);
            let center = layout.center_of(index);
            match angle {
                0 => draw_horizon_line(canvas, center, layout.half_rung),
                _ => draw_rung(canvas, center, angle, &layout),
            }
        }
        draw_center_mark(canvas, self.config.origin);
    }
}

fn draw_horizon_line(canvas: &mut dyn Canvas, center: Point, half: Vector) {
    let Vector(dx, dy) = half;
    let Point { x, y } = center;
    let (left, gap) = (Point::new(x - dx, y + dy), Point::new(x - dx / 3, y + dy / 3));
    canvas.line(left, gap, Stroke::Outlined, RUNG_ENDCAPS);
    let (gap, right) = (Point::new(x + dx / 3, y - dy / 3), Point::new(x + dx, y - dy));
    canvas.line(gap, right, Stroke::Outlined, RUNG_ENDCAPS);
}

fn draw_rung(canvas: &mut dyn Canvas, center: Point, angle: i16, layout: &Layout) {
    let Vector(dx, dy) = layout.half_short_rung;
    let Point { x, y } = center;
    let (left, right) = (Point::new(x - dx, y + dy), Point::new(x + dx, y - dy));
    let (stroke, Vector(tx, ty)) = if angle > 0 {
        (Stroke::Outlined, layout.tick)
    } else {
        (Stroke::Dashed(DASH_LENGTH), layout.tick * -1)
    };
    canvas.line(left, right, stroke, RUNG_ENDCAPS);
    canvas.line(left, left.offset(tx, ty), Stroke::Outlined, RUNG_ENDCAPS);
    canvas.line(right, right.offset(tx, ty), Stroke::Outlined, RUNG_ENDCAPS);

    let Vector(dx, dy) = layout.half_rung;
    let align = (HAlign::Center, VAlign::Middle);
    let label = angle.abs() as i32;
    canvas.number(label, Point::new(x - dx - LABEL_MARGIN, y + dy), align, Font::Outlined8x8);
    canvas.number(label, Point::new(x + dx + LABEL_MARGIN, y - dy), align, Font::Outlined8x8);
}

pub fn draw_center_mark(canvas: &mut dyn Canvas, origin: Point) {
    let Point { x, y } = origin;
    let stroke = Stroke::Outlined;
    let (flat, none) = (Endcap::Flat, Endcap::None);
    let (from, to) = (Point::new(x - CENTER_WING - CENTER_BODY, y), Point::new(x - CENTER_BODY, y));
    canvas.line(from, to, stroke, [flat, none]);
    let from = Point::new(x + 1 + CENTER_BODY, y);
    canvas.line(from, from.offset(CENTER_WING, 0), stroke, [none, flat]);
    let from = Point::new(x, y - CENTER_RUDDER - CENTER_BODY);
    canvas.line(from, from.offset(0, CENTER_RUDDER), stroke, [flat, none]);
}

#[cfg(test)]
mod test {
    use hal::canvas::{DrawList, Point, Primitive, Screen};

    use super::{ArtificialHorizon, RenderConfig};
    use crate::types::AttitudeSample;

    fn config(max_pitch: u8, steps: u8) -> RenderConfig {
        RenderConfig { max_pitch, steps, origin: Point::new(180, 135), width: 200, height: 200 }
    }

    fn render(roll: i16, pitch: i16, config: RenderConfig) -> DrawList<128> {
        let mut canvas = DrawList::<128>::new(Screen::new(359, 269));
        ArtificialHorizon::new(config).draw(&mut canvas, AttitudeSample::new(roll, pitch));
        assert_eq!(0, canvas.dropped());
        canvas
    }

    fn labels(canvas: &DrawList<128>) -> Vec<&str> {
        canvas
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn lines(canvas: &DrawList<128>) -> Vec<(Point, Point)> {
        canvas
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_level_flight() {
        use hal::canvas::{Endcap, Font, HAlign, Stroke, VAlign};

        let canvas = render(0, 0, config(30, 2));
        let primitives = canvas.primitives();
        assert_eq!(4 * 5 + 2 + 3, primitives.len());

        let expected = Primitive::Line {
            from: Point::new(143, 135),
            to: Point::new(168, 135),
            stroke: Stroke::Outlined,
            endcaps: [Endcap::Flat, Endcap::Flat],
        };
        assert_eq!(expected, primitives[10]);
        assert_eq!((Point::new(192, 135), Point::new(217, 135)), lines(&canvas)[7]);

        // +10 rung right above the horizon
        let rung = &primitives[12..17];
        let expected = Primitive::Line {
            from: Point::new(153, 102),
            to: Point::new(207, 102),
            stroke: Stroke::Outlined,
            endcaps: [Endcap::Flat, Endcap::Flat],
        };
        assert_eq!(expected, rung[0]);
        match &rung[1] {
            Primitive::Line { from, to, .. } => {
                assert_eq!((Point::new(153, 102), Point::new(153, 107)), (*from, *to))
            }
            other => panic!("Unexpected {:?}", other),
        }
        match &rung[3] {
            Primitive::Text { text, at, align, font } => {
                assert_eq!("10", text.as_str());
                assert_eq!(Point::new(139, 102), *at);
                assert_eq!((HAlign::Center, VAlign::Middle), *align);
                assert_eq!(Font::Outlined8x8, *font);
            }
            other => panic!("Unexpected {:?}", other),
        }

        // -10 rung below, dashed with ticks pointing up
        let rung = &primitives[5..10];
        match &rung[0] {
            Primitive::Line { from, stroke, .. } => {
                assert_eq!(Point::new(153, 168), *from);
                assert_eq!(Stroke::Dashed(5), *stroke);
            }
            other => panic!("Unexpected {:?}", other),
        }
        match &rung[2] {
            Primitive::Line { from, to, .. } => {
                assert_eq!((Point::new(207, 168), Point::new(207, 163)), (*from, *to))
            }
            other => panic!("Unexpected {:?}", other),
        }
    }

    #[test]
    fn test_horizon_centered_under_roll() {
        for &roll in [-600i16, -300, 0, 450, 800].iter() {
            let canvas = render(roll, 0, config(30, 0));
            let lines = lines(&canvas);
            // horizon line plus center mark only
            assert_eq!(2 + 3, lines.len());
            let (left, right) = (lines[0].0, lines[1].1);
            assert_eq!(Point::new(360, 270), Point::new(left.x + right.x, left.y + right.y));
            if roll == 0 {
                assert_eq!(left.y, right.y);
            }
        }
    }

    #[test]
    fn test_roll_90_ladder_is_vertical() {
        let canvas = render(900, 0, config(30, 1));
        let lines = lines(&canvas);
        let (from, to) = lines[3];
        assert_eq!(from.x, to.x);
        assert_eq!(180, from.x);
        // +10 rung is displaced sideways instead of upwards
        let (from, to) = lines[5];
        assert_eq!(from.x, to.x);
        assert_eq!(147, from.x);
    }

    #[test]
    fn test_wraparound() {
        let canvas = render(0, 950, config(100, 10));
        let labels = labels(&canvas);
        let numbers: Vec<i32> = labels.iter().map(|l| l.parse().unwrap()).collect();
        assert!(numbers.iter().all(|&n| n <= 90));
        assert!(!labels.contains(&"100"));
        // 80 and folded 100
        assert_eq!(4, labels.iter().filter(|&&l| l == "80").count());
        assert_eq!(2, labels.iter().filter(|&&l| l == "90").count());
        // 100 is the topmost rung, drawn last before the center mark
        assert_eq!(vec!["80", "80"], labels[labels.len() - 2..].to_vec());
    }

    #[test]
    fn test_fold() {
        use super::fold;

        assert_eq!(80, fold(100));
        assert_eq!(90, fold(90));
        assert_eq!(-80, fold(-100));
        assert_eq!(-90, fold(-90));
        assert_eq!(30, fold(30));
    }

    #[test]
    fn test_label_symmetry() {
        use hal::canvas::Stroke;

        let canvas = render(0, 0, config(30, 3));
        let labels = labels(&canvas);
        let expected = vec!["30", "30", "20", "20", "10", "10", "10", "10", "20", "20", "30", "30"];
        assert_eq!(expected, labels);
        let strokes: Vec<Stroke> = canvas
            .primitives()
            .iter()
            .filter_map(|p| match p {
                Primitive::Line { stroke: Stroke::Dashed(n), .. } => Some(Stroke::Dashed(*n)),
                _ => None,
            })
            .collect();
        assert_eq!(3, strokes.len());
    }

    #[test]
    fn test_constant_input_is_stable() {
        let first = render(123, -157, config(30, 2));
        let second = render(123, -157, config(30, 2));
        assert_eq!(first.primitives(), second.primitives());
    }

    #[test]
    fn test_center_mark() {
        use super::draw_center_mark;

        let mut canvas = DrawList::<128>::new(Screen::new(359, 269));
        draw_center_mark(&mut canvas, Point::new(180, 135));
        let expected = vec![
            (Point::new(170, 135), Point::new(177, 135)),
            (Point::new(184, 135), Point::new(191, 135)),
            (Point::new(180, 127), Point::new(180, 132)),
        ];
        assert_eq!(expected, lines(&canvas));
    }
}
