use core::fmt::Write;

use heapless::{String, Vec};

pub type Text = String<40>;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i16, dy: i16) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// Drawable area in pixels, `right` and `bottom` being the last addressable coordinate.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Screen {
    pub right: i16,
    pub bottom: i16,
}

impl Screen {
    pub const fn new(right: i16, bottom: i16) -> Self {
        Self { right, bottom }
    }

    pub fn left(&self) -> i16 {
        0
    }

    pub fn x_middle(&self) -> i16 {
        (self.right + 1) / 2
    }

    pub fn y_middle(&self) -> i16 {
        (self.bottom + 1) / 2
    }

    pub fn middle(&self) -> Point {
        Point::new(self.x_middle(), self.y_middle())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Black,
    White,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Endcap {
    None,
    Flat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Stroke {
    Outlined,
    /// Outlined, with a dash every `n` pixels
    Dashed(u8),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum HAlign {
    Left,
    Center,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum VAlign {
    Top,
    Middle,
    Bottom,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Font {
    Outlined8x8,
    Regular8x10,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Image {
    Logo,
    FirmwareLogo,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Scale {
    pub value: i16,
    pub range: u16,
    pub align: HAlign,
    pub at: Point,
    pub height: u16,
    pub minor_step: u16,
    pub major_step: u16,
    pub minor_length: u8,
    pub major_length: u8,
    pub bound_length: u8,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Line { from: Point, to: Point, stroke: Stroke, endcaps: [Endcap; 2] },
    Rectangle { at: Point, width: u16, height: u16, color: Color },
    HLine { x: [i16; 2], y: i16, color: Color },
    VLine { x: i16, y: [i16; 2], color: Color },
    Text { text: Text, at: Point, align: (HAlign, VAlign), font: Font },
    Image { image: Image, at: Point, align: (HAlign, VAlign) },
    VerticalScale(Scale),
}

/// Rasterizer for a single video frame.
///
/// The implementor owns the pixel buffer, callers only describe shapes.
pub trait Canvas {
    fn screen(&self) -> Screen;
    fn clear(&mut self);
    fn draw(&mut self, primitive: Primitive);

    fn line(&mut self, from: Point, to: Point, stroke: Stroke, endcaps: [Endcap; 2]) {
        self.draw(Primitive::Line { from, to, stroke, endcaps })
    }

    fn rectangle(&mut self, at: Point, width: u16, height: u16, color: Color) {
        self.draw(Primitive::Rectangle { at, width, height, color })
    }

    fn text(&mut self, string: &str, at: Point, align: (HAlign, VAlign), font: Font) {
        let mut text = Text::new();
        for ch in string.chars() {
            if text.push(ch).is_err() {
                break;
            }
        }
        self.draw(Primitive::Text { text, at, align, font })
    }

    fn image(&mut self, image: Image, at: Point, align: (HAlign, VAlign)) {
        self.draw(Primitive::Image { image, at, align })
    }

    fn number(&mut self, value: i32, at: Point, align: (HAlign, VAlign), font: Font) {
        let mut text = Text::new();
        write!(text, "{}", value).ok();
        self.draw(Primitive::Text { text, at, align, font })
    }
}

/// Canvas recording primitives instead of rasterizing them,
/// primitives beyond capacity are counted and dropped.
pub struct DrawList<const N: usize> {
    screen: Screen,
    primitives: Vec<Primitive, N>,
    dropped: usize,
}

impl<const N: usize> DrawList<N> {
    pub fn new(screen: Screen) -> Self {
        Self { screen, primitives: Vec::new(), dropped: 0 }
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    pub fn dropped(&self) -> usize {
        self.dropped
    }
}

impl<const N: usize> Canvas for DrawList<N> {
    fn screen(&self) -> Screen {
        self.screen
    }

    fn clear(&mut self) {
        self.primitives.clear();
        self.dropped = 0;
    }

    fn draw(&mut self, primitive: Primitive) {
        if self.primitives.push(primitive).is_err() {
            self.dropped += 1;
        }
    }
}
