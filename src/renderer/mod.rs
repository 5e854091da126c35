//! Frame rendering
//!
//! Draws the simulation onto any [`DrawSurface`]: a Canvas 2D context on
//! web, a recording surface in tests. The renderer only reads state.

pub mod frame;
pub mod meter;
pub mod ship;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use frame::{render_frame, sky_color};
pub use ship::draw_ship_preview;

use glam::Vec2;

/// RGBA color (alpha in [0, 1])
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn hex(value: u32) -> Self {
        Self::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    /// From HSL (hue in degrees, saturation and lightness in [0, 1])
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let h = hue.rem_euclid(360.0) / 60.0;
        let x = c * (1.0 - (h % 2.0 - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };
        let m = lightness - c / 2.0;
        let to_u8 = |v: f32| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(to_u8(r), to_u8(g), to_u8(b))
    }

    /// CSS color string
    pub fn to_css(&self) -> String {
        if self.a >= 1.0 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Text alignment around the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// An immediate-mode 2D drawing surface with a transform stack
pub trait DrawSurface {
    /// Push the current transform and alpha
    fn save(&mut self);
    /// Pop back to the last saved transform and alpha
    fn restore(&mut self);
    fn translate(&mut self, offset: Vec2);
    fn rotate(&mut self, radians: f32);
    fn scale(&mut self, factor: Vec2);
    fn set_alpha(&mut self, alpha: f32);

    fn clear(&mut self, size: Vec2);
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color);
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);
    fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);
    fn fill_text(&mut self, text: &str, at: Vec2, px: f32, bold: bool, align: TextAlign, color: Color);
}

#[cfg(test)]
pub(crate) mod recording {
    //! Test surface that records every call

    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    pub enum Op {
        Save,
        Restore,
        Translate(Vec2),
        Rotate(f32),
        Scale(Vec2),
        Alpha(f32),
        Clear,
        Rect(Vec2, Vec2, Color),
        Polygon(Vec<Vec2>, Color),
        StrokePolygon(Vec<Vec2>, Color),
        Circle(Vec2, f32, Color),
        Ellipse(Vec2, Vec2, Color),
        Line(Vec2, Vec2, Color),
        Text(String, Vec2),
    }

    #[derive(Debug, Default)]
    pub struct RecordingSurface {
        pub ops: Vec<Op>,
    }

    impl RecordingSurface {
        pub fn count(&self, pred: impl Fn(&Op) -> bool) -> usize {
            self.ops.iter().filter(|op| pred(op)).count()
        }

        pub fn texts(&self) -> Vec<&str> {
            self.ops
                .iter()
                .filter_map(|op| match op {
                    Op::Text(t, _) => Some(t.as_str()),
                    _ => None,
                })
                .collect()
        }
    }

    impl DrawSurface for RecordingSurface {
        fn save(&mut self) {
            self.ops.push(Op::Save);
        }
        fn restore(&mut self) {
            self.ops.push(Op::Restore);
        }
        fn translate(&mut self, offset: Vec2) {
            self.ops.push(Op::Translate(offset));
        }
        fn rotate(&mut self, radians: f32) {
            self.ops.push(Op::Rotate(radians));
        }
        fn scale(&mut self, factor: Vec2) {
            self.ops.push(Op::Scale(factor));
        }
        fn set_alpha(&mut self, alpha: f32) {
            self.ops.push(Op::Alpha(alpha));
        }
        fn clear(&mut self, _size: Vec2) {
            self.ops.push(Op::Clear);
        }
        fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Color) {
            self.ops.push(Op::Rect(origin, size, color));
        }
        fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
            self.ops.push(Op::Polygon(points.to_vec(), color));
        }
        fn stroke_polygon(&mut self, points: &[Vec2], color: Color, _width: f32) {
            self.ops.push(Op::StrokePolygon(points.to_vec(), color));
        }
        fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
            self.ops.push(Op::Circle(center, radius, color));
        }
        fn fill_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color) {
            self.ops.push(Op::Ellipse(center, radii, color));
        }
        fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, _width: f32) {
            self.ops.push(Op::Line(from, to, color));
        }
        fn fill_text(&mut self, text: &str, at: Vec2, _px: f32, _bold: bool, _align: TextAlign, _color: Color) {
            self.ops.push(Op::Text(text.to_string(), at));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_and_css() {
        let c = Color::hex(0x27ae60);
        assert_eq!((c.r, c.g, c.b), (0x27, 0xae, 0x60));
        assert_eq!(c.to_css(), "rgb(39, 174, 96)");
        assert_eq!(Color::WHITE.with_alpha(0.5).to_css(), "rgba(255, 255, 255, 0.5)");
        assert_eq!(Color::WHITE.with_alpha(3.0).a, 1.0);
    }

    #[test]
    fn test_hsl() {
        // hsl(200, 50%, 60%) ≈ rgb(102, 170, 204)
        let c = Color::hsl(200.0, 0.5, 0.6);
        assert_eq!((c.r, c.g, c.b), (102, 170, 204));
        let red = Color::hsl(0.0, 1.0, 0.5);
        assert_eq!((red.r, red.g, red.b), (255, 0, 0));
    }
}
