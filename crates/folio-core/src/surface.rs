//! Drawing surface abstraction the particle layers paint onto. The browser
//! build implements it over `CanvasRenderingContext2d`.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    /// 0..1
    pub a: f32,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_array(c: [f32; 4]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self {
            a: a.clamp(0.0, 1.0),
            ..self
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r.round() as u8,
            self.g.round() as u8,
            self.b.round() as u8,
            self.a.clamp(0.0, 1.0)
        )
    }
}

pub trait Surface {
    fn size(&self) -> Vec2;

    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Circle filled with a radial gradient from `color` at the center to
    /// fully transparent at the edge.
    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgba);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_color_rounds_channels() {
        let c = Rgba::new(139.4, 92.6, 246.0, 0.35);
        assert_eq!(c.to_css(), "rgba(139, 93, 246, 0.350)");
        assert_eq!(c.with_alpha(2.0).a, 1.0);
    }
}
