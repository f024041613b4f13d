//! Visual transforms derived from the shared pointer state: cursor dot and
//! ring, magnetic offsets, 3D tilt and scroll parallax.

use crate::constants::{
    CURSOR_HOVER_SCALE, CURSOR_PRESS_SCALE, MAGNETIC_DAMPING, MAGNETIC_STIFFNESS,
    MAGNETIC_STRENGTH, TILT_MAX_DEG,
};
use crate::pointer::PointerState;
use crate::spring::{Spring, SpringParams};
use glam::Vec2;

/// Axis-aligned element box in viewport pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.width && p.y >= self.y && p.y <= self.y + self.height
    }

    /// Position of `p` relative to the box, 0..1 on each axis (clamped).
    pub fn normalized(&self, p: Vec2) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new(
            ((p.x - self.x) / w).clamp(0.0, 1.0),
            ((p.y - self.y) / h).clamp(0.0, 1.0),
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorTransform {
    pub translate: Vec2,
    pub scale: f32,
    pub opacity: f32,
}

impl CursorTransform {
    pub fn to_css(&self) -> String {
        format!(
            "translate3d({:.2}px, {:.2}px, 0) translate(-50%, -50%) scale({:.3})",
            self.translate.x, self.translate.y, self.scale
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorStyle {
    Dot,
    Ring,
}

pub fn cursor_transform(state: &PointerState, style: CursorStyle) -> CursorTransform {
    let scale = match style {
        CursorStyle::Dot if state.is_pressed() => CURSOR_PRESS_SCALE,
        CursorStyle::Dot => 1.0,
        CursorStyle::Ring if state.is_hovering() => CURSOR_HOVER_SCALE,
        CursorStyle::Ring if state.is_pressed() => CURSOR_PRESS_SCALE,
        CursorStyle::Ring => 1.0,
    };
    CursorTransform {
        translate: state.smoothed(),
        scale,
        opacity: if state.is_visible() { 1.0 } else { 0.0 },
    }
}

/// Element that leans toward the pointer while hovered and springs back to
/// rest when the pointer leaves.
#[derive(Clone, Debug)]
pub struct Magnet {
    pub strength: f32,
    offset: Spring,
}

impl Magnet {
    pub fn new(strength: f32, params: SpringParams) -> Self {
        Self {
            strength,
            offset: Spring::new(params, Vec2::ZERO),
        }
    }

    pub fn target(&self, pointer: Option<Vec2>, rect: &Rect) -> Vec2 {
        match pointer {
            Some(p) => (p - rect.center()) * self.strength,
            None => Vec2::ZERO,
        }
    }

    /// `pointer` is `Some` while the pointer is over the element.
    pub fn update(&mut self, pointer: Option<Vec2>, rect: &Rect, dt_sec: f32) -> Vec2 {
        let target = self.target(pointer, rect);
        self.offset.step(target, dt_sec)
    }

    pub fn offset(&self) -> Vec2 {
        self.offset.position()
    }

    pub fn to_css(&self) -> String {
        let o = self.offset();
        format!("translate3d({:.2}px, {:.2}px, 0)", o.x, o.y)
    }
}

impl Default for Magnet {
    fn default() -> Self {
        Self::new(
            MAGNETIC_STRENGTH,
            SpringParams {
                stiffness: MAGNETIC_STIFFNESS,
                damping: MAGNETIC_DAMPING,
                mass: 1.0,
            },
        )
    }
}

/// Rotation in degrees: `x` around the horizontal axis, `y` around the
/// vertical axis.
pub fn tilt_angles(pointer: Vec2, rect: &Rect, max_deg: f32) -> Vec2 {
    let n = rect.normalized(pointer) - Vec2::splat(0.5);
    Vec2::new(-n.y * 2.0 * max_deg, n.x * 2.0 * max_deg)
}

#[derive(Clone, Debug)]
pub struct Tilt {
    pub max_deg: f32,
    angles: Spring,
}

impl Tilt {
    pub fn new(max_deg: f32, params: SpringParams) -> Self {
        Self {
            max_deg,
            angles: Spring::new(params, Vec2::ZERO),
        }
    }

    pub fn update(&mut self, pointer: Option<Vec2>, rect: &Rect, dt_sec: f32) -> Vec2 {
        let target = pointer
            .map(|p| tilt_angles(p, rect, self.max_deg))
            .unwrap_or(Vec2::ZERO);
        self.angles.step(target, dt_sec)
    }

    pub fn angles(&self) -> Vec2 {
        self.angles.position()
    }

    pub fn to_css(&self) -> String {
        let a = self.angles();
        format!(
            "perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg)",
            a.x, a.y
        )
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::new(
            TILT_MAX_DEG,
            SpringParams::critical(MAGNETIC_STIFFNESS, 1.0),
        )
    }
}

/// Vertical offset for a layer scrolling at `speed` relative to the page.
#[inline]
pub fn parallax_offset(scroll_y: f32, speed: f32) -> f32 {
    -scroll_y * speed
}
