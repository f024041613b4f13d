//! Second-order spring used to smooth pointer-driven motion.

use crate::constants::{
    CURSOR_DAMPING, CURSOR_MASS, CURSOR_STIFFNESS, SPRING_MAX_DT_SEC, SPRING_SUBSTEP_SEC,
};
use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringParams {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringParams {
    /// Damping that makes the spring critically damped for the given
    /// stiffness and mass.
    pub fn critical(stiffness: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping: 2.0 * (stiffness * mass).sqrt(),
            mass,
        }
    }

    /// 1.0 is critical, below is bouncy, above is sluggish.
    pub fn damping_ratio(&self) -> f32 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self {
            stiffness: CURSOR_STIFFNESS,
            damping: CURSOR_DAMPING,
            mass: CURSOR_MASS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Spring {
    pub params: SpringParams,
    position: Vec2,
    velocity: Vec2,
}

impl Spring {
    pub fn new(params: SpringParams, position: Vec2) -> Self {
        Self {
            params,
            position,
            velocity: Vec2::ZERO,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Place the spring at rest at `position`.
    pub fn reset(&mut self, position: Vec2) {
        self.position = position;
        self.velocity = Vec2::ZERO;
    }

    /// Advance toward `target` by `dt_sec`, in fixed sub-steps so stiff
    /// springs stay stable at low frame rates.
    pub fn step(&mut self, target: Vec2, dt_sec: f32) -> Vec2 {
        let mut remaining = dt_sec.clamp(0.0, SPRING_MAX_DT_SEC);
        let SpringParams {
            stiffness,
            damping,
            mass,
        } = self.params;
        let inv_mass = 1.0 / mass.max(1e-4);
        while remaining > 0.0 {
            let h = remaining.min(SPRING_SUBSTEP_SEC);
            let accel =
                (stiffness * (target - self.position) - damping * self.velocity) * inv_mass;
            self.velocity += accel * h;
            self.position += self.velocity * h;
            remaining -= h;
        }
        self.position
    }

    pub fn is_settled(&self, target: Vec2, epsilon: f32) -> bool {
        self.position.distance(target) <= epsilon && self.velocity.length() <= epsilon
    }
}
