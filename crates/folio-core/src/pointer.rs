//! Shared pointer state: raw samples from events, spring-smoothed position
//! advanced once per frame, and hover/press flags.
//!
//! Every cursor-like presentation reads from one `PointerState`; none of them
//! subscribe to events on their own.

use crate::constants::{CURSOR_GRACE_SEC, CURSOR_OFFSCREEN};
use crate::spring::{Spring, SpringParams};
use glam::Vec2;

#[derive(Clone, Debug)]
pub struct FollowerConfig {
    pub spring: SpringParams,
    /// Seconds after mount before the follower may render.
    pub grace_sec: f32,
    pub initial: Vec2,
}

impl Default for FollowerConfig {
    fn default() -> Self {
        Self {
            spring: SpringParams::default(),
            grace_sec: CURSOR_GRACE_SEC,
            initial: Vec2::from(CURSOR_OFFSCREEN),
        }
    }
}

#[derive(Clone, Debug)]
pub struct PointerState {
    raw: Vec2,
    smoothed: Spring,
    hovering: bool,
    pressed: bool,
    since_mount: f32,
    grace_sec: f32,
    moved: bool,
}

impl PointerState {
    pub fn new(config: FollowerConfig) -> Self {
        Self {
            raw: config.initial,
            smoothed: Spring::new(config.spring, config.initial),
            hovering: false,
            pressed: false,
            since_mount: 0.0,
            grace_sec: config.grace_sec,
            moved: false,
        }
    }

    pub fn on_move(&mut self, x: f32, y: f32) {
        self.raw = Vec2::new(x, y);
        self.moved = true;
    }

    pub fn on_down(&mut self) {
        self.pressed = true;
    }

    pub fn on_up(&mut self) {
        self.pressed = false;
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }

    /// Advance the smoothed position toward the latest raw sample.
    pub fn tick(&mut self, dt_sec: f32) {
        self.since_mount += dt_sec.max(0.0);
        self.smoothed.step(self.raw, dt_sec);
    }

    pub fn raw(&self) -> Vec2 {
        self.raw
    }

    pub fn smoothed(&self) -> Vec2 {
        self.smoothed.position()
    }

    pub fn velocity(&self) -> Vec2 {
        self.smoothed.velocity()
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Whether at least one pointer sample has arrived.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    pub fn is_visible(&self) -> bool {
        self.since_mount >= self.grace_sec
    }
}

impl Default for PointerState {
    fn default() -> Self {
        Self::new(FollowerConfig::default())
    }
}
