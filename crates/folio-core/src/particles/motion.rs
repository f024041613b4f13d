// Per-variant update rules. `frames` is elapsed time in 60 Hz frames.

use super::Particle;
use glam::Vec2;

/// Wrap a coordinate that left `[-radius, extent + radius]` to the opposite
/// edge.
#[inline]
pub fn wrap(v: f32, radius: f32, extent: f32) -> f32 {
    if v < -radius {
        extent + radius
    } else if v > extent + radius {
        -radius
    } else {
        v
    }
}

#[inline]
pub fn drift(p: &mut Particle, bounds: Vec2, frames: f32) {
    p.position += p.velocity * frames;
    p.position.x = wrap(p.position.x, p.radius, bounds.x);
    p.position.y = wrap(p.position.y, p.radius, bounds.y);
}

/// Horizontal drift plus a sine swing around `origin_y`. An origin left
/// outside the surface by a resize folds back in; the swing is clamped to
/// `[-radius, height + radius]`.
#[inline]
pub fn wave(p: &mut Particle, bounds: Vec2, frames: f32, time: f32, amplitude: f32, frequency: f32) {
    p.position.x = wrap(p.position.x + p.velocity.x * frames, p.radius, bounds.x);
    if p.origin_y < -p.radius || p.origin_y > bounds.y + p.radius {
        p.origin_y = p.origin_y.rem_euclid(bounds.y.max(1.0));
    }
    let y = p.origin_y + (time * frequency + p.phase).sin() * amplitude;
    p.position.y = y.clamp(-p.radius, bounds.y + p.radius);
}

/// Move along the particle's heading and fade. Returns whether the particle
/// is still alive.
#[inline]
pub fn trail(p: &mut Particle, frames: f32, decay: f32, speed_decay: f32, threshold: f32) -> bool {
    p.position += p.velocity * frames;
    p.velocity *= speed_decay.powf(frames);
    let fade = decay.powf(frames);
    p.alpha *= fade;
    p.radius *= fade;
    p.alpha >= threshold && p.radius > 0.05
}
