//! Canvas particle layers: ambient gradient blobs, a sine wave band and a
//! pointer trail. All three share one field type and differ only in their
//! `Variant` update rule.

pub mod motion;

use crate::constants::*;
use crate::error::ConfigError;
use crate::surface::{Rgba, Surface};
use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::f32::consts::TAU;

pub type Palette = SmallVec<[Rgba; 4]>;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    /// Pixels per frame. For trail particles this is heading times speed.
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgba,
    /// Trail particles fade from 1 toward 0; persistent ones stay at 1.
    pub alpha: f32,
    pub origin_y: f32,
    pub phase: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Variant {
    Blobs,
    Wave {
        amplitude: f32,
        /// Radians per frame.
        frequency: f32,
        /// Vertical band, as fractions of the surface height, that wave
        /// origins are placed in.
        band: (f32, f32),
    },
    Trail {
        decay: f32,
        speed_decay: f32,
        alpha_threshold: f32,
        max_particles: usize,
    },
}

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub variant: Variant,
    /// Initial particle count; trail fields start empty.
    pub count: usize,
    pub palette: Palette,
    pub radius_min: f32,
    pub radius_max: f32,
    pub speed_min: f32,
    pub speed_max: f32,
}

fn palette(colors: &[[f32; 4]]) -> Palette {
    colors.iter().copied().map(Rgba::from_array).collect()
}

impl FieldConfig {
    pub fn blobs() -> Self {
        Self {
            variant: Variant::Blobs,
            count: BLOB_COUNT,
            palette: palette(&BLOB_PALETTE),
            radius_min: BLOB_RADIUS_MIN,
            radius_max: BLOB_RADIUS_MAX,
            speed_min: 0.0,
            speed_max: BLOB_SPEED_MAX,
        }
    }

    pub fn wave() -> Self {
        Self {
            variant: Variant::Wave {
                amplitude: WAVE_AMPLITUDE,
                frequency: WAVE_FREQUENCY,
                band: (WAVE_BAND_MIN, WAVE_BAND_MAX),
            },
            count: WAVE_COUNT,
            palette: palette(&WAVE_PALETTE),
            radius_min: WAVE_RADIUS_MIN,
            radius_max: WAVE_RADIUS_MAX,
            speed_min: 0.0,
            speed_max: WAVE_DRIFT_MAX,
        }
    }

    pub fn trail() -> Self {
        Self {
            variant: Variant::Trail {
                decay: TRAIL_DECAY,
                speed_decay: TRAIL_SPEED_DECAY,
                alpha_threshold: TRAIL_ALPHA_THRESHOLD,
                max_particles: TRAIL_MAX_PARTICLES,
            },
            count: 0,
            palette: palette(&TRAIL_PALETTE),
            radius_min: TRAIL_RADIUS_MIN,
            radius_max: TRAIL_RADIUS_MAX,
            speed_min: TRAIL_SPEED_MIN,
            speed_max: TRAIL_SPEED_MAX,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if !(self.radius_min > 0.0 && self.radius_min <= self.radius_max) {
            return Err(ConfigError::RadiusRange {
                min: self.radius_min,
                max: self.radius_max,
            });
        }
        if !(self.speed_min >= 0.0 && self.speed_min <= self.speed_max) {
            return Err(ConfigError::SpeedRange {
                min: self.speed_min,
                max: self.speed_max,
            });
        }
        if let Variant::Trail {
            decay,
            speed_decay,
            alpha_threshold,
            max_particles,
        } = self.variant
        {
            for (name, value) in [
                ("decay", decay),
                ("speed_decay", speed_decay),
                ("alpha_threshold", alpha_threshold),
            ] {
                if !(value > 0.0 && value < 1.0) {
                    return Err(ConfigError::OutOfUnitRange { name, value });
                }
            }
            if max_particles == 0 {
                return Err(ConfigError::ZeroCapacity);
            }
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self::blobs()
    }
}

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    bounds: Vec2,
    /// Elapsed frames since creation; drives the wave phase.
    time: f32,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig, width: f32, height: f32, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut field = Self {
            particles: Vec::with_capacity(config.count),
            bounds: Vec2::new(width.max(0.0), height.max(0.0)),
            time: 0.0,
            rng: StdRng::seed_from_u64(seed),
            config,
        };
        if !matches!(field.config.variant, Variant::Trail { .. }) {
            for _ in 0..field.config.count {
                let p = field.spawn_persistent();
                field.particles.push(p);
            }
        }
        log::debug!(
            "[particles] {} field with {} particles on {}x{}",
            field.variant_name(),
            field.particles.len(),
            width,
            height
        );
        Ok(field)
    }

    fn variant_name(&self) -> &'static str {
        match self.config.variant {
            Variant::Blobs => "blobs",
            Variant::Wave { .. } => "wave",
            Variant::Trail { .. } => "trail",
        }
    }

    fn pick_color(&mut self) -> Rgba {
        self.config
            .palette
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(Rgba::TRANSPARENT)
    }

    fn spawn_persistent(&mut self) -> Particle {
        let (w, h) = (self.bounds.x, self.bounds.y);
        let radius = self
            .rng
            .gen_range(self.config.radius_min..=self.config.radius_max);
        let s = self.config.speed_max;
        let color = self.pick_color();
        let x = self.rng.gen_range(0.0..=w);
        match self.config.variant {
            Variant::Wave { band, .. } => {
                let origin_y = self.rng.gen_range(h * band.0..=h * band.1);
                Particle {
                    position: Vec2::new(x, origin_y),
                    velocity: Vec2::new(self.rng.gen_range(-s..=s), 0.0),
                    radius,
                    color,
                    alpha: 1.0,
                    origin_y,
                    phase: self.rng.gen_range(0.0..TAU),
                }
            }
            _ => {
                let y = self.rng.gen_range(0.0..=h);
                Particle {
                    position: Vec2::new(x, y),
                    velocity: Vec2::new(self.rng.gen_range(-s..=s), self.rng.gen_range(-s..=s)),
                    radius,
                    color,
                    alpha: 1.0,
                    origin_y: y,
                    phase: 0.0,
                }
            }
        }
    }

    /// Emit one trail particle at `at`. Persistent fields ignore this.
    pub fn spawn_at(&mut self, at: Vec2) {
        let Variant::Trail { max_particles, .. } = self.config.variant else {
            return;
        };
        let angle = self.rng.gen_range(0.0..TAU);
        let speed = self
            .rng
            .gen_range(self.config.speed_min..=self.config.speed_max);
        let radius = self
            .rng
            .gen_range(self.config.radius_min..=self.config.radius_max);
        let color = self.pick_color();
        self.particles.push(Particle {
            position: at,
            velocity: Vec2::from_angle(angle) * speed,
            radius,
            color,
            alpha: 1.0,
            origin_y: at.y,
            phase: angle,
        });
        if self.particles.len() > max_particles {
            let excess = self.particles.len() - max_particles;
            self.particles.drain(..excess);
        }
    }

    /// Advance the simulation by `dt_sec` of wall time.
    pub fn step(&mut self, dt_sec: f32) {
        let frames = (dt_sec * REFERENCE_FPS).clamp(0.0, MAX_FRAMES_PER_STEP);
        self.time += frames;
        let bounds = self.bounds;
        match self.config.variant {
            Variant::Blobs => {
                for p in &mut self.particles {
                    motion::drift(p, bounds, frames);
                }
            }
            Variant::Wave {
                amplitude,
                frequency,
                ..
            } => {
                let time = self.time;
                for p in &mut self.particles {
                    motion::wave(p, bounds, frames, time, amplitude, frequency);
                }
            }
            Variant::Trail {
                decay,
                speed_decay,
                alpha_threshold,
                ..
            } => {
                self.particles
                    .retain_mut(|p| motion::trail(p, frames, decay, speed_decay, alpha_threshold));
            }
        }
    }

    /// Change the wrap bounds. Existing positions are left as they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.bounds = Vec2::new(width.max(0.0), height.max(0.0));
    }

    /// Clear the surface and redraw every particle.
    pub fn paint<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear();
        for p in &self.particles {
            let color = p.color.with_alpha(p.color.a * p.alpha);
            match self.config.variant {
                Variant::Blobs => surface.fill_glow(p.position, p.radius, color),
                _ => surface.fill_circle(p.position, p.radius, color),
            }
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_validate() {
        assert!(FieldConfig::blobs().validate().is_ok());
        assert!(FieldConfig::wave().validate().is_ok());
        assert!(FieldConfig::trail().validate().is_ok());
    }

    #[test]
    fn rejects_bad_trail_decay() {
        let mut cfg = FieldConfig::trail();
        if let Variant::Trail { decay, .. } = &mut cfg.variant {
            *decay = 1.0;
        }
        assert_eq!(
            ParticleField::new(cfg, 100.0, 100.0, 1).err(),
            Some(ConfigError::OutOfUnitRange {
                name: "decay",
                value: 1.0
            })
        );
    }

    #[test]
    fn rejects_empty_palette() {
        let mut cfg = FieldConfig::blobs();
        cfg.palette.clear();
        assert!(matches!(
            ParticleField::new(cfg, 100.0, 100.0, 1),
            Err(ConfigError::EmptyPalette)
        ));
    }

    #[test]
    fn same_seed_same_field() {
        let a = ParticleField::new(FieldConfig::wave(), 640.0, 480.0, 9).unwrap();
        let b = ParticleField::new(FieldConfig::wave(), 640.0, 480.0, 9).unwrap();
        assert_eq!(a.particles(), b.particles());
    }
}
