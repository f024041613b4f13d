// Host-side tests for the particle layers, painted onto a recording surface.

use folio_core::{FieldConfig, ParticleField, Rgba, Surface, Variant};
use glam::Vec2;

const DT: f32 = 1.0 / 60.0;

#[derive(Debug, PartialEq)]
enum Draw {
    Clear,
    Circle(Vec2, f32, Rgba),
    Glow(Vec2, f32, Rgba),
}

struct RecordingSurface {
    size: Vec2,
    calls: Vec<Draw>,
}

impl RecordingSurface {
    fn new(w: f32, h: f32) -> Self {
        Self {
            size: Vec2::new(w, h),
            calls: Vec::new(),
        }
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Vec2 {
        self.size
    }
    fn clear(&mut self) {
        self.calls.push(Draw::Clear);
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Draw::Circle(center, radius, color));
    }
    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.calls.push(Draw::Glow(center, radius, color));
    }
}

fn in_wrap_bounds(field: &ParticleField) -> bool {
    let b = field.bounds();
    field.particles().iter().all(|p| {
        let r = p.radius;
        p.position.x >= -r && p.position.x <= b.x + r && p.position.y >= -r && p.position.y <= b.y + r
    })
}

#[test]
fn blobs_stay_inside_wrap_bounds() {
    for seed in 0..20 {
        let mut field = ParticleField::new(FieldConfig::blobs(), 800.0, 600.0, seed).unwrap();
        assert_eq!(field.len(), FieldConfig::blobs().count);
        field.step(DT);
        assert!(in_wrap_bounds(&field), "seed {seed}");
    }
}

#[test]
fn fast_blobs_wrap_over_many_frames() {
    let mut cfg = FieldConfig::blobs().with_count(40);
    cfg.radius_min = 5.0;
    cfg.radius_max = 10.0;
    cfg.speed_max = 25.0;
    let mut field = ParticleField::new(cfg, 320.0, 240.0, 3).unwrap();
    for _ in 0..600 {
        field.step(DT);
        assert!(in_wrap_bounds(&field));
    }
}

#[test]
fn resize_changes_bounds_not_positions() {
    let mut field = ParticleField::new(FieldConfig::blobs(), 800.0, 600.0, 1).unwrap();
    let before: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    field.resize(400.0, 300.0);
    assert_eq!(field.bounds(), Vec2::new(400.0, 300.0));
    let after: Vec<Vec2> = field.particles().iter().map(|p| p.position).collect();
    assert_eq!(before, after);
}

#[test]
fn wave_particles_oscillate_around_origin() {
    let mut field = ParticleField::new(FieldConfig::wave(), 1024.0, 768.0, 5).unwrap();
    let Variant::Wave { amplitude, .. } = field.config().variant else {
        panic!("wave preset has wave variant");
    };
    for _ in 0..300 {
        field.step(DT);
        for p in field.particles() {
            assert!((p.position.y - p.origin_y).abs() <= amplitude + 1e-3);
            assert!(p.position.x >= -p.radius && p.position.x <= 1024.0 + p.radius);
        }
    }
}

#[test]
fn wave_stays_inside_bounds_after_shrink() {
    let mut field = ParticleField::new(FieldConfig::wave(), 1600.0, 1800.0, 11).unwrap();
    field.resize(1600.0, 900.0);
    for _ in 0..600 {
        field.step(DT);
        assert!(in_wrap_bounds(&field));
    }
}

#[test]
fn wave_swing_is_clamped_on_short_canvas() {
    let mut field = ParticleField::new(FieldConfig::wave(), 800.0, 60.0, 12).unwrap();
    for _ in 0..600 {
        field.step(DT);
        assert!(in_wrap_bounds(&field));
    }
}

#[test]
fn repaint_after_resize_redraws_every_particle() {
    let mut field = ParticleField::new(FieldConfig::wave(), 1024.0, 768.0, 13).unwrap();
    let mut surface = RecordingSurface::new(1024.0, 768.0);
    field.paint(&mut surface);
    field.resize(640.0, 480.0);
    surface.calls.clear();
    field.paint(&mut surface);
    assert_eq!(surface.calls.first(), Some(&Draw::Clear));
    assert_eq!(surface.calls.len(), field.len() + 1);
}

#[test]
fn trail_spawns_only_for_trail_variant() {
    let mut blobs = ParticleField::new(FieldConfig::blobs(), 100.0, 100.0, 1).unwrap();
    let n = blobs.len();
    blobs.spawn_at(Vec2::new(10.0, 10.0));
    assert_eq!(blobs.len(), n);

    let mut trail = ParticleField::new(FieldConfig::trail(), 100.0, 100.0, 1).unwrap();
    assert!(trail.is_empty());
    trail.spawn_at(Vec2::new(10.0, 10.0));
    assert_eq!(trail.len(), 1);
    assert_eq!(trail.particles()[0].position, Vec2::new(10.0, 10.0));
    assert_eq!(trail.particles()[0].alpha, 1.0);
}

#[test]
fn trail_particles_fade_and_are_removed() {
    let mut trail = ParticleField::new(FieldConfig::trail(), 500.0, 500.0, 2).unwrap();
    trail.spawn_at(Vec2::new(250.0, 250.0));
    let mut prev_alpha = 1.0;
    let mut frames = 0;
    while !trail.is_empty() {
        trail.step(DT);
        frames += 1;
        if let Some(p) = trail.particles().first() {
            assert!(p.alpha < prev_alpha);
            assert!(p.alpha >= 0.05);
            prev_alpha = p.alpha;
        }
        assert!(frames < 200, "trail particle never expired");
    }
    // 0.96^n < 0.05 first holds at n = 74
    assert_eq!(frames, 74);
}

#[test]
fn trail_is_capped_at_max_particles() {
    let mut cfg = FieldConfig::trail();
    if let Variant::Trail { max_particles, .. } = &mut cfg.variant {
        *max_particles = 10;
    }
    let mut trail = ParticleField::new(cfg, 500.0, 500.0, 2).unwrap();
    for i in 0..25 {
        trail.spawn_at(Vec2::new(i as f32, 0.0));
    }
    assert_eq!(trail.len(), 10);
    assert_eq!(trail.particles()[0].position.x, 15.0);
}

#[test]
fn paint_clears_then_draws_each_particle() {
    let field = ParticleField::new(FieldConfig::blobs().with_count(3), 200.0, 200.0, 4).unwrap();
    let mut surface = RecordingSurface::new(200.0, 200.0);
    field.paint(&mut surface);
    assert_eq!(surface.calls.len(), 4);
    assert_eq!(surface.calls[0], Draw::Clear);
    assert!(surface.calls[1..].iter().all(|c| matches!(c, Draw::Glow(..))));

    let mut trail = ParticleField::new(FieldConfig::trail(), 200.0, 200.0, 4).unwrap();
    trail.spawn_at(Vec2::new(1.0, 1.0));
    trail.step(DT);
    let mut surface = RecordingSurface::new(200.0, 200.0);
    trail.paint(&mut surface);
    match &surface.calls[1] {
        Draw::Circle(_, _, color) => assert!((color.a - 0.96).abs() < 1e-4),
        other => panic!("expected circle, got {other:?}"),
    }
}

#[test]
fn step_is_frame_rate_independent() {
    let mut a = ParticleField::new(FieldConfig::trail(), 500.0, 500.0, 8).unwrap();
    let mut b = ParticleField::new(FieldConfig::trail(), 500.0, 500.0, 8).unwrap();
    a.spawn_at(Vec2::new(100.0, 100.0));
    b.spawn_at(Vec2::new(100.0, 100.0));
    for _ in 0..4 {
        a.step(DT);
    }
    for _ in 0..2 {
        b.step(2.0 * DT);
    }
    let (pa, pb) = (&a.particles()[0], &b.particles()[0]);
    assert!((pa.alpha - pb.alpha).abs() < 1e-4);
}
