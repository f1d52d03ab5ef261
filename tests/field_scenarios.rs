use std::cell::Cell;

use glam::Vec2;
use particle_field::{
    Bounds, FieldConfig, FieldState, FrameScheduler, Particle, ParticleField, PointerEvent,
    PointerState, RadialGradient, RenderSurface,
};

#[derive(Default)]
struct CountingSurface {
    clears: usize,
    glows: Vec<RadialGradient>,
}

impl RenderSurface for CountingSurface {
    fn clear_rect(&mut self, _x: f32, _y: f32, _width: f32, _height: f32) {
        self.clears += 1;
        self.glows.clear();
    }

    fn fill_circle(&mut self, fill: &RadialGradient) {
        self.glows.push(fill.clone());
    }
}

#[derive(Default)]
struct Frames(Cell<u32>);

impl FrameScheduler for Frames {
    fn request_frame(&self) {
        self.0.set(self.0.get() + 1);
    }
}

const BOUNDS: Bounds = Bounds::new(800.0, 600.0);

#[test]
fn default_field_lifecycle() {
    let mut field = ParticleField::with_seed(FieldConfig::default(), 2024);
    let mut surface = CountingSurface::default();
    let frames = Frames::default();

    field.resize_viewport(800.0, 500.0);
    assert_eq!(field.state(), FieldState::Populated);
    assert_eq!(field.particles().len(), 200);

    for _ in 0..120 {
        field.tick(&mut surface, &frames, 1.0);
    }

    assert_eq!(field.state(), FieldState::Running);
    assert_eq!(frames.0.get(), 120);
    assert_eq!(surface.clears, 120);
    assert_eq!(surface.glows.len(), 200);

    let bounds = field.bounds();
    for particle in field.particles() {
        assert_eq!(particle.opacity, 1.0);
        assert!(bounds.contains(particle.position));
    }
    for glow in &surface.glows {
        assert!((glow.stops[0].color.a - 0.8).abs() < 1e-6);
        assert_eq!(glow.stops[1].color.a, 0.0);
    }
}

#[test]
fn resize_never_repopulates() {
    let mut field = ParticleField::with_seed(FieldConfig::default(), 1);
    field.resize(BOUNDS);
    field.tick(&mut CountingSurface::default(), &Frames::default(), 1.0);
    let before = field.particles().to_vec();

    field.resize(Bounds::new(400.0, 300.0));
    field.resize(BOUNDS);

    assert_eq!(field.state(), FieldState::Running);
    assert_eq!(field.particles(), before.as_slice());
}

#[test]
fn opacity_after_n_idle_ticks() {
    let config = FieldConfig::default();
    let pointer = PointerState::new();
    let mut particle = Particle::at(Vec2::new(200.0, 200.0), 1.0, 45.0, Vec2::new(1.0, 2.0), 0.2);

    for n in 1..=60 {
        particle.update(&pointer, BOUNDS, &config, 1.0);
        if n >= 50 {
            assert_eq!(particle.opacity, 1.0, "tick {n}");
        } else {
            assert!((particle.opacity - n as f32 * 0.02).abs() < 1e-5, "tick {n}");
        }
    }
}

#[test]
fn corner_particle_without_drift_never_moves() {
    let config = FieldConfig::default();
    let pointer = PointerState::new();
    let mut particle = Particle::at(Vec2::ZERO, 1.0, 0.0, Vec2::ZERO, 0.2);

    for tick in 1..=100 {
        particle.update(&pointer, BOUNDS, &config, 1.0);
        assert_eq!(particle.position, Vec2::ZERO);
        if tick >= 50 {
            assert_eq!(particle.opacity, 1.0);
        }
    }
}

#[test]
fn pointer_on_top_of_particle_holds_it() {
    let config = FieldConfig::default();
    let mut pointer = PointerState::new();
    pointer.apply(PointerEvent::Down { x: 400.0, y: 300.0 });
    let mut particle = Particle::at(Vec2::new(400.0, 300.0), 1.0, 50.0, Vec2::new(0.5, 0.5), 0.2);

    particle.update(&pointer, BOUNDS, &config, 1.0);

    assert_eq!(particle.position, Vec2::new(400.0, 300.0));
}

#[test]
fn held_pointer_attracts_within_radius_only() {
    let config = FieldConfig::default();
    let mut pointer = PointerState::new();
    pointer.apply(PointerEvent::Down { x: 400.0, y: 300.0 });
    let target = Vec2::new(400.0, 300.0);

    let near = Particle::at(Vec2::new(100.0, 300.0), 1.0, 50.0, Vec2::ZERO, 0.2);
    let mut moved = near;
    moved.update(&pointer, BOUNDS, &config, 1.0);
    let step = moved.position - near.position;
    assert!(step.length() > 0.0);
    assert!(step.normalize().dot((target - near.position).normalize()) > 0.999);

    // Exactly on the radius: idle drift, same as with no pointer at all.
    let far = Particle::at(Vec2::new(0.0, 300.0), 1.0, 50.0, Vec2::ZERO, 0.2);
    let mut held = far;
    let mut idle = far;
    held.update(&pointer, BOUNDS, &config, 1.0);
    idle.update(&PointerState::new(), BOUNDS, &config, 1.0);
    assert_eq!(held, idle);
}
