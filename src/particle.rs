use std::f32::consts::TAU;
use std::ops::Range;

use glam::Vec2;
use rand::Rng;

use crate::config::{FieldConfig, ParticleConfig, RenderConfig};
use crate::field::Bounds;
use crate::pointer::PointerState;
use crate::surface::{RadialGradient, RenderSurface, Rgba};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Center of the idle drift. Moves only on wraparound.
    pub origin: Vec2,
    pub position: Vec2,
    pub size: f32,
    /// Fade-in progress, also scaling the drift amplitude.
    pub opacity: f32,
    /// Accumulated drift time.
    pub time: f32,
    /// Drift phase per axis, in radians.
    pub angle: Vec2,
    pub amplitude: f32,
    pub speed: f32,
}

fn sample<R: Rng + ?Sized>(rng: &mut R, range: &Range<f32>) -> f32 {
    range.start + rng.r#gen::<f32>() * (range.end - range.start)
}

impl Particle {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, bounds: Bounds, config: &ParticleConfig) -> Self {
        let origin = Vec2::new(
            rng.r#gen::<f32>() * bounds.width,
            rng.r#gen::<f32>() * bounds.height,
        );
        let size = sample(rng, &config.size);
        let amplitude = sample(rng, &config.amplitude);
        let angle = Vec2::new(rng.r#gen::<f32>() * TAU, rng.r#gen::<f32>() * TAU);

        Self::at(origin, size, amplitude, angle, config.speed)
    }

    /// A fully transparent particle resting at `origin`.
    pub fn at(origin: Vec2, size: f32, amplitude: f32, angle: Vec2, speed: f32) -> Self {
        Self {
            origin,
            position: origin,
            size,
            opacity: 0.0,
            time: 0.0,
            angle,
            amplitude,
            speed,
        }
    }

    /// Advances the particle by `dt` ticks.
    pub fn update(&mut self, pointer: &PointerState, bounds: Bounds, config: &FieldConfig, dt: f32) {
        let dt = dt.max(0.0);
        self.fade_in(config.particles.fade_in_speed, dt);

        let attracted = match pointer.attractor() {
            Some(target) => self.attract(target, config, dt),
            None => false,
        };
        if !attracted {
            self.drift(&config.particles, dt);
        }

        self.wrap(bounds);
    }

    /// Accumulated increments fall a few ulps short of 1.0, so the last step snaps.
    fn fade_in(&mut self, fade_in_speed: f32, dt: f32) {
        let opacity = self.opacity + fade_in_speed * dt;
        self.opacity = if 1.0 - opacity < fade_in_speed * 1e-3 {
            1.0
        } else {
            opacity
        };
    }

    /// Returns false when the pointer is out of range and drift should apply.
    fn attract(&mut self, target: Vec2, config: &FieldConfig, dt: f32) -> bool {
        let interaction = &config.interaction;
        let delta = target - self.position;
        let distance = delta.length();

        if distance >= interaction.attraction_radius {
            return false;
        }
        // Sitting on the pointer: nothing to move towards this tick.
        if distance > 0.0 {
            let force = (1.0 - distance / interaction.attraction_radius)
                * interaction.attraction_strength;
            self.position += delta / distance * force * interaction.move_multiplier * dt;
        }
        true
    }

    fn drift(&mut self, config: &ParticleConfig, dt: f32) {
        self.time += self.speed * dt;

        let amplitude = self.amplitude * self.opacity;
        let phase = self.time * config.drift_frequency;
        let target = self.origin
            + Vec2::new(
                (self.angle.x + phase).cos(),
                (self.angle.y + phase).sin(),
            ) * amplitude;

        let smoothing = if dt == 1.0 {
            config.drift_smoothing
        } else {
            1.0 - (1.0 - config.drift_smoothing).powf(dt)
        };
        self.position += (target - self.position) * smoothing;
    }

    fn wrap(&mut self, bounds: Bounds) {
        if self.position.x < 0.0 {
            self.position.x = bounds.width;
            self.origin.x = self.position.x;
        } else if self.position.x > bounds.width {
            self.position.x = 0.0;
            self.origin.x = self.position.x;
        }

        if self.position.y < 0.0 {
            self.position.y = bounds.height;
            self.origin.y = self.position.y;
        } else if self.position.y > bounds.height {
            self.position.y = 0.0;
            self.origin.y = self.position.y;
        }
    }

    pub fn glow(&self, config: &RenderConfig) -> RadialGradient {
        RadialGradient::new(self.position, self.size * config.glow_radius_scale)
            .with_stop(0.0, Rgba::white(self.opacity * config.glow_alpha))
            .with_stop(1.0, Rgba::white(0.0))
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S, config: &RenderConfig) {
        surface.fill_circle(&self.glow(config));
    }
}
