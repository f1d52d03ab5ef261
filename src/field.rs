use glam::Vec2;
use log::{debug, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::pointer::{PointerEvent, PointerState};
use crate::surface::{FrameScheduler, RenderSurface};

/// Extent of the render surface, in surface units.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldState {
    Uninitialized,
    Populated,
    Running,
}

pub struct ParticleField {
    config: FieldConfig,
    particles: Vec<Particle>,
    bounds: Bounds,
    pointer: PointerState,
    /// Viewport to surface coordinate factor per axis.
    input_scale: Vec2,
    state: FieldState,
    rng: StdRng,
}

impl ParticleField {
    pub fn new(config: FieldConfig) -> Self {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// A field whose particle layout is reproducible for a given seed.
    pub fn with_seed(config: FieldConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: FieldConfig, rng: StdRng) -> Self {
        Self {
            particles: Vec::with_capacity(config.total_particles()),
            config,
            bounds: Bounds::default(),
            pointer: PointerState::new(),
            input_scale: Vec2::ONE,
            state: FieldState::Uninitialized,
            rng,
        }
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub fn state(&self) -> FieldState {
        self.state
    }

    pub fn input_scale(&self) -> Vec2 {
        self.input_scale
    }

    /// Sets new surface bounds, populating the field the first time they
    /// have an area.
    ///
    /// Existing particles keep their positions; wraparound pulls any that
    /// are now outside back in on their next update.
    pub fn resize(&mut self, bounds: Bounds) {
        debug!("resizing field to {}x{}", bounds.width, bounds.height);
        self.bounds = bounds;

        if self.state == FieldState::Uninitialized && !bounds.is_empty() {
            self.populate();
        }
    }

    /// Resizes to a viewport, making the surface `overscan` times taller.
    pub fn resize_viewport(&mut self, width: f32, height: f32) {
        let bounds = Bounds::new(width, height * self.config.render.overscan);
        self.input_scale = Vec2::new(
            if width > 0.0 { bounds.width / width } else { 1.0 },
            if height > 0.0 { bounds.height / height } else { 1.0 },
        );
        self.resize(bounds);
    }

    /// Replaces all particles with a fresh set.
    pub fn populate(&mut self) {
        let config = &self.config.particles;
        self.particles.clear();

        for _ in 0..config.count {
            self.particles
                .push(Particle::new(&mut self.rng, self.bounds, config));
        }
        for _ in 0..config.large.count {
            let mut particle = Particle::new(&mut self.rng, self.bounds, config);
            particle.size *= config.large.scale;
            self.particles.push(particle);
        }

        info!(
            "populated {} particles ({} large) over {}x{}",
            self.particles.len(),
            config.large.count,
            self.bounds.width,
            self.bounds.height
        );
        self.state = FieldState::Populated;
    }

    /// Applies an event given in viewport coordinates.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        self.pointer.apply(event.scaled(self.input_scale));
    }

    /// Runs one frame: clear, update and draw every particle, reschedule.
    pub fn tick<S, F>(&mut self, surface: &mut S, scheduler: &F, dt: f32)
    where
        S: RenderSurface + ?Sized,
        F: FrameScheduler + ?Sized,
    {
        surface.clear_rect(0.0, 0.0, self.bounds.width, self.bounds.height);

        for particle in &mut self.particles {
            particle.update(&self.pointer, self.bounds, &self.config, dt);
            particle.draw(surface, &self.config.render);
        }

        if self.state == FieldState::Populated {
            debug!("field running");
            self.state = FieldState::Running;
        }
        trace!("tick dt={dt:.3} particles={}", self.particles.len());

        scheduler.request_frame();
    }
}
