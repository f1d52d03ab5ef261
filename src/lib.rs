//! An interactive background particle field.
//!
//! Particles fade in, drift around their origin on a slow Lissajous path and
//! are pulled towards a held pointer. [`ParticleField`] owns the particles and
//! runs one frame per [`ParticleField::tick`]; drawing goes through the
//! [`RenderSurface`] trait so any 2D backend can host it. [`host`] provides
//! the `egui` backend used by the `particle-field` binary.

pub mod config;
pub mod error;
pub mod field;
pub mod host;
pub mod particle;
pub mod pointer;
pub mod surface;

pub use config::{
    FieldConfig, InteractionConfig, LargeParticleConfig, ParticleConfig, RenderConfig,
};
pub use error::{Error, Result};
pub use field::{Bounds, FieldState, ParticleField};
pub use particle::Particle;
pub use pointer::{PointerEvent, PointerState};
pub use surface::{ColorStop, FrameScheduler, RadialGradient, RenderSurface, Rgba};
