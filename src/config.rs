use std::ops::Range;

/// All tunables of a particle field.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldConfig {
    pub particles: ParticleConfig,
    pub interaction: InteractionConfig,
    pub render: RenderConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ParticleConfig {
    /// Number of standard particles.
    pub count: usize,
    /// Radius of the particle core; the glow extends past it.
    pub size: Range<f32>,
    /// Opacity gained per tick.
    pub fade_in_speed: f32,
    /// Idle drift amplitude in surface units.
    pub amplitude: Range<f32>,
    /// Drift time advanced per tick.
    pub speed: f32,
    /// Angular rate of the drift per unit of drift time.
    pub drift_frequency: f32,
    /// Fraction of the remaining distance to the drift target covered per tick.
    pub drift_smoothing: f32,
    pub large: LargeParticleConfig,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LargeParticleConfig {
    pub count: usize,
    /// Size multiplier applied on top of a standard size.
    pub scale: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct InteractionConfig {
    pub attraction_radius: f32,
    pub attraction_strength: f32,
    pub move_multiplier: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Alpha of the glow center at full opacity.
    pub glow_alpha: f32,
    /// Glow radius as a multiple of particle size.
    pub glow_radius_scale: f32,
    /// Surface height divided by viewport height.
    pub overscan: f32,
    pub background: [u8; 3],
    pub nominal_frame_rate: f32,
    /// Upper bound on ticks simulated in one frame.
    pub max_frame_ticks: f32,
}

impl FieldConfig {
    /// Total particle count after populate.
    pub fn total_particles(&self) -> usize {
        self.particles.count + self.particles.large.count
    }
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: 190,
            size: 0.5..2.0,
            fade_in_speed: 0.02,
            amplitude: 30.0..60.0,
            speed: 0.2,
            drift_frequency: 0.01,
            drift_smoothing: 0.05,
            large: LargeParticleConfig {
                count: 10,
                scale: 2.0,
            },
        }
    }
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            attraction_radius: 400.0,
            attraction_strength: 2.0,
            move_multiplier: 1.5,
        }
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            glow_alpha: 0.8,
            glow_radius_scale: 2.0,
            overscan: 1.2,
            background: [0, 0, 0],
            nominal_frame_rate: 60.0,
            max_frame_ticks: 4.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_page_constants() {
        let config = FieldConfig::default();
        assert_eq!(config.particles.count, 190);
        assert_eq!(config.particles.size, 0.5..2.0);
        assert_eq!(config.particles.fade_in_speed, 0.02);
        assert_eq!(config.particles.amplitude, 30.0..60.0);
        assert_eq!(config.particles.large.count, 10);
        assert_eq!(config.interaction.attraction_radius, 400.0);
        assert_eq!(config.interaction.move_multiplier, 1.5);
        assert_eq!(config.total_particles(), 200);
    }
}
