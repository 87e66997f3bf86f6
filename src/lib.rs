//! light2d - 2D lighting with raymarched circular occluders
//!
//! Lights a pre-rendered color buffer with:
//! - an ambient color applied uniformly to every pixel
//! - point lights with a smooth polynomial falloff and a hard radius cutoff
//! - circular occluders casting hard shadows, found by sphere tracing a signed
//!   distance field in screen space
//!
//! # Layers
//! - [`lighting`]: the per-fragment evaluator (pure functions, no engine state)
//! - [`scene`]: ECS components and extraction into an immutable [`LightingFrame`]
//! - [`resources`]: capacity-aware light/occluder storage and color buffers
//! - [`pipeline`]: the [`LightingPass`] evaluating every pixel in parallel

pub mod error;
pub mod lighting;
pub mod pipeline;
pub mod resources;
pub mod scene;

// Re-export Bevy ECS prelude for users
pub use bevy_ecs::prelude::*;

pub use error::{LightingError, LightingResult};
pub use lighting::{MarchSettings, DEFAULT_MAX_MARCH_STEPS};
pub use pipeline::LightingPass;
pub use resources::{ColorBuffer, GpuArray, MAX_FIXED_BINDINGS};
pub use scene::{
    extract_frame, AmbientLight2d, Camera2d, CircularOccluder2d, LightingFrame, PointLight2d,
    Transform, Viewport,
};

/// How light and occluder collections are stored for evaluation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BindingMode {
    /// Variable-length collections, size queried at evaluation time
    #[default]
    Dynamic,
    /// Fixed arrays of [`MAX_FIXED_BINDINGS`] zero-initialized slots
    /// (platforms without arbitrary-length storage buffers)
    Fixed,
}

/// How the base color buffer is sampled per fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SamplingMode {
    /// Closest texel, clamped to edge
    Nearest,
    /// Bilinear filtering, clamped to edge
    #[default]
    Linear,
}

/// Configuration for the lighting pass
#[derive(Debug, Clone)]
pub struct LightingConfig {
    /// Maximum sphere-tracing steps per light/occluder pair
    pub max_march_steps: u32,
    /// Fraction of the signed distance advanced per step, in (0, 1]
    pub march_step_fraction: f32,
    /// Signed distance (world units) at or below which a ray counts as blocked
    pub surface_epsilon: f32,
    /// Storage strategy for lights and occluders
    pub binding: BindingMode,
    /// Base color sampling policy
    pub sampling: SamplingMode,
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            max_march_steps: DEFAULT_MAX_MARCH_STEPS,
            march_step_fraction: 1.0,
            surface_epsilon: 1e-3,
            binding: BindingMode::Dynamic,
            sampling: SamplingMode::Linear,
        }
    }
}

impl LightingConfig {
    /// Check the numeric parameters are usable by the raymarcher
    pub fn validate(&self) -> LightingResult<()> {
        if self.max_march_steps == 0 {
            return Err(LightingError::InvalidConfig(
                "max_march_steps must be at least 1".into(),
            ));
        }
        if !(self.march_step_fraction > 0.0 && self.march_step_fraction <= 1.0) {
            return Err(LightingError::InvalidConfig(format!(
                "march_step_fraction must be in (0, 1], got {}",
                self.march_step_fraction
            )));
        }
        if !self.surface_epsilon.is_finite() || self.surface_epsilon < 0.0 {
            return Err(LightingError::InvalidConfig(format!(
                "surface_epsilon must be finite and non-negative, got {}",
                self.surface_epsilon
            )));
        }
        Ok(())
    }

    /// Raymarch parameters derived from this configuration
    pub fn march_settings(&self) -> MarchSettings {
        MarchSettings {
            max_steps: self.max_march_steps,
            step_fraction: self.march_step_fraction,
            surface_epsilon: self.surface_epsilon,
        }
    }
}
