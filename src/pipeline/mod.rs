//! Lighting pipeline
//!
//! A single fullscreen pass: every pixel of the base color buffer is sampled and
//! multiplied by the light mask of the current [`LightingFrame`](crate::LightingFrame).

pub mod lighting_pass;

pub use lighting_pass::LightingPass;
