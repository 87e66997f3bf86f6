//! Per-fragment lighting evaluator
//!
//! Everything here is a pure function of its arguments so it can be dispatched
//! by any parallel executor:
//! 1. [`coords`] - world to screen mapping and the world-units-per-pixel scale
//! 2. [`attenuation`] - smooth distance falloff with a hard radius cutoff
//! 3. [`occlusion`] - sphere tracing against the union of circular occluders
//! 4. [`accumulator`] - sums every light on top of a white baseline and applies ambient

pub mod accumulator;
pub mod attenuation;
pub mod coords;
pub mod occlusion;

pub use accumulator::{evaluate, shade, Fragment};
pub use attenuation::attenuation;
pub use coords::{
    ndc_to_screen, ndc_to_world, scale_factor, screen_to_ndc, screen_to_world, world_to_ndc,
    world_to_screen,
};
pub use occlusion::{occluder_blocks, occlusion, MarchSettings, DEFAULT_MAX_MARCH_STEPS};
