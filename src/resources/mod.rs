//! Resource management
//!
//! Storage for per-frame light/occluder records and the color buffers the
//! lighting pass reads and writes.

mod buffer;
mod texture;

pub use buffer::*;
pub use texture::*;
