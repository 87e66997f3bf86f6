//! Scene management

mod camera;
mod extract;
mod light;
mod transform;

pub use camera::*;
pub use extract::*;
pub use light::*;
pub use transform::*;

use glam::{Vec2, Vec4};

use crate::resources::GpuArray;
use crate::BindingMode;

/// Immutable per-frame snapshot the lighting pass evaluates
#[derive(Debug, Clone)]
pub struct LightingFrame {
    pub view: ViewUniform,
    pub ambient: ExtractedAmbientLight2d,
    pub point_lights: GpuArray<ExtractedPointLight2d>,
    pub occluders: GpuArray<ExtractedCircularOccluder2d>,
}

impl LightingFrame {
    pub fn new(view: ViewUniform, binding: BindingMode) -> Self {
        Self {
            view,
            ambient: ExtractedAmbientLight2d::default(),
            point_lights: GpuArray::new(binding),
            occluders: GpuArray::new(binding),
        }
    }

    /// Build a frame from a camera and its transform
    pub fn from_camera(camera: &Camera2d, transform: &Transform, binding: BindingMode) -> Self {
        Self::new(camera.view_uniform(transform), binding)
    }

    /// Set the ambient color
    pub fn set_ambient(&mut self, color: Vec4) {
        self.ambient = ExtractedAmbientLight2d::new(color);
    }

    /// Add a point light to the frame.
    /// Returns `None` when a fixed-capacity frame is full.
    pub fn add_point_light(
        &mut self,
        center: Vec2,
        radius: f32,
        color: Vec4,
        intensity: f32,
        falloff: f32,
    ) -> Option<usize> {
        self.point_lights.push(ExtractedPointLight2d::new(
            center, radius, color, intensity, falloff,
        ))
    }

    /// Add a circular occluder to the frame.
    /// Returns `None` when a fixed-capacity frame is full.
    pub fn add_occluder(&mut self, center: Vec2, radius: f32) -> Option<usize> {
        self.occluders
            .push(ExtractedCircularOccluder2d::new(center, radius))
    }

    pub fn screen_size(&self) -> Vec2 {
        self.view.screen_size()
    }
}
