//! 2D camera

use bevy_ecs::prelude::*;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec2, Vec4, Vec4Swizzles};

use super::Transform;

/// Rectangle of the render target covered by a camera, in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Offset into the render target. Only carried into [`ViewUniform::viewport`]
    /// for renderers compositing into a larger target; the lighting pass always
    /// shades a `width` x `height` buffer starting at pixel (0, 0).
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
        }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Orthographic 2D camera component
/// Position and roll come from the Transform component on the same entity
#[derive(Component, Debug, Clone)]
pub struct Camera2d {
    /// World units per screen pixel, larger values zoom out
    pub scale: f32,
    pub near: f32,
    pub far: f32,
    pub viewport: Viewport,
}

impl Default for Camera2d {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

impl Camera2d {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            scale: 1.0,
            near: -1000.0,
            far: 1000.0,
            viewport: Viewport::new(width, height),
        }
    }

    #[must_use]
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Get the projection matrix, centered on the camera
    pub fn projection_matrix(&self) -> Mat4 {
        let half_w = self.viewport.width * 0.5 * self.scale;
        let half_h = self.viewport.height * 0.5 * self.scale;
        Mat4::orthographic_rh(-half_w, half_w, -half_h, half_h, self.near, self.far)
    }

    /// Get the view matrix (inverse of the camera transform)
    pub fn view_matrix(&self, transform: &Transform) -> Mat4 {
        transform.matrix().inverse()
    }

    /// Build view uniform data for the lighting evaluator
    pub fn view_uniform(&self, transform: &Transform) -> ViewUniform {
        let proj = self.projection_matrix();
        ViewUniform {
            view_projection: proj * self.view_matrix(transform),
            inverse_projection: proj.inverse(),
            viewport: Vec4::new(
                self.viewport.x,
                self.viewport.y,
                self.viewport.width,
                self.viewport.height,
            ),
        }
    }
}

/// View state read by the evaluator
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ViewUniform {
    pub view_projection: Mat4,
    pub inverse_projection: Mat4,
    /// xy = offset, zw = size (pixels)
    pub viewport: Vec4,
}

impl ViewUniform {
    /// Screen size in pixels
    pub fn screen_size(&self) -> Vec2 {
        self.viewport.zw()
    }
}
