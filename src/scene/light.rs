//! Light and occluder types for the scene

use bevy_ecs::prelude::*;
use bytemuck::{Pod, Zeroable};
use glam::{Vec2, Vec4};

/// Point light component
/// Position comes from the Transform component on the same entity
#[derive(Component, Debug, Clone)]
pub struct PointLight2d {
    /// Linear RGBA color, channels may exceed 1.0 for HDR
    pub color: Vec4,
    pub intensity: f32,
    /// Distance in world units past which the light contributes nothing
    pub radius: f32,
    /// Softens brightness near the center, 0.0 gives a pure (1 - s²)² curve
    pub falloff: f32,
}

impl Default for PointLight2d {
    fn default() -> Self {
        Self {
            color: Vec4::ONE,
            intensity: 1.0,
            radius: 0.5,
            falloff: 0.0,
        }
    }
}

impl PointLight2d {
    pub fn new(color: Vec4, intensity: f32, radius: f32, falloff: f32) -> Self {
        Self {
            color,
            intensity,
            radius,
            falloff,
        }
    }

    /// Convert to evaluation data at a world center
    pub fn extract(&self, center: Vec2) -> ExtractedPointLight2d {
        ExtractedPointLight2d::new(center, self.radius, self.color, self.intensity, self.falloff)
    }
}

/// Ambient light component, placed on the camera entity
#[derive(Component, Debug, Clone)]
pub struct AmbientLight2d {
    pub color: Vec4,
}

impl Default for AmbientLight2d {
    fn default() -> Self {
        Self { color: Vec4::ONE }
    }
}

impl AmbientLight2d {
    pub fn new(color: Vec4) -> Self {
        Self { color }
    }

    pub fn extract(&self) -> ExtractedAmbientLight2d {
        ExtractedAmbientLight2d::new(self.color)
    }
}

/// Circular occluder component
/// Position comes from the Transform component on the same entity
#[derive(Component, Debug, Clone, Default)]
pub struct CircularOccluder2d {
    /// World units. A zero radius casts no shadow.
    pub radius: f32,
}

impl CircularOccluder2d {
    pub fn new(radius: f32) -> Self {
        Self { radius }
    }

    pub fn extract(&self, center: Vec2) -> ExtractedCircularOccluder2d {
        ExtractedCircularOccluder2d::new(center, self.radius)
    }
}

/// Point light data as read by the evaluator.
/// All-zero is an inert light.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ExtractedPointLight2d {
    pub color: Vec4,
    /// World-space center
    pub center: Vec2,
    pub radius: f32,
    pub intensity: f32,
    pub falloff: f32,
    pub _padding: [f32; 3],
}

impl ExtractedPointLight2d {
    pub fn new(center: Vec2, radius: f32, color: Vec4, intensity: f32, falloff: f32) -> Self {
        Self {
            color,
            center,
            radius,
            intensity,
            falloff,
            _padding: [0.0; 3],
        }
    }
}

/// Circular occluder data as read by the evaluator.
/// All-zero is an inert occluder.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct ExtractedCircularOccluder2d {
    /// World-space center
    pub center: Vec2,
    pub radius: f32,
    pub _padding: f32,
}

impl ExtractedCircularOccluder2d {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self {
            center,
            radius,
            _padding: 0.0,
        }
    }
}

/// Ambient light data as read by the evaluator
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ExtractedAmbientLight2d {
    pub color: Vec4,
}

impl ExtractedAmbientLight2d {
    pub fn new(color: Vec4) -> Self {
        Self { color }
    }
}

impl Default for ExtractedAmbientLight2d {
    fn default() -> Self {
        Self { color: Vec4::ONE }
    }
}
