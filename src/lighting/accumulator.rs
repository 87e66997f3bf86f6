//! Per-fragment light accumulation

use glam::{Vec2, Vec3, Vec4, Vec4Swizzles};

use super::attenuation::attenuation;
use super::coords::{scale_factor, world_to_screen};
use super::occlusion::{occlusion, MarchSettings};
use crate::scene::{
    ExtractedAmbientLight2d, ExtractedCircularOccluder2d, ExtractedPointLight2d, ViewUniform,
};

/// A single evaluated pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fragment {
    /// Screen-space position in pixels, origin top-left
    pub position: Vec2,
    /// Normalized coordinate for sampling the base color
    pub uv: Vec2,
}

impl Fragment {
    pub fn new(position: Vec2, uv: Vec2) -> Self {
        Self { position, uv }
    }

    /// Fragment at the center of pixel `(x, y)` of a `size` sized target
    pub fn from_pixel(x: u32, y: u32, size: Vec2) -> Self {
        let position = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
        Self {
            position,
            uv: position / size,
        }
    }
}

/// RGB multiplier for one fragment.
///
/// Lights add on top of a white baseline, then the ambient color multiplies the
/// whole: `ambient * (1 + Σ color * attenuation * (1 - occlusion))`. Ambient can
/// darken, point lights can only brighten.
pub fn evaluate(
    fragment: &Fragment,
    lights: &[ExtractedPointLight2d],
    occluders: &[ExtractedCircularOccluder2d],
    ambient: &ExtractedAmbientLight2d,
    view: &ViewUniform,
    screen_size: Vec2,
    settings: &MarchSettings,
) -> Vec3 {
    let scale = scale_factor(view);
    let mut lighting = Vec3::ONE;

    for light in lights {
        // Zeroed slots of fixed arrays land here
        if light.radius <= 0.0 {
            continue;
        }

        let light_screen = world_to_screen(light.center, screen_size, &view.view_projection);
        let distance = fragment.position.distance(light_screen) * scale;
        if !(distance < light.radius) {
            continue;
        }

        let occluded = occlusion(fragment.position, light_screen, occluders, view, settings);
        if occluded >= 1.0 {
            continue;
        }

        let contribution = light.color.xyz()
            * attenuation(distance, light.radius, light.intensity, light.falloff)
            * (1.0 - occluded);
        if contribution.is_finite() {
            lighting += contribution;
        }
    }

    ambient.color.xyz() * lighting
}

/// Apply the light multiplier to a sampled base color, passing alpha through
pub fn shade(base_color: Vec4, multiplier: Vec3) -> Vec4 {
    (base_color.xyz() * multiplier).extend(base_color.w)
}
