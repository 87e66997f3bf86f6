//! Shadow rays against circular occluders
//!
//! For every fragment/light pair a ray is sphere traced from the fragment towards the
//! light through the signed distance field of each occluder. Distances are measured in
//! screen pixels and converted to world units with [`scale_factor`], so occluder
//! radii keep their world size under camera zoom.
//!
//! Occlusion is binary per occluder and the occluders combine with a logical OR:
//! a second occluder on the same ray cannot darken further. Shadows are hard-edged.

use glam::Vec2;

use super::coords::{scale_factor, world_to_screen};
use crate::scene::{ExtractedCircularOccluder2d, ViewUniform};

/// Step budget per light/occluder pair
pub const DEFAULT_MAX_MARCH_STEPS: u32 = 64;

/// Sphere tracing parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarchSettings {
    /// Steps before the march gives up and reports the light as visible
    pub max_steps: u32,
    /// Fraction of the signed distance advanced per step, in (0, 1]
    pub step_fraction: f32,
    /// Signed distance (world units) at or below which the ray is blocked
    pub surface_epsilon: f32,
}

impl Default for MarchSettings {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_MARCH_STEPS,
            step_fraction: 1.0,
            surface_epsilon: 1e-3,
        }
    }
}

/// Occlusion of the light at `light_screen_pos` as seen from `fragment_pos`.
///
/// Returns 1.0 as soon as one occluder blocks the ray, 0.0 otherwise.
pub fn occlusion(
    fragment_pos: Vec2,
    light_screen_pos: Vec2,
    occluders: &[ExtractedCircularOccluder2d],
    view: &ViewUniform,
    settings: &MarchSettings,
) -> f32 {
    let scale = scale_factor(view);
    if !(scale > 0.0 && scale.is_finite()) {
        return 0.0;
    }

    let screen_size = view.screen_size();
    let blocked = occluders.iter().filter(|o| o.radius > 0.0).any(|occluder| {
        let center = world_to_screen(occluder.center, screen_size, &view.view_projection);
        occluder_blocks(
            fragment_pos,
            light_screen_pos,
            center,
            occluder.radius,
            scale,
            settings,
        )
    });

    if blocked {
        1.0
    } else {
        0.0
    }
}

/// Whether a single occluder blocks the segment from the fragment to the light.
///
/// `occluder_screen_center` is in screen pixels, `occluder_radius` in world units and
/// `scale` converts pixels to world units.
pub fn occluder_blocks(
    fragment_pos: Vec2,
    light_screen_pos: Vec2,
    occluder_screen_center: Vec2,
    occluder_radius: f32,
    scale: f32,
    settings: &MarchSettings,
) -> bool {
    if occluder_radius <= 0.0 {
        return false;
    }

    let direction = (light_screen_pos - fragment_pos).normalize_or_zero();
    let target = fragment_pos.distance(light_screen_pos) * scale;

    // Progress is kept in world units, the march point in screen pixels
    let mut progress = 0.0;
    for _ in 0..settings.max_steps {
        if progress >= target {
            return false;
        }

        let point = fragment_pos + direction * (progress / scale);
        let signed_distance = point.distance(occluder_screen_center) * scale - occluder_radius;
        if signed_distance <= settings.surface_epsilon {
            return true;
        }

        progress += signed_distance * settings.step_fraction;
    }

    // Unresolved marches count as lit
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Camera2d, Transform};
    use glam::Mat4;

    fn unit_view() -> ViewUniform {
        // 1 world unit per pixel, world origin at screen (400, 300)
        Camera2d::new(800.0, 600.0).view_uniform(&Transform::default())
    }

    fn occluder(x: f32, y: f32, radius: f32) -> ExtractedCircularOccluder2d {
        ExtractedCircularOccluder2d::new(Vec2::new(x, y), radius)
    }

    #[test]
    fn test_no_occluders_is_lit() {
        let view = unit_view();
        let o = occlusion(
            Vec2::new(10.0, 10.0),
            Vec2::new(500.0, 300.0),
            &[],
            &view,
            &MarchSettings::default(),
        );
        assert_eq!(o, 0.0);
    }

    #[test]
    fn test_occluder_on_segment_blocks() {
        let view = unit_view();
        // Fragment and light on the screen row y = 300 (world y = 0)
        let fragment = Vec2::new(300.0, 300.0);
        let light = Vec2::new(500.0, 300.0);
        let o = occlusion(
            fragment,
            light,
            &[occluder(0.0, 0.0, 10.0)],
            &view,
            &MarchSettings::default(),
        );
        assert_eq!(o, 1.0);
    }

    #[test]
    fn test_off_center_occluder_blocks() {
        let settings = MarchSettings::default();
        // Ray grazes the occluder at an angle, sphere tracing converges on the surface
        assert!(occluder_blocks(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 5.0),
            10.0,
            1.0,
            &settings,
        ));
    }

    #[test]
    fn test_occluder_beside_segment_does_not_block() {
        let settings = MarchSettings::default();
        assert!(!occluder_blocks(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 30.0),
            10.0,
            1.0,
            &settings,
        ));
    }

    #[test]
    fn test_occluder_behind_light_does_not_block() {
        let settings = MarchSettings::default();
        assert!(!occluder_blocks(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            Vec2::new(150.0, 0.0),
            10.0,
            1.0,
            &settings,
        ));
    }

    #[test]
    fn test_fragment_at_light_is_lit() {
        let settings = MarchSettings::default();
        let p = Vec2::new(42.0, 42.0);
        assert!(!occluder_blocks(p, p, p, 10.0, 1.0, &settings));
    }

    #[test]
    fn test_fragment_inside_occluder_is_blocked() {
        let settings = MarchSettings::default();
        assert!(occluder_blocks(
            Vec2::new(2.0, 0.0),
            Vec2::new(100.0, 0.0),
            Vec2::ZERO,
            10.0,
            1.0,
            &settings,
        ));
    }

    #[test]
    fn test_zero_radius_has_no_effect() {
        let view = unit_view();
        let o = occlusion(
            Vec2::new(300.0, 300.0),
            Vec2::new(500.0, 300.0),
            &[occluder(0.0, 0.0, 0.0), ExtractedCircularOccluder2d::default()],
            &view,
            &MarchSettings::default(),
        );
        assert_eq!(o, 0.0);
    }

    #[test]
    fn test_radius_is_in_world_units() {
        // Zoomed out 4x: 4 world units per pixel. A 20 unit occluder is 5 px on screen.
        let view = Camera2d::new(800.0, 600.0)
            .with_scale(4.0)
            .view_uniform(&Transform::default());
        let settings = MarchSettings::default();

        // Passes 8 px (32 world units) from the occluder center
        let o = occlusion(
            Vec2::new(300.0, 308.0),
            Vec2::new(500.0, 308.0),
            &[occluder(0.0, 0.0, 20.0)],
            &view,
            &settings,
        );
        assert_eq!(o, 0.0);

        // Passes 4 px (16 world units) from the center
        let o = occlusion(
            Vec2::new(300.0, 304.0),
            Vec2::new(500.0, 304.0),
            &[occluder(0.0, 0.0, 20.0)],
            &view,
            &settings,
        );
        assert_eq!(o, 1.0);
    }

    #[test]
    fn test_occluders_do_not_double_darken() {
        let view = unit_view();
        let o = occlusion(
            Vec2::new(200.0, 300.0),
            Vec2::new(600.0, 300.0),
            &[occluder(-50.0, 0.0, 10.0), occluder(50.0, 0.0, 10.0)],
            &view,
            &MarchSettings::default(),
        );
        assert_eq!(o, 1.0);
    }

    #[test]
    fn test_damped_steps_still_hit() {
        let settings = MarchSettings {
            step_fraction: 0.5,
            ..Default::default()
        };
        assert!(occluder_blocks(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 0.0),
            10.0,
            1.0,
            &settings,
        ));
    }

    #[test]
    fn test_exhausted_budget_is_lit() {
        let settings = MarchSettings {
            max_steps: 1,
            ..Default::default()
        };
        // The only step ends on the surface, before the hit test can run
        assert!(!occluder_blocks(
            Vec2::ZERO,
            Vec2::new(100.0, 0.0),
            Vec2::new(50.0, 0.0),
            10.0,
            1.0,
            &settings,
        ));
    }

    #[test]
    fn test_grazing_ray() {
        let light = Vec2::new(100.0, 0.0);
        let center = Vec2::new(50.0, 9.9);
        assert!(occluder_blocks(
            Vec2::ZERO,
            light,
            center,
            10.0,
            1.0,
            &MarchSettings::default(),
        ));

        // Steps shrink near the tangent point, four are not enough to reach it
        let short = MarchSettings {
            max_steps: 4,
            ..Default::default()
        };
        assert!(!occluder_blocks(
            Vec2::ZERO,
            light,
            Vec2::new(50.0, 9.99),
            10.0,
            1.0,
            &short,
        ));
    }

    #[test]
    fn test_degenerate_scale_is_unoccluded() {
        let mut view = unit_view();
        view.inverse_projection = Mat4::ZERO;
        let o = occlusion(
            Vec2::new(300.0, 300.0),
            Vec2::new(500.0, 300.0),
            &[occluder(0.0, 0.0, 10.0)],
            &view,
            &MarchSettings::default(),
        );
        assert_eq!(o, 0.0);

        view.inverse_projection = Mat4::NAN;
        let o = occlusion(
            Vec2::new(300.0, 300.0),
            Vec2::new(500.0, 300.0),
            &[occluder(0.0, 0.0, 10.0)],
            &view,
            &MarchSettings::default(),
        );
        assert_eq!(o, 0.0);
    }
}
