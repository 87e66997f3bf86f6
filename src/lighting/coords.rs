//! World, NDC and screen coordinate conversions
//!
//! The 2D camera is orthographic: world points live on the z = 0 plane and the
//! perspective divide is never applied. Screen space has its origin at the top-left
//! corner with Y pointing down, NDC has Y pointing up.

use glam::{Mat2, Mat4, Vec2, Vec4, Vec4Swizzles};

use crate::scene::ViewUniform;

/// Project a world point to normalized device coordinates
pub fn world_to_ndc(world_point: Vec2, view_projection: &Mat4) -> Vec2 {
    let clip = *view_projection * Vec4::new(world_point.x, world_point.y, 0.0, 1.0);
    clip.xy()
}

/// Map NDC to screen pixels, flipping Y
pub fn ndc_to_screen(ndc: Vec2, screen_size: Vec2) -> Vec2 {
    let screen = (ndc + Vec2::ONE) * 0.5 * screen_size;
    Vec2::new(screen.x, screen_size.y - screen.y)
}

/// Map screen pixels back to NDC
pub fn screen_to_ndc(screen_point: Vec2, screen_size: Vec2) -> Vec2 {
    let flipped = Vec2::new(screen_point.x, screen_size.y - screen_point.y);
    flipped / screen_size * 2.0 - Vec2::ONE
}

/// Unproject NDC onto the z = 0 world plane.
///
/// Only the xy block and translation column of `view_projection` take part, which is
/// exact for 2D cameras. Returns `None` when that block is singular.
pub fn ndc_to_world(ndc: Vec2, view_projection: &Mat4) -> Option<Vec2> {
    let linear = Mat2::from_cols(view_projection.x_axis.xy(), view_projection.y_axis.xy());
    let det = linear.determinant();
    if det == 0.0 || !det.is_finite() {
        return None;
    }
    Some(linear.inverse() * (ndc - view_projection.w_axis.xy()))
}

/// Convert a world-space point into screen pixel coordinates
pub fn world_to_screen(world_point: Vec2, screen_size: Vec2, view_projection: &Mat4) -> Vec2 {
    ndc_to_screen(world_to_ndc(world_point, view_projection), screen_size)
}

/// Convert a screen pixel position back to the world plane
pub fn screen_to_world(screen_point: Vec2, screen_size: Vec2, view_projection: &Mat4) -> Option<Vec2> {
    ndc_to_world(screen_to_ndc(screen_point, screen_size), view_projection)
}

/// World units per screen pixel.
///
/// Recovered from the inverse projection diagonal and the viewport height. Screen
/// distances must be multiplied by this before comparing with world-space radii.
pub fn scale_factor(view: &ViewUniform) -> f32 {
    debug_assert!(view.viewport.w != 0.0, "viewport height must be non-zero");
    2.0 * view.inverse_projection.y_axis.y / view.viewport.w
}
