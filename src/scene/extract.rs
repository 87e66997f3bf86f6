//! Extraction of lighting data out of the ECS world

use bevy_ecs::prelude::*;

use super::{
    AmbientLight2d, Camera2d, CircularOccluder2d, ExtractedAmbientLight2d, LightingFrame,
    PointLight2d, Transform,
};
use crate::error::{LightingError, LightingResult};
use crate::BindingMode;

/// Snapshot the world's camera, lights and occluders into a [`LightingFrame`].
///
/// The first entity with both [`Camera2d`] and [`Transform`] provides the view.
/// Its optional [`AmbientLight2d`] provides the ambient color (white when absent).
/// Lights and occluders without a `Transform` are not part of the scene.
pub fn extract_frame(world: &mut World, binding: BindingMode) -> LightingResult<LightingFrame> {
    let mut cameras = world.query::<(&Camera2d, &Transform, Option<&AmbientLight2d>)>();
    let (view, ambient) = {
        let Some((camera, transform, ambient)) = cameras.iter(world).next() else {
            return Err(LightingError::NoCamera);
        };
        if camera.viewport.is_empty() {
            return Err(LightingError::InvalidViewport {
                width: camera.viewport.width,
                height: camera.viewport.height,
            });
        }
        (
            camera.view_uniform(transform),
            ambient
                .map(AmbientLight2d::extract)
                .unwrap_or_default(),
        )
    };

    let mut frame = LightingFrame::new(view, binding);
    frame.ambient = ambient;
    extract_point_lights(world, &mut frame);
    extract_circular_occluders(world, &mut frame);

    log::trace!(
        "Extracted {} point lights, {} occluders",
        frame.point_lights.len(),
        frame.occluders.len()
    );

    Ok(frame)
}

/// Append every point light in the world to the frame
pub fn extract_point_lights(world: &mut World, frame: &mut LightingFrame) {
    let mut lights = world.query::<(&PointLight2d, &Transform)>();
    for (light, transform) in lights.iter(world) {
        frame.point_lights.push(light.extract(transform.translation));
    }
}

/// Append every circular occluder in the world to the frame
pub fn extract_circular_occluders(world: &mut World, frame: &mut LightingFrame) {
    let mut occluders = world.query::<(&CircularOccluder2d, &Transform)>();
    for (occluder, transform) in occluders.iter(world) {
        frame.occluders.push(occluder.extract(transform.translation));
    }
}

/// Ambient color of the first camera, white when the camera has none
pub fn extract_ambient_light(world: &mut World) -> ExtractedAmbientLight2d {
    let mut cameras = world.query_filtered::<Option<&AmbientLight2d>, With<Camera2d>>();
    cameras
        .iter(world)
        .next()
        .flatten()
        .map(AmbientLight2d::extract)
        .unwrap_or_default()
}
