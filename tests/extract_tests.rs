use glam::{Vec2, Vec4};
use light2d::{
    extract_frame, AmbientLight2d, BindingMode, Camera2d, CircularOccluder2d, ColorBuffer,
    LightingPass, PointLight2d, Transform, World, MAX_FIXED_BINDINGS,
};

/// Camera at the origin, one light, one occluder to the right of the light
fn occluder_scene() -> World {
    let mut world = World::new();
    world.spawn((
        Camera2d::new(200.0, 100.0),
        Transform::default(),
        AmbientLight2d::new(Vec4::new(0.5, 0.5, 0.5, 1.0)),
    ));
    world.spawn((
        PointLight2d {
            intensity: 3.0,
            radius: 400.0,
            ..Default::default()
        },
        Transform::from_xy(-50.0, 0.0),
    ));
    world.spawn((CircularOccluder2d::new(10.0), Transform::from_xy(0.0, 0.0)));
    world
}

// ---------------------------------------------------------------------------
// World -> frame -> pass
// ---------------------------------------------------------------------------

#[test]
fn shadow_behind_occluder() {
    let mut world = occluder_scene();
    let frame = extract_frame(&mut world, BindingMode::Dynamic).unwrap();
    let base = ColorBuffer::new(200, 100, Vec4::ONE);
    let pass = LightingPass::default();

    // World (50, 0) is behind the occluder as seen from the light: ambient only
    let shadowed = pass.shade_pixel(&frame, &base, 150, 50);
    assert!((shadowed - Vec4::new(0.5, 0.5, 0.5, 1.0)).abs().max_element() < 1e-5);

    // World (50, 40) has a clear line to the light
    let lit = pass.shade_pixel(&frame, &base, 150, 10);
    assert!(lit.x > 0.5 && lit.y > 0.5 && lit.z > 0.5);
    assert_eq!(lit.w, 1.0);
}

#[test]
fn moving_the_occluder_moves_the_shadow() {
    let mut world = occluder_scene();
    let base = ColorBuffer::new(200, 100, Vec4::ONE);
    let pass = LightingPass::default();

    let mut occluders = world.query::<(&CircularOccluder2d, &mut Transform)>();
    for (_, mut transform) in occluders.iter_mut(&mut world) {
        transform.translation = Vec2::new(0.0, 40.0);
    }

    let frame = extract_frame(&mut world, BindingMode::Dynamic).unwrap();
    let now_lit = pass.shade_pixel(&frame, &base, 150, 50);
    assert!(now_lit.x > 0.5);
}

#[test]
fn fixed_binding_drops_excess_lights() {
    let mut world = occluder_scene();
    for i in 0..(MAX_FIXED_BINDINGS + 10) {
        world.spawn((
            PointLight2d::default(),
            Transform::from_xy(i as f32, 0.0),
        ));
    }

    let fixed = extract_frame(&mut world, BindingMode::Fixed).unwrap();
    assert_eq!(fixed.point_lights.len(), MAX_FIXED_BINDINGS);
    assert_eq!(fixed.point_lights.as_slice().len(), MAX_FIXED_BINDINGS);

    let dynamic = extract_frame(&mut world, BindingMode::Dynamic).unwrap();
    assert_eq!(dynamic.point_lights.len(), MAX_FIXED_BINDINGS + 11);
}
