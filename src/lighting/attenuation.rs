//! Point light distance falloff

/// Intensity multiplier at `distance` from a light center, in `[0, intensity]`.
///
/// With `s = distance / radius` this is `intensity * (1 - s²)² / (1 + falloff * s²)`,
/// cut to zero past the radius. The curve already reaches zero with zero slope at
/// `s = 1`, so the cutoff leaves no visible edge. Larger `falloff` compresses the
/// brightness near the center.
pub fn attenuation(distance: f32, radius: f32, intensity: f32, falloff: f32) -> f32 {
    debug_assert!(radius > 0.0, "point light radius must be positive");
    if radius <= 0.0 {
        return 0.0;
    }

    let s = distance / radius;
    if s > 1.0 || !s.is_finite() {
        return 0.0;
    }

    let s2 = s * s;
    let near = 1.0 - s2;
    intensity * near * near / (1.0 + falloff * s2)
}
