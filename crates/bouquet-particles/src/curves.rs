//! Value-over-lifetime interpolation (start → end linear)

/// Linear interpolation between two floats
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Opacity for a particle `elapsed` seconds into a `lifetime`-second life.
///
/// Linear from 1 at spawn to 0 at `lifetime`; negative past it.
pub fn fade_opacity(elapsed: f32, lifetime: f32) -> f32 {
    if lifetime <= 0.0 {
        return 0.0;
    }
    lerp_f32(1.0, 0.0, elapsed / lifetime)
}
