//! Time-remapping curves for the intro animation.

/// Quadratic ease-in-out: accelerates over the first half, decelerates over the second.
///
/// Input is expected in [0, 1]; values outside are clamped.
#[inline]
pub fn ease_in_out_quad(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

#[inline]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
