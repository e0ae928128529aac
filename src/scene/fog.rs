use crate::config::FogConfig;
use crate::math::lerp_rgb;

/// Depth fog blending toward a flat color between `near` and `far`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFog {
    /// Linear-light fog color
    pub color: [f32; 3],
    pub near: f32,
    pub far: f32,
}

impl LinearFog {
    pub fn from_config(config: &FogConfig) -> Self {
        Self {
            color: config.color.linear(),
            near: config.near,
            far: config.far,
        }
    }

    /// Fog amount in [0, 1] at a view depth, smoothstepped like the shaders
    pub fn factor(&self, depth: f32) -> f32 {
        let t = ((depth - self.near) / (self.far - self.near)).clamp(0.0, 1.0);
        t * t * (3.0 - 2.0 * t)
    }

    pub fn apply(&self, color: [f32; 3], depth: f32) -> [f32; 3] {
        lerp_rgb(color, self.color, self.factor(depth))
    }
}
