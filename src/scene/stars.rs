use std::f32::consts::TAU;

use glam::Vec3;
use rand::Rng;

use crate::config::StarsConfig;
use crate::math::{hsl_to_rgb, srgb_to_linear};
use crate::types::StarInstance;

/// Shell of stars around the scene
///
/// Stars are scattered in a shell starting at `radius + depth` and shrinking
/// inward a random fraction of `depth / count` per star, so later stars sit
/// slightly closer. Hue walks once around the wheel across the whole set.
#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<StarInstance>,
    fade: bool,
    speed: f32,
}

impl Starfield {
    pub fn generate<R: Rng>(config: &StarsConfig, rng: &mut R) -> Self {
        let count = config.count;
        let increment = if count > 0 {
            config.depth / count as f32
        } else {
            0.0
        };

        let mut radius = config.radius + config.depth;
        let mut stars = Vec::with_capacity(count);

        for i in 0..count {
            radius -= increment * rng.gen::<f32>();
            let position = spherical(radius, rng.gen(), rng.gen());

            let hue = i as f32 / count as f32;
            let color = hsl_to_rgb(hue, config.saturation, 0.9).map(srgb_to_linear);
            let size = (0.5 + 0.5 * rng.gen::<f32>()) * config.factor;

            stars.push(StarInstance {
                position: position.to_array(),
                size,
                color,
                _pad: 0.0,
            });
        }

        log::info!("Generated {} stars", stars.len());

        Self {
            stars,
            fade: config.fade,
            speed: config.speed,
        }
    }

    pub fn instances(&self) -> &[StarInstance] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    pub fn fade(&self) -> bool {
        self.fade
    }

    /// Twinkle clock fed to the star shader
    pub fn time(&self, elapsed: f32) -> f32 {
        elapsed * self.speed
    }
}

/// Point at distance `radius` in the direction picked by two uniform samples.
/// The polar angle comes from `acos(1 - 2u)` so directions cover the sphere evenly.
fn spherical(radius: f32, u: f32, v: f32) -> Vec3 {
    let phi = (1.0 - 2.0 * u).clamp(-1.0, 1.0).acos();
    let theta = v * TAU;
    let (sin_phi, cos_phi) = phi.sin_cos();
    let (sin_theta, cos_theta) = theta.sin_cos();
    Vec3::new(
        radius * sin_phi * sin_theta,
        radius * cos_phi,
        radius * sin_phi * cos_theta,
    )
}
