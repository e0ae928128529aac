use std::f32::consts::PI;

use glam::Vec3;
use rand::Rng;

use crate::config::CloudConfig;
use crate::types::PuffInstance;

/// Soft camera-facing puffs spread through a box around the cloud center.
///
/// Offsets and sizes are stored in world units (already multiplied by
/// `scale`). Rotation and breathing are animated in `cloud.wgsl` from the
/// scene time, the per-puff `spin`, `density` and `phase`.
#[derive(Debug, Clone)]
pub struct VolumetricCloud {
    center: Vec3,
    color: [f32; 3],
    opacity: f32,
    speed: f32,
    growth: f32,
    puffs: Vec<PuffInstance>,
}

impl VolumetricCloud {
    pub fn generate<R: Rng>(config: &CloudConfig, rng: &mut R) -> Self {
        let segments = if config.enabled { config.segments } else { 0 };
        let bounds = Vec3::from_array(config.bounds);

        let puffs = (0..segments)
            .map(|i| {
                let jitter = Vec3::new(
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                );
                PuffInstance {
                    offset: (bounds * jitter * config.scale).to_array(),
                    size: config.volume * config.scale,
                    rotation: i as f32 * (PI / segments as f32),
                    spin: if i % 2 == 0 { 1.0 } else { -1.0 },
                    density: rng.gen::<f32>().max(0.2),
                    phase: rng.gen_range(0.0..std::f32::consts::TAU),
                }
            })
            .collect::<Vec<_>>();

        log::info!("Generated cloud with {} puffs", puffs.len());

        Self {
            center: Vec3::from_array(config.position),
            color: config.color.linear(),
            opacity: config.opacity,
            speed: config.speed,
            growth: config.growth,
            puffs,
        }
    }

    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn growth(&self) -> f32 {
        self.growth
    }

    pub fn instances(&self) -> &[PuffInstance] {
        &self.puffs
    }

    pub fn is_empty(&self) -> bool {
        self.puffs.is_empty()
    }
}
