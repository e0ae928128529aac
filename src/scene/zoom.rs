use glam::Vec3;

use crate::camera::Camera;
use crate::config::ZoomConfig;
use crate::core::Countdown;
use crate::math::{ease_in_out_quad, lerp, AABB};

/// One-shot intro move of the camera toward the front of the word cloud
///
/// Runs from the moment it is built, eases the camera depth from its start
/// value to the target over the configured duration, then stays finished.
#[derive(Debug, Clone, Copy)]
pub struct CameraZoom {
    start: Vec3,
    target_z: f32,
    trailing_offset: f32,
    countdown: Countdown,
}

impl CameraZoom {
    pub fn new(start: Vec3, target_z: f32, duration: f32, trailing_offset: f32) -> Self {
        let mut countdown = Countdown::new(duration);
        countdown.start();
        Self {
            start,
            target_z,
            trailing_offset,
            countdown,
        }
    }

    /// Depth just in front of `bounds`: center z plus half the depth plus `buffer`
    pub fn target_for(bounds: &AABB, buffer: f32) -> f32 {
        bounds.center().z + bounds.half_extents().z + buffer
    }

    /// Zoom toward the front of `bounds`; nothing to frame means no zoom
    pub fn framing(start: Vec3, bounds: Option<AABB>, config: &ZoomConfig) -> Option<Self> {
        let bounds = bounds?;
        let target_z = Self::target_for(&bounds, config.buffer);
        log::info!(
            "Camera zoom: z {:.2} -> {:.2} over {:.2}s",
            start.z,
            target_z,
            config.duration
        );
        Some(Self::new(
            start,
            target_z,
            config.duration,
            config.trailing_offset,
        ))
    }

    pub fn target_z(&self) -> f32 {
        self.target_z
    }

    /// Eased depth at normalized time `t`
    pub fn z_at(&self, t: f32) -> f32 {
        lerp(self.start.z, self.target_z, ease_in_out_quad(t))
    }

    pub fn progress(&self) -> f32 {
        self.countdown.progress()
    }

    pub fn is_active(&self) -> bool {
        self.countdown.is_active()
    }

    /// Current eased depth
    pub fn z(&self) -> f32 {
        self.z_at(self.progress())
    }

    /// Advance by `delta` seconds and place the camera; returns false once finished.
    /// A finished zoom leaves the camera alone.
    pub fn update(&mut self, delta: f32, camera: &mut Camera) -> bool {
        if !self.is_active() {
            return false;
        }

        let finished = self.countdown.tick(delta);
        camera.position = Vec3::new(self.start.x, self.start.y, self.z() + self.trailing_offset);
        log::trace!("Camera zoom z: {:.3}", self.z());

        !finished
    }
}
