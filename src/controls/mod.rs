mod ellipse;
mod trackball;

pub use ellipse::EllipseControls;
pub use trackball::TrackballControls;

use crate::camera::Camera;
use crate::config::{ControlsKind, SceneConfig};
use crate::core::Controller;

/// Camera movement driven by pointer input, run once per frame after the intro zoom
pub trait CameraController {
    /// Apply this frame's input to the camera
    fn update(&mut self, camera: &mut Camera, input: &dyn Controller);

    /// Short name for logs and the diagnostics overlay
    fn name(&self) -> &'static str;
}

/// Build the controller selected in the config
pub fn from_config(config: &SceneConfig) -> Box<dyn CameraController> {
    let controls = &config.controls;
    match controls.kind {
        ControlsKind::Trackball => Box::new(TrackballControls::new(
            controls.rotate_speed,
            controls.zoom_speed,
            controls.pan_speed,
            controls.min_distance,
            config.max_distance(),
        )),
        ControlsKind::Ellipse => Box::new(EllipseControls::new(
            controls.ellipse_radius_x,
            controls.ellipse_radius_y,
        )),
    }
}
