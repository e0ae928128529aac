use std::f32::consts::FRAC_PI_2;

use glam::Vec3;

use super::CameraController;
use crate::camera::Camera;
use crate::core::{Button, Controller};

const DRAG_SPEED: f32 = 0.01;
const WHEEL_SPEED: f32 = 0.001;
const MIN_ZOOM: f32 = 0.5;
const MAX_ZOOM: f32 = 2.0;

/// Keeps the camera on an ellipsoid around the origin, steered by drag angles
#[derive(Debug, Clone)]
pub struct EllipseControls {
    radius_x: f32,
    radius_y: f32,
    theta: f32,
    phi: f32,
    zoom: f32,
}

impl EllipseControls {
    pub fn new(radius_x: f32, radius_y: f32) -> Self {
        Self {
            radius_x,
            radius_y,
            theta: 0.0,
            phi: 0.0,
            zoom: 1.0,
        }
    }

    pub fn angles(&self) -> (f32, f32) {
        (self.theta, self.phi)
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn position(&self) -> Vec3 {
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        Vec3::new(
            self.radius_x * cos_theta * cos_phi * self.zoom,
            self.radius_y * sin_phi * self.zoom,
            self.radius_y * sin_theta * cos_phi * self.zoom,
        )
    }
}

impl CameraController for EllipseControls {
    fn update(&mut self, camera: &mut Camera, input: &dyn Controller) {
        if input.is_down(Button::MouseLeft) {
            let (dx, dy) = input.pointer_delta();
            self.theta += dx * DRAG_SPEED;
            self.phi = (self.phi - dy * DRAG_SPEED).clamp(-FRAC_PI_2, FRAC_PI_2);
        }

        let scroll = input.scroll_delta();
        if scroll != 0.0 {
            self.zoom = (self.zoom - scroll * WHEEL_SPEED).clamp(MIN_ZOOM, MAX_ZOOM);
        }

        camera.position = self.position();
        camera.target = Vec3::ZERO;
        camera.up = Vec3::Y;
    }

    fn name(&self) -> &'static str {
        "ellipse"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockInput {
        dragging: bool,
        delta: (f32, f32),
        scroll: f32,
    }

    impl Controller for MockInput {
        fn is_down(&self, button: Button) -> bool {
            self.dragging && button == Button::MouseLeft
        }

        fn get_down_keys(&self) -> &[Button] {
            &[]
        }

        fn pointer_position(&self) -> Option<(f32, f32)> {
            None
        }

        fn pointer_delta(&self) -> (f32, f32) {
            self.delta
        }

        fn scroll_delta(&self) -> f32 {
            self.scroll
        }
    }

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 10.0, 45.0), 90.0, 0.1, 1000.0)
    }

    #[test]
    fn test_rest_position_on_x_axis() {
        let mut controls = EllipseControls::new(40.0, 20.0);
        let mut camera = camera();
        let input = MockInput {
            dragging: false,
            delta: (0.0, 0.0),
            scroll: 0.0,
        };
        controls.update(&mut camera, &input);
        assert_eq!(camera.position, Vec3::new(40.0, 0.0, 0.0));
        assert_eq!(camera.target, Vec3::ZERO);
    }

    #[test]
    fn test_pointer_moves_ignored_without_drag() {
        let mut controls = EllipseControls::new(40.0, 20.0);
        let input = MockInput {
            dragging: false,
            delta: (100.0, 100.0),
            scroll: 0.0,
        };
        controls.update(&mut camera(), &input);
        assert_eq!(controls.angles(), (0.0, 0.0));
    }

    #[test]
    fn test_drag_changes_angles_and_clamps_phi() {
        let mut controls = EllipseControls::new(40.0, 20.0);
        let input = MockInput {
            dragging: true,
            delta: (10.0, -1000.0),
            scroll: 0.0,
        };
        controls.update(&mut camera(), &input);
        let (theta, phi) = controls.angles();
        assert!((theta - 0.1).abs() < 1e-6);
        assert_eq!(phi, FRAC_PI_2);
    }

    #[test]
    fn test_wheel_zoom_clamped() {
        let mut controls = EllipseControls::new(40.0, 20.0);
        let mut camera = camera();

        let zoom_in = MockInput {
            dragging: false,
            delta: (0.0, 0.0),
            scroll: -300.0,
        };
        controls.update(&mut camera, &zoom_in);
        assert!((controls.zoom() - 1.3).abs() < 1e-5);

        let far = MockInput {
            scroll: 10_000.0,
            ..zoom_in
        };
        controls.update(&mut camera, &far);
        assert_eq!(controls.zoom(), MIN_ZOOM);
        assert_eq!(camera.position, Vec3::new(20.0, 0.0, 0.0));
    }

    #[test]
    fn test_position_on_ellipsoid() {
        let mut controls = EllipseControls::new(40.0, 20.0);
        let input = MockInput {
            dragging: true,
            delta: (37.0, 12.0),
            scroll: 0.0,
        };
        controls.update(&mut camera(), &input);
        let p = controls.position();
        let (theta, phi) = controls.angles();
        let expected_y = 20.0 * phi.sin();
        assert!((p.y - expected_y).abs() < 1e-5);
        assert!((p.x - 40.0 * theta.cos() * phi.cos()).abs() < 1e-4);
    }
}
