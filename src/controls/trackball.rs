use glam::{Quat, Vec3};

use super::CameraController;
use crate::camera::Camera;
use crate::core::{Button, Controller};

/// Fraction of the rotation speed lost each frame after the drag ends
const DYNAMIC_DAMPING: f32 = 0.2;
/// Below this the leftover spin stops
const MIN_ANGLE: f32 = 1e-5;

/// Free trackball around the camera target
///
/// Left drag rotates the eye and the up vector together, so there is no fixed
/// horizon. Right drag pans camera and target. The wheel scales the distance
/// to the target, which is kept within `[min_distance, max_distance]`.
#[derive(Debug, Clone)]
pub struct TrackballControls {
    rotate_speed: f32,
    zoom_speed: f32,
    pan_speed: f32,
    min_distance: f32,
    max_distance: f32,
    last_axis: Vec3,
    last_angle: f32,
}

impl TrackballControls {
    pub fn new(
        rotate_speed: f32,
        zoom_speed: f32,
        pan_speed: f32,
        min_distance: f32,
        max_distance: f32,
    ) -> Self {
        Self {
            rotate_speed,
            zoom_speed,
            pan_speed,
            min_distance,
            max_distance,
            last_axis: Vec3::Y,
            last_angle: 0.0,
        }
    }

    /// Rotate around the target for a drag of `(dx, dy)` pixels, y down
    fn rotate(&mut self, camera: &mut Camera, dx: f32, dy: f32) {
        let eye = camera.position - camera.target;
        let length = (dx * dx + dy * dy).sqrt();

        let rotation = if length > 0.0 {
            let eye_direction = eye.normalize_or_zero();
            let up = camera.up.normalize_or(Vec3::Y);
            let sideways = up.cross(eye_direction).normalize_or_zero();
            let move_direction = up * -dy + sideways * dx;

            let axis = move_direction.cross(eye).normalize_or_zero();
            if axis == Vec3::ZERO {
                return;
            }
            let angle = length * self.rotate_speed;
            self.last_axis = axis;
            self.last_angle = angle;
            Quat::from_axis_angle(axis, angle)
        } else if self.last_angle > MIN_ANGLE {
            self.last_angle *= (1.0 - DYNAMIC_DAMPING).sqrt();
            Quat::from_axis_angle(self.last_axis, self.last_angle)
        } else {
            self.last_angle = 0.0;
            return;
        };

        camera.position = camera.target + rotation * eye;
        camera.up = (rotation * camera.up).normalize_or(Vec3::Y);
    }

    /// Scale the eye distance; positive scroll moves away
    fn zoom(&self, camera: &mut Camera, scroll: f32) {
        if scroll == 0.0 {
            return;
        }
        let factor = (1.0 + scroll * self.zoom_speed).max(0.05);
        let eye = camera.position - camera.target;
        camera.position = camera.target + eye * factor;
    }

    /// Slide camera and target together in the view plane
    fn pan(&self, camera: &mut Camera, dx: f32, dy: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        let eye = camera.position - camera.target;
        let scale = eye.length() * self.pan_speed;
        let side = eye.cross(camera.up).normalize_or_zero();
        let up = camera.up.normalize_or(Vec3::Y);

        let offset = (side * dx + up * dy) * scale;
        camera.position += offset;
        camera.target += offset;
    }

    fn clamp_distance(&self, camera: &mut Camera) {
        let eye = camera.position - camera.target;
        let distance = eye.length();
        if distance > self.max_distance {
            camera.position = camera.target + eye.normalize_or(Vec3::Z) * self.max_distance;
        } else if distance < self.min_distance {
            camera.position = camera.target + eye.normalize_or(Vec3::Z) * self.min_distance;
        }
    }
}

impl CameraController for TrackballControls {
    fn update(&mut self, camera: &mut Camera, input: &dyn Controller) {
        let (dx, dy) = input.pointer_delta();

        if input.is_down(Button::MouseLeft) {
            self.rotate(camera, dx, dy);
        } else {
            self.rotate(camera, 0.0, 0.0);
        }

        self.zoom(camera, input.scroll_delta());

        if input.is_down(Button::MouseRight) {
            self.pan(camera, dx, dy);
        }

        self.clamp_distance(camera);
    }

    fn name(&self) -> &'static str {
        "trackball"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockInput {
        pressed: Vec<Button>,
        delta: (f32, f32),
        scroll: f32,
    }

    impl MockInput {
        fn idle() -> Self {
            Self {
                pressed: Vec::new(),
                delta: (0.0, 0.0),
                scroll: 0.0,
            }
        }
    }

    impl Controller for MockInput {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }

        fn pointer_position(&self) -> Option<(f32, f32)> {
            Some((0.0, 0.0))
        }

        fn pointer_delta(&self) -> (f32, f32) {
            self.delta
        }

        fn scroll_delta(&self) -> f32 {
            self.scroll
        }
    }

    fn controls() -> TrackballControls {
        TrackballControls::new(0.005, 0.0003, 0.0015, 0.0, 200.0)
    }

    fn camera() -> Camera {
        Camera::new(Vec3::new(0.0, 10.0, 45.0), 90.0, 0.1, 1000.0)
    }

    #[test]
    fn test_rotation_keeps_distance() {
        let mut controls = controls();
        let mut camera = camera();
        let before = camera.distance_to_target();

        let input = MockInput {
            pressed: vec![Button::MouseLeft],
            delta: (40.0, -25.0),
            scroll: 0.0,
        };
        controls.update(&mut camera, &input);

        assert!((camera.distance_to_target() - before).abs() < 1e-3);
        assert_ne!(camera.position, Vec3::new(0.0, 10.0, 45.0));
        assert!((camera.up.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_drag_right_swings_camera_left() {
        let mut controls = controls();
        let mut camera = Camera::new(Vec3::new(0.0, 0.0, 50.0), 90.0, 0.1, 1000.0);
        let input = MockInput {
            pressed: vec![Button::MouseLeft],
            delta: (30.0, 0.0),
            scroll: 0.0,
        };
        controls.update(&mut camera, &input);
        assert!(camera.position.x < 0.0);
        assert!(camera.position.y.abs() < 1e-4);
    }

    #[test]
    fn test_spin_decays_after_release() {
        let mut controls = controls();
        let mut camera = camera();
        let drag = MockInput {
            pressed: vec![Button::MouseLeft],
            delta: (50.0, 0.0),
            scroll: 0.0,
        };
        controls.update(&mut camera, &drag);

        let mut previous = controls.last_angle;
        for _ in 0..5 {
            controls.update(&mut camera, &MockInput::idle());
            assert!(controls.last_angle < previous);
            previous = controls.last_angle;
        }
        for _ in 0..500 {
            controls.update(&mut camera, &MockInput::idle());
        }
        assert_eq!(controls.last_angle, 0.0);
    }

    #[test]
    fn test_wheel_zoom_clamped_to_max_distance() {
        let mut controls = controls();
        let mut camera = camera();
        let input = MockInput {
            scroll: 100_000.0,
            ..MockInput::idle()
        };
        controls.update(&mut camera, &input);
        assert!((camera.distance_to_target() - 200.0).abs() < 1e-3);
    }

    #[test]
    fn test_wheel_zoom_in_moves_closer() {
        let mut controls = controls();
        let mut camera = camera();
        let before = camera.distance_to_target();
        let input = MockInput {
            scroll: -100.0,
            ..MockInput::idle()
        };
        controls.update(&mut camera, &input);
        assert!(camera.distance_to_target() < before);
    }

    #[test]
    fn test_pan_moves_target_with_camera() {
        let mut controls = controls();
        let mut camera = camera();
        let eye_before = camera.position - camera.target;
        let input = MockInput {
            pressed: vec![Button::MouseRight],
            delta: (20.0, 10.0),
            scroll: 0.0,
        };
        controls.update(&mut camera, &input);

        assert_ne!(camera.target, Vec3::ZERO);
        let eye_after = camera.position - camera.target;
        assert!((eye_after - eye_before).length() < 1e-4);
    }
}
