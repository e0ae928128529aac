use glam::Vec3;

use constellation::camera::Camera;
use constellation::config::ZoomConfig;
use constellation::math::{ease_in_out_quad, AABB};
use constellation::scene::CameraZoom;

#[cfg(test)]
mod camera_zoom_tests {
    use super::*;

    fn start() -> Vec3 {
        Vec3::new(0.0, 10.0, 200.0)
    }

    fn orbit_bounds() -> AABB {
        AABB::new(Vec3::new(-40.0, 0.0, -20.0), Vec3::new(40.0, 0.0, 20.0))
    }

    #[test]
    fn test_ease_endpoints_and_symmetry() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let sum = ease_in_out_quad(t) + ease_in_out_quad(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_ease_monotonic() {
        let mut previous = ease_in_out_quad(0.0);
        for i in 1..=1000 {
            let value = ease_in_out_quad(i as f32 / 1000.0);
            assert!(value >= previous);
            previous = value;
        }
    }

    #[test]
    fn test_z_moves_strictly_toward_target() {
        let zoom = CameraZoom::new(start(), 35.0, 1.0, 0.0);
        let mut previous = zoom.z_at(0.0);
        assert_eq!(previous, 200.0);
        for i in 1..=100 {
            let z = zoom.z_at(i as f32 / 100.0);
            assert!(z < previous, "z did not decrease at step {}", i);
            previous = z;
        }
        assert!((previous - 35.0).abs() < 1e-4);
    }

    #[test]
    fn test_z_fixed_after_duration() {
        let zoom = CameraZoom::new(start(), 35.0, 1.0, 0.0);
        for &t in &[1.0, 1.5, 3.0, 100.0] {
            assert!((zoom.z_at(t) - 35.0).abs() < 1e-4);
        }
    }

    #[test]
    fn test_frame_driven_zoom_lands_and_freezes() {
        let mut camera = Camera::new(start(), 90.0, 0.1, 1000.0);
        let config = ZoomConfig {
            trailing_offset: 0.0,
            ..ZoomConfig::default()
        };
        let mut zoom = CameraZoom::framing(camera.position, Some(orbit_bounds()), &config).unwrap();
        assert_eq!(zoom.target_z(), 35.0);

        let mut previous = camera.position.z;
        let mut frames = 0;
        while zoom.update(1.0 / 60.0, &mut camera) {
            assert!(camera.position.z < previous);
            previous = camera.position.z;
            frames += 1;
            assert!(frames < 120, "zoom never finished");
        }
        assert!((camera.position.z - 35.0).abs() < 1e-3);

        // Never replays
        for _ in 0..30 {
            assert!(!zoom.update(1.0 / 60.0, &mut camera));
        }
        assert!((camera.position.z - 35.0).abs() < 1e-3);
    }

    #[test]
    fn test_camera_keeps_x_and_y_during_zoom() {
        let mut camera = Camera::new(Vec3::new(3.0, 10.0, 200.0), 90.0, 0.1, 1000.0);
        let mut zoom = CameraZoom::new(camera.position, 35.0, 1.0, 10.0);
        zoom.update(0.25, &mut camera);
        assert_eq!(camera.position.x, 3.0);
        assert_eq!(camera.position.y, 10.0);
    }

    #[test]
    fn test_no_words_no_zoom() {
        assert!(CameraZoom::framing(start(), None, &ZoomConfig::default()).is_none());
    }
}
