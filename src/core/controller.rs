/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    Escape,
    MouseLeft,
    MouseRight,
}

/// Controller - pointer and button state as seen by the per-frame update
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn get_down_keys(&self) -> &[Button];

    /// Pointer position in physical pixels, `None` until the cursor enters the window
    fn pointer_position(&self) -> Option<(f32, f32)>;

    /// Pointer movement accumulated this frame, in physical pixels
    fn pointer_delta(&self) -> (f32, f32);

    /// Wheel movement accumulated this frame, in pixels.
    /// Positive values scroll away from the scene (zoom out).
    fn scroll_delta(&self) -> f32;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_button_hash() {
        let mut set = HashSet::new();
        set.insert(Button::MouseLeft);
        set.insert(Button::MouseRight);
        set.insert(Button::MouseLeft);

        assert!(set.contains(&Button::MouseLeft));
        assert!(!set.contains(&Button::Escape));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_button_debug() {
        assert_eq!(format!("{:?}", Button::MouseRight), "MouseRight");
    }

    struct MockController {
        pressed: Vec<Button>,
        delta: (f32, f32),
    }

    impl Controller for MockController {
        fn is_down(&self, button: Button) -> bool {
            self.pressed.contains(&button)
        }

        fn get_down_keys(&self) -> &[Button] {
            &self.pressed
        }

        fn pointer_position(&self) -> Option<(f32, f32)> {
            None
        }

        fn pointer_delta(&self) -> (f32, f32) {
            self.delta
        }

        fn scroll_delta(&self) -> f32 {
            0.0
        }
    }

    #[test]
    fn test_controller_is_down() {
        let controller = MockController {
            pressed: vec![Button::MouseLeft],
            delta: (3.0, -2.0),
        };

        assert!(controller.is_down(Button::MouseLeft));
        assert!(!controller.is_down(Button::MouseRight));
        assert_eq!(controller.get_down_keys().len(), 1);
        assert_eq!(controller.pointer_delta(), (3.0, -2.0));
    }
}
