use glam::Vec3;

use crate::config::TextConfig;
use crate::math::lerp_rgb;

/// Colors a label moves between as the pointer enters and leaves it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverTint {
    /// Linear color at rest
    pub base: [f32; 3],
    /// Linear color while hovered
    pub highlight: [f32; 3],
    /// Fraction of the remaining distance covered per frame
    pub rate: f32,
}

impl HoverTint {
    pub fn from_config(config: &TextConfig) -> Self {
        Self {
            base: config.color.linear(),
            highlight: config.hover_color.linear(),
            rate: config.hover_rate,
        }
    }

    pub fn target(&self, hovered: bool) -> [f32; 3] {
        if hovered {
            self.highlight
        } else {
            self.base
        }
    }
}

/// A label riding the orbit
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    label: String,
    pub position: Vec3,
    hovered: bool,
    color: [f32; 3],
}

impl Word {
    pub fn new(label: impl Into<String>, position: Vec3, tint: &HoverTint) -> Self {
        Self {
            label: label.into(),
            position,
            hovered: false,
            color: tint.base,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Linear display color
    pub fn color(&self) -> [f32; 3] {
        self.color
    }

    /// Returns true when the hover state changed
    pub fn set_hovered(&mut self, hovered: bool) -> bool {
        let changed = self.hovered != hovered;
        self.hovered = hovered;
        changed
    }

    /// Move the display color one frame toward the hover target
    pub fn step_color(&mut self, tint: &HoverTint) {
        self.color = lerp_rgb(self.color, tint.target(self.hovered), tint.rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tint() -> HoverTint {
        HoverTint {
            base: [0.5, 0.5, 0.4],
            highlight: [1.0, 1.0, 1.0],
            rate: 0.1,
        }
    }

    #[test]
    fn test_starts_at_base_color() {
        let word = Word::new("orbit", Vec3::ZERO, &tint());
        assert_eq!(word.color(), tint().base);
        assert!(!word.is_hovered());
    }

    #[test]
    fn test_hover_change_detection() {
        let mut word = Word::new("orbit", Vec3::ZERO, &tint());
        assert!(word.set_hovered(true));
        assert!(!word.set_hovered(true));
        assert!(word.set_hovered(false));
    }

    #[test]
    fn test_color_approaches_highlight_by_tenths() {
        let tint = tint();
        let mut word = Word::new("orbit", Vec3::ZERO, &tint);
        word.set_hovered(true);

        word.step_color(&tint);
        assert!((word.color()[0] - 0.55).abs() < 1e-6);

        for _ in 0..200 {
            word.step_color(&tint);
        }
        assert!((word.color()[0] - 1.0).abs() < 1e-4);
        assert!((word.color()[2] - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_color_returns_after_leave() {
        let tint = tint();
        let mut word = Word::new("orbit", Vec3::ZERO, &tint);
        word.set_hovered(true);
        for _ in 0..50 {
            word.step_color(&tint);
        }
        word.set_hovered(false);
        let before = word.color()[0];
        word.step_color(&tint);
        assert!(word.color()[0] < before);
    }
}
