use glam::Vec3;

use crate::config::PhraseConfig;

/// The glowing question at the center of the orbit, bobbing gently
#[derive(Debug, Clone, PartialEq)]
pub struct GlowingPhrase {
    text: String,
    base: Vec3,
    pub position: Vec3,
    amplitude: f32,
    frequency: f32,
    glow: bool,
    hovered: bool,
}

impl GlowingPhrase {
    pub fn from_config(config: &PhraseConfig) -> Self {
        let base = Vec3::from_array(config.position);
        Self {
            text: config.text.clone(),
            base,
            position: base,
            amplitude: config.bob_amplitude,
            frequency: config.bob_frequency,
            glow: config.glow,
            hovered: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_glow(&self) -> bool {
        self.glow
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        self.hovered = hovered;
    }

    /// Vertical offset from the rest position at `elapsed` seconds
    pub fn bob_offset(&self, elapsed: f32) -> f32 {
        (elapsed * self.frequency).sin() * self.amplitude
    }

    pub fn update(&mut self, elapsed: f32) {
        self.position = self.base + Vec3::Y * self.bob_offset(elapsed);
    }
}
