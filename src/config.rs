//! Scene configuration.
//!
//! Every section defaults to the values the scene was designed around, so a
//! config file only needs to name what it changes.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::math::HexColor;

/// Where word labels come from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LabelSource {
    /// Random English words
    Random,
    /// The fixed Italian phrase list
    Phrases,
}

/// Camera controller used once the intro zoom has finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ControlsKind {
    Trackball,
    Ellipse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub camera: CameraConfig,
    pub fog: FogConfig,
    pub ambient_intensity: f32,
    pub background: HexColor,
    pub stars: StarsConfig,
    pub words: WordsConfig,
    pub phrase: PhraseConfig,
    pub text: TextConfig,
    pub zoom: ZoomConfig,
    pub cloud: CloudConfig,
    pub controls: ControlsConfig,
    /// Seed for word, star and cloud generation; `None` draws from entropy
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    pub position: [f32; 3],
    /// Vertical field of view in degrees
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FogConfig {
    pub color: HexColor,
    pub near: f32,
    pub far: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StarsConfig {
    pub radius: f32,
    pub depth: f32,
    pub count: usize,
    pub factor: f32,
    pub saturation: f32,
    pub fade: bool,
    pub speed: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WordsConfig {
    pub count: usize,
    pub radius_x: f32,
    pub radius_y: f32,
    /// Radians per second
    pub angular_speed: f32,
    pub source: LabelSource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhraseConfig {
    pub text: String,
    pub position: [f32; 3],
    pub bob_amplitude: f32,
    /// Radians per second
    pub bob_frequency: f32,
    pub glow: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Glyph height in world units
    pub font_size: f32,
    /// Extra spacing between glyphs, in em
    pub letter_spacing: f32,
    pub color: HexColor,
    pub hover_color: HexColor,
    /// Fraction of the remaining color distance covered each frame
    pub hover_rate: f32,
    pub font_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Seconds
    pub duration: f32,
    /// Distance kept between the front of the word cloud and the zoom target
    pub buffer: f32,
    /// Added to the eased depth when placing the camera
    pub trailing_offset: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudConfig {
    pub enabled: bool,
    pub position: [f32; 3],
    pub color: HexColor,
    pub opacity: f32,
    pub speed: f32,
    pub growth: f32,
    pub scale: f32,
    pub segments: usize,
    pub bounds: [f32; 3],
    pub volume: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    pub kind: ControlsKind,
    /// Radians per pixel of drag
    pub rotate_speed: f32,
    /// Distance scale per pixel of wheel
    pub zoom_speed: f32,
    /// Fraction of the target distance per pixel of drag
    pub pan_speed: f32,
    pub min_distance: f32,
    /// Defaults to the initial camera distance
    pub max_distance: Option<f32>,
    pub ellipse_radius_x: f32,
    pub ellipse_radius_y: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            fog: FogConfig::default(),
            ambient_intensity: 0.1,
            background: hex("#04000c"),
            stars: StarsConfig::default(),
            words: WordsConfig::default(),
            phrase: PhraseConfig::default(),
            text: TextConfig::default(),
            zoom: ZoomConfig::default(),
            cloud: CloudConfig::default(),
            controls: ControlsConfig::default(),
            seed: None,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 10.0, 200.0],
            fov: 90.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: hex("#04000c"),
            near: 0.0,
            far: 80.0,
        }
    }
}

impl Default for StarsConfig {
    fn default() -> Self {
        Self {
            radius: 100.0,
            depth: 50.0,
            count: 8000,
            factor: 5.0,
            saturation: 0.0,
            fade: true,
            speed: 1.0,
        }
    }
}

impl Default for WordsConfig {
    fn default() -> Self {
        Self {
            count: 10,
            radius_x: 40.0,
            radius_y: 20.0,
            angular_speed: 0.02,
            source: LabelSource::Random,
        }
    }
}

impl Default for PhraseConfig {
    fn default() -> Self {
        Self {
            text: crate::vocabulary::QUESTION.to_string(),
            position: [0.0, 0.0, 0.0],
            bob_amplitude: 0.1,
            bob_frequency: 2.0,
            glow: true,
        }
    }
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            font_size: 2.5,
            letter_spacing: -0.05,
            color: hex("#C2BFB6"),
            hover_color: HexColor::WHITE,
            hover_rate: 0.1,
            font_path: None,
        }
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            duration: 1.0,
            buffer: 15.0,
            trailing_offset: 10.0,
        }
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            position: [0.0, 0.0, 10.0],
            color: hex("#04000c"),
            opacity: 0.4,
            speed: 0.1,
            growth: 1.0,
            scale: 40.0,
            segments: 20,
            bounds: [5.0, 1.0, 1.0],
            volume: 6.0,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            kind: ControlsKind::Trackball,
            rotate_speed: 0.005,
            zoom_speed: 0.0003,
            pan_speed: 0.0015,
            min_distance: 0.0,
            max_distance: None,
            ellipse_radius_x: 40.0,
            ellipse_radius_y: 20.0,
        }
    }
}

/// Parse a color literal known to be valid
fn hex(literal: &str) -> HexColor {
    HexColor::parse(literal).unwrap_or(HexColor::WHITE)
}

impl SceneConfig {
    /// Load a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json(&text).with_context(|| format!("Invalid config file: {:?}", path))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let config: SceneConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Camera distance the trackball may not exceed
    pub fn max_distance(&self) -> f32 {
        self.controls
            .max_distance
            .unwrap_or(self.camera.position[2])
    }

    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f32) -> Result<()> {
            if !value.is_finite() || value <= 0.0 {
                bail!("{} must be a positive number, got {}", name, value);
            }
            Ok(())
        }

        positive("camera.fov", self.camera.fov)?;
        if self.camera.fov >= 180.0 {
            bail!("camera.fov must be below 180 degrees, got {}", self.camera.fov);
        }
        positive("camera.near", self.camera.near)?;
        if self.camera.far <= self.camera.near {
            bail!(
                "camera.far ({}) must be greater than camera.near ({})",
                self.camera.far,
                self.camera.near
            );
        }
        if !self.fog.near.is_finite() || self.fog.far <= self.fog.near {
            bail!(
                "fog.far ({}) must be greater than fog.near ({})",
                self.fog.far,
                self.fog.near
            );
        }
        positive("words.radius_x", self.words.radius_x)?;
        positive("words.radius_y", self.words.radius_y)?;
        positive("zoom.duration", self.zoom.duration)?;
        positive("text.font_size", self.text.font_size)?;
        if !(0.0..=1.0).contains(&self.text.hover_rate) {
            bail!("text.hover_rate must be within [0, 1], got {}", self.text.hover_rate);
        }
        if self.max_distance() < self.controls.min_distance {
            bail!(
                "controls.max_distance ({}) must not be below controls.min_distance ({})",
                self.max_distance(),
                self.controls.min_distance
            );
        }
        Ok(())
    }
}
