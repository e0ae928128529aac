mod cloud;
mod fog;
mod phrase;
mod stars;
mod word;
mod words;
mod zoom;

pub use cloud::VolumetricCloud;
pub use fog::LinearFog;
pub use phrase::GlowingPhrase;
pub use stars::Starfield;
pub use word::{HoverTint, Word};
pub use words::{OrbitLayout, WordCloud};
pub use zoom::CameraZoom;

use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::camera::Camera;
use crate::config::SceneConfig;
use crate::controls::{self, CameraController};
use crate::core::{Controller, FrameInfo};
use crate::types::SceneUniform;
use crate::vocabulary;

/// What the pointer is currently over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoverTarget {
    #[default]
    None,
    Word(usize),
    Phrase,
}

/// Everything on stage: the orbiting words, the central phrase, the sky and the
/// camera behaviour that frames them.
pub struct Scene {
    words: WordCloud,
    phrase: GlowingPhrase,
    stars: Starfield,
    cloud: VolumetricCloud,
    fog: LinearFog,
    tint: HoverTint,
    zoom: Option<CameraZoom>,
    controls: Box<dyn CameraController>,
    hover: HoverTarget,
    ambient: f32,
    elapsed: f32,
}

impl Scene {
    /// Build the scene and its starting camera
    ///
    /// Words, stars and cloud puffs are drawn from one RNG, seeded from the
    /// config when a seed is given.
    pub fn mount(config: &SceneConfig) -> (Self, Camera) {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let labels = vocabulary::labels(config.words.source, config.words.count, &mut rng);
        log::info!("Words: {:?}", labels);

        let mut scene = Self::with_labels(config, labels, &mut rng);

        let camera_config = &config.camera;
        let camera = Camera::new(
            Vec3::from_array(camera_config.position),
            camera_config.fov,
            camera_config.near,
            camera_config.far,
        );
        scene.zoom = CameraZoom::framing(camera.position, scene.words.bounds(), &config.zoom);

        (scene, camera)
    }

    /// Build the scene around explicit labels; no intro zoom is scheduled
    pub fn with_labels(config: &SceneConfig, labels: Vec<String>, rng: &mut StdRng) -> Self {
        let tint = HoverTint::from_config(&config.text);
        let words = WordCloud::new(OrbitLayout::from_config(&config.words), labels, &tint);
        let stars = Starfield::generate(&config.stars, rng);
        let cloud = VolumetricCloud::generate(&config.cloud, rng);
        let controls = controls::from_config(config);
        log::info!("Camera controls: {}", controls.name());

        Self {
            words,
            phrase: GlowingPhrase::from_config(&config.phrase),
            stars,
            cloud,
            fog: LinearFog::from_config(&config.fog),
            tint,
            zoom: None,
            controls,
            hover: HoverTarget::None,
            ambient: config.ambient_intensity,
            elapsed: 0.0,
        }
    }

    /// Per-frame pass: intro zoom or user controls, then the word orbit and phrase bob
    pub fn update(&mut self, frame: &FrameInfo, camera: &mut Camera, input: &dyn Controller) {
        self.elapsed = frame.elapsed;

        let zooming = match self.zoom.as_mut() {
            Some(zoom) if zoom.is_active() => {
                zoom.update(frame.delta, camera);
                true
            }
            _ => false,
        };
        if !zooming {
            self.controls.update(camera, input);
        }

        self.words.update(frame.elapsed, &self.tint);
        self.phrase.update(frame.elapsed);

        log::debug!(
            "Camera position: ({:.2}, {:.2}, {:.2})",
            camera.position.x,
            camera.position.y,
            camera.position.z
        );
    }

    /// Move hover to `target`; returns true when it changed
    pub fn set_hover(&mut self, target: HoverTarget) -> bool {
        if self.hover == target {
            return false;
        }

        for (i, word) in self.words.words_mut().iter_mut().enumerate() {
            word.set_hovered(target == HoverTarget::Word(i));
        }
        self.phrase.set_hovered(target == HoverTarget::Phrase);
        self.hover = target;
        true
    }

    pub fn hover(&self) -> HoverTarget {
        self.hover
    }

    pub fn is_hovering(&self) -> bool {
        self.hover != HoverTarget::None
    }

    /// Label of the hovered item, if any
    pub fn hovered_label(&self) -> Option<&str> {
        match self.hover {
            HoverTarget::None => None,
            HoverTarget::Word(i) => self.words.words().get(i).map(|w| w.label()),
            HoverTarget::Phrase => Some(self.phrase.text()),
        }
    }

    /// Log a click on the hovered item and return its label
    pub fn click(&self) -> Option<&str> {
        let label = self.hovered_label()?;
        log::info!("clicked: {}", label);
        Some(label)
    }

    pub fn words(&self) -> &WordCloud {
        &self.words
    }

    pub fn phrase(&self) -> &GlowingPhrase {
        &self.phrase
    }

    pub fn stars(&self) -> &Starfield {
        &self.stars
    }

    pub fn cloud(&self) -> &VolumetricCloud {
        &self.cloud
    }

    /// Resting text color; the central phrase always uses it
    pub fn base_text_color(&self) -> [f32; 3] {
        self.tint.base
    }

    pub fn fog(&self) -> &LinearFog {
        &self.fog
    }

    pub fn zoom(&self) -> Option<&CameraZoom> {
        self.zoom.as_ref()
    }

    pub fn is_zooming(&self) -> bool {
        self.zoom.is_some_and(|z| z.is_active())
    }

    pub fn controls_name(&self) -> &'static str {
        self.controls.name()
    }

    /// Uniform block for the star and cloud passes
    pub fn uniform(&self, camera: &Camera, viewport: Vec2) -> SceneUniform {
        SceneUniform {
            view_proj: camera.view_proj().to_cols_array_2d(),
            camera_position: camera.position.to_array(),
            time: self.elapsed,
            camera_right: camera.right().to_array(),
            fog_near: self.fog.near,
            camera_up: camera.camera_up().to_array(),
            fog_far: self.fog.far,
            camera_forward: camera.forward().to_array(),
            ambient: self.ambient,
            fog_color: self.fog.color,
            star_fade: if self.stars.fade() { 1.0 } else { 0.0 },
            cloud_color: self.cloud.color(),
            cloud_opacity: self.cloud.opacity(),
            cloud_center: self.cloud.center().to_array(),
            cloud_speed: self.cloud.speed(),
            viewport: viewport.to_array(),
            cloud_growth: self.cloud.growth(),
            star_time: self.stars.time(self.elapsed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Button;

    struct Idle;

    impl Controller for Idle {
        fn is_down(&self, _button: Button) -> bool {
            false
        }

        fn get_down_keys(&self) -> &[Button] {
            &[]
        }

        fn pointer_position(&self) -> Option<(f32, f32)> {
            None
        }

        fn pointer_delta(&self) -> (f32, f32) {
            (0.0, 0.0)
        }

        fn scroll_delta(&self) -> f32 {
            0.0
        }
    }

    fn config() -> SceneConfig {
        let mut config = SceneConfig::default();
        config.seed = Some(11);
        config.stars.count = 100;
        config
    }

    #[test]
    fn test_mount_schedules_zoom() {
        let (scene, camera) = Scene::mount(&config());
        assert_eq!(scene.words().len(), 10);
        assert_eq!(camera.position, Vec3::new(0.0, 10.0, 200.0));

        // Ten slots put the front-most words at 72 degrees
        let front = 20.0 * 72f32.to_radians().sin();
        let zoom = scene.zoom().unwrap();
        assert!((zoom.target_z() - (front + 15.0)).abs() < 1e-3);
        assert!(scene.is_zooming());
    }

    #[test]
    fn test_empty_scene_never_zooms() {
        let mut config = config();
        config.words.count = 0;
        let (mut scene, mut camera) = Scene::mount(&config);
        assert!(scene.zoom().is_none());

        scene.update(&FrameInfo::new(1, 0.5, 0.5), &mut camera, &Idle);
        assert!(!scene.is_zooming());
        assert!(camera.distance_to_target() <= 200.0 + 1e-3);
    }

    #[test]
    fn test_zoom_then_controls() {
        let (mut scene, mut camera) = Scene::mount(&config());
        let resting_z = scene.zoom().unwrap().target_z() + 10.0;

        scene.update(&FrameInfo::new(1, 0.5, 0.5), &mut camera, &Idle);
        assert!(scene.is_zooming());
        assert!(camera.position.z < 200.0);

        scene.update(&FrameInfo::new(2, 1.1, 0.6), &mut camera, &Idle);
        assert!(!scene.is_zooming());
        assert!((camera.position.z - resting_z).abs() < 1e-3);

        scene.update(&FrameInfo::new(3, 1.2, 0.1), &mut camera, &Idle);
        assert!((camera.position.z - resting_z).abs() < 1e-3);
    }

    #[test]
    fn test_hover_is_exclusive() {
        let (mut scene, _) = Scene::mount(&config());

        assert!(scene.set_hover(HoverTarget::Word(2)));
        assert!(!scene.set_hover(HoverTarget::Word(2)));
        assert!(scene.words().words()[2].is_hovered());

        assert!(scene.set_hover(HoverTarget::Phrase));
        assert!(!scene.words().words()[2].is_hovered());
        assert!(scene.phrase().is_hovered());
        assert_eq!(scene.hovered_label(), Some(vocabulary::QUESTION));

        scene.set_hover(HoverTarget::None);
        assert!(!scene.is_hovering());
        assert_eq!(scene.hover(), HoverTarget::None);
        assert!(scene.words().words().iter().all(|w| !w.is_hovered()));
    }

    #[test]
    fn test_click_reports_hovered_label() {
        let (mut scene, _) = Scene::mount(&config());
        assert_eq!(scene.click(), None);

        scene.set_hover(HoverTarget::Word(1));
        let label = scene.words().words()[1].label().to_string();
        assert_eq!(scene.click(), Some(label.as_str()));

        scene.set_hover(HoverTarget::Phrase);
        assert_eq!(scene.click(), Some(vocabulary::QUESTION));
    }

    #[test]
    fn test_uniform_carries_fog_and_time() {
        let (mut scene, mut camera) = Scene::mount(&config());
        scene.update(&FrameInfo::new(1, 2.0, 0.016), &mut camera, &Idle);
        let uniform = scene.uniform(&camera, Vec2::new(800.0, 600.0));
        assert_eq!(uniform.fog_far, 80.0);
        assert_eq!(uniform.time, 2.0);
        assert_eq!(uniform.star_time, 2.0);
        assert_eq!(uniform.star_fade, 1.0);
        assert_eq!(uniform.viewport, [800.0, 600.0]);
    }
}
