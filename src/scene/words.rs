use std::f32::consts::TAU;

use glam::Vec3;

use super::word::{HoverTint, Word};
use crate::config::WordsConfig;
use crate::math::AABB;

/// Evenly spaced slots on a horizontal ellipse, advancing with time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitLayout {
    pub count: usize,
    pub radius_x: f32,
    pub radius_y: f32,
    /// Radians per second
    pub angular_speed: f32,
}

impl OrbitLayout {
    pub fn new(count: usize, radius_x: f32, radius_y: f32, angular_speed: f32) -> Self {
        Self {
            count,
            radius_x,
            radius_y,
            angular_speed,
        }
    }

    pub fn from_config(config: &WordsConfig) -> Self {
        Self::new(
            config.count,
            config.radius_x,
            config.radius_y,
            config.angular_speed,
        )
    }

    /// Angle between neighbouring slots. Infinite for an empty layout, which has
    /// no slots to use it.
    pub fn angle_step(&self) -> f32 {
        TAU / self.count as f32
    }

    pub fn angle(&self, index: usize, elapsed: f32) -> f32 {
        index as f32 * self.angle_step() + elapsed * self.angular_speed
    }

    /// Slot position at `elapsed` seconds; y is always 0
    pub fn position(&self, index: usize, elapsed: f32) -> Vec3 {
        let (sin, cos) = self.angle(index, elapsed).sin_cos();
        Vec3::new(self.radius_x * cos, 0.0, self.radius_y * sin)
    }

    pub fn positions(&self, elapsed: f32) -> impl Iterator<Item = Vec3> + '_ {
        (0..self.count).map(move |i| self.position(i, elapsed))
    }
}

/// The orbiting labels. The word count is fixed when the cloud is built.
#[derive(Debug, Clone)]
pub struct WordCloud {
    layout: OrbitLayout,
    words: Vec<Word>,
}

impl WordCloud {
    /// Place one word per label at its starting slot; the layout count follows the labels
    pub fn new(layout: OrbitLayout, labels: Vec<String>, tint: &HoverTint) -> Self {
        let layout = OrbitLayout {
            count: labels.len(),
            ..layout
        };
        let words = labels
            .into_iter()
            .enumerate()
            .map(|(i, label)| Word::new(label, layout.position(i, 0.0), tint))
            .collect();

        Self { layout, words }
    }

    /// Per-frame pass: move every word to its slot at `elapsed` and ease its color
    pub fn update(&mut self, elapsed: f32, tint: &HoverTint) {
        for (i, word) in self.words.iter_mut().enumerate() {
            word.position = self.layout.position(i, elapsed);
            word.step_color(tint);
        }
    }

    /// Bounds of the current word positions, `None` when there are no words
    pub fn bounds(&self) -> Option<AABB> {
        AABB::from_points(self.words.iter().map(|w| w.position))
    }

    pub fn layout(&self) -> &OrbitLayout {
        &self.layout
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tint() -> HoverTint {
        HoverTint {
            base: [0.5, 0.5, 0.5],
            highlight: [1.0, 1.0, 1.0],
            rate: 0.1,
        }
    }

    #[test]
    fn test_first_slot_on_x_axis() {
        let layout = OrbitLayout::new(4, 40.0, 20.0, 0.02);
        let p = layout.position(0, 0.0);
        assert!((p.x - 40.0).abs() < 1e-5);
        assert_eq!(p.y, 0.0);
        assert!(p.z.abs() < 1e-5);
    }

    #[test]
    fn test_quarter_slot_on_z_axis() {
        let layout = OrbitLayout::new(4, 40.0, 20.0, 0.02);
        let p = layout.position(1, 0.0);
        assert!(p.x.abs() < 1e-4);
        assert!((p.z - 20.0).abs() < 1e-4);
    }

    #[test]
    fn test_angles_advance_with_time() {
        let layout = OrbitLayout::new(10, 40.0, 20.0, 0.02);
        let a0 = layout.angle(3, 0.0);
        let a1 = layout.angle(3, 50.0);
        assert!((a1 - a0 - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_cloud_starts_at_time_zero_slots() {
        let layout = OrbitLayout::new(3, 40.0, 20.0, 0.02);
        let labels = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let cloud = WordCloud::new(layout, labels, &tint());

        assert_eq!(cloud.len(), 3);
        for (i, word) in cloud.words().iter().enumerate() {
            assert_eq!(word.position, layout.position(i, 0.0));
        }
        assert_eq!(cloud.words()[1].label(), "b");
    }

    #[test]
    fn test_count_follows_labels() {
        let layout = OrbitLayout::new(10, 40.0, 20.0, 0.02);
        let cloud = WordCloud::new(layout, vec!["only".to_string()], &tint());
        assert_eq!(cloud.layout().count, 1);
        assert_eq!(cloud.len(), 1);
    }

    #[test]
    fn test_update_moves_words_and_colors() {
        let layout = OrbitLayout::new(2, 40.0, 20.0, 0.5);
        let mut cloud = WordCloud::new(layout, vec!["a".into(), "b".into()], &tint());
        cloud.words_mut()[0].set_hovered(true);

        cloud.update(2.0, &tint());

        assert_eq!(cloud.words()[0].position, layout.position(0, 2.0));
        assert_eq!(cloud.words()[1].position, layout.position(1, 2.0));
        assert!(cloud.words()[0].color()[0] > 0.5);
        assert_eq!(cloud.words()[1].color(), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_empty_cloud_has_no_bounds() {
        let layout = OrbitLayout::new(0, 40.0, 20.0, 0.02);
        let mut cloud = WordCloud::new(layout, Vec::new(), &tint());
        cloud.update(1.0, &tint());
        assert!(cloud.is_empty());
        assert!(cloud.bounds().is_none());
    }
}
