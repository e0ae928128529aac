//! Label sources for the word cloud.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::config::LabelSource;

/// The question shown at the center of the scene
pub const QUESTION: &str = "Cosa ti manca per essere felice?";

pub const PHRASES: [&str; 10] = [
    "Il merito della laurea",
    "La stabilità del lavoro",
    "Il futuro dei figli",
    "L’indipendenza della macchina",
    "La sicurezza della casa",
    "La gioia delle feste",
    "La flessibilità della fede",
    "Conoscere le buone maniere",
    "La forza del matrimonio",
    "La ricarica delle vacanze",
];

const WORDS: &[&str] = &[
    "ability", "absence", "academy", "account", "action", "advice", "afternoon", "agreement",
    "air", "alarm", "anchor", "angle", "animal", "answer", "anxiety", "apple", "arrival",
    "art", "atmosphere", "attention", "autumn", "balance", "balloon", "basket", "beach",
    "beauty", "bell", "birthday", "blanket", "bloom", "border", "bottle", "branch", "bread",
    "breath", "breeze", "bridge", "brother", "bubble", "candle", "canvas", "castle", "chance",
    "chapter", "childhood", "choice", "circle", "city", "cloud", "coast", "comfort", "compass",
    "courage", "cousin", "crystal", "culture", "curiosity", "dance", "dawn", "daylight",
    "desire", "destiny", "diamond", "distance", "dream", "dust", "echo", "edge", "effort",
    "ember", "energy", "evening", "faith", "family", "feather", "field", "fire", "flame",
    "flower", "forest", "fortune", "freedom", "friend", "future", "garden", "gift", "glass",
    "glow", "grace", "harbor", "harmony", "harvest", "health", "heart", "history", "home",
    "honey", "hope", "horizon", "humor", "island", "journey", "joy", "kindness", "kitchen",
    "knowledge", "lantern", "laughter", "leaf", "letter", "library", "light", "lullaby",
    "marriage", "meadow", "memory", "message", "midnight", "mirror", "moment", "moon",
    "morning", "mountain", "music", "mystery", "nature", "night", "ocean", "orbit", "order",
    "paper", "passion", "patience", "peace", "pebble", "piano", "planet", "poem", "promise",
    "purpose", "quiet", "rain", "reason", "river", "road", "room", "rose", "safety", "sail",
    "season", "secret", "shadow", "shelter", "shore", "silence", "sky", "snow", "song",
    "spark", "spirit", "spring", "star", "stone", "story", "summer", "sunrise", "sunset",
    "surprise", "table", "teacher", "thunder", "time", "trust", "truth", "twilight",
    "umbrella", "universe", "valley", "velvet", "village", "voice", "voyage", "water",
    "wave", "wealth", "weather", "wind", "window", "winter", "wisdom", "wonder", "work",
    "youth",
];

/// Random word generator over an embedded English list
pub struct WordGenerator {
    rng: StdRng,
}

impl WordGenerator {
    pub fn new(rng: StdRng) -> Self {
        Self { rng }
    }

    pub fn generate(&mut self) -> &'static str {
        WORDS.choose(&mut self.rng).copied().unwrap_or("word")
    }

    /// `count` words, drawn independently so repeats are possible
    pub fn take(&mut self, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate().to_string()).collect()
    }
}

/// Labels for `count` words from the chosen source; phrases repeat once exhausted
pub fn labels(source: LabelSource, count: usize, rng: &mut StdRng) -> Vec<String> {
    match source {
        LabelSource::Random => {
            let mut generator = WordGenerator::new(StdRng::seed_from_u64(rng.gen()));
            generator.take(count)
        }
        LabelSource::Phrases => PHRASES
            .iter()
            .cycle()
            .take(count)
            .map(|p| p.to_string())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_words_come_from_list() {
        let mut generator = WordGenerator::new(StdRng::seed_from_u64(7));
        for _ in 0..50 {
            assert!(WORDS.contains(&generator.generate()));
        }
    }

    #[test]
    fn test_same_seed_same_words() {
        let a = WordGenerator::new(StdRng::seed_from_u64(42)).take(10);
        let b = WordGenerator::new(StdRng::seed_from_u64(42)).take(10);
        assert_eq!(a, b);
        assert_eq!(a.len(), 10);
    }

    #[test]
    fn test_phrases_in_order_and_cycle() {
        let mut rng = StdRng::seed_from_u64(0);
        let labels = labels(LabelSource::Phrases, 12, &mut rng);
        assert_eq!(labels.len(), 12);
        assert_eq!(labels[0], PHRASES[0]);
        assert_eq!(labels[9], PHRASES[9]);
        assert_eq!(labels[10], PHRASES[0]);
    }

    #[test]
    fn test_zero_labels() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(labels(LabelSource::Random, 0, &mut rng).is_empty());
    }
}
