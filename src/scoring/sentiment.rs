use serde::{Deserialize, Serialize};

use crate::lexicon::{self, NEGATIVE_WORDS, POSITIVE_WORDS};
use crate::scoring::clamp_score;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentWeights {
    pub baseline: f64,
    pub word: f64,
    pub emoji: f64,
    pub exclamation: f64,
}

impl Default for SentimentWeights {
    fn default() -> Self {
        Self {
            baseline: 50.0,
            word: 10.0,
            emoji: 5.0,
            exclamation: 2.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SentimentScorer {
    weights: SentimentWeights,
}

impl SentimentScorer {
    pub fn new(weights: SentimentWeights) -> Self {
        Self { weights }
    }

    /// Lexicon hits are counted over the normalized words; emoji and
    /// exclamation runs over the original text.
    pub fn score(&self, words: &[String], text: &str) -> f64 {
        let mut lexical = 0.0;
        for word in words {
            if POSITIVE_WORDS.contains(&word.as_str()) {
                lexical += 1.0;
            }
            if NEGATIVE_WORDS.contains(&word.as_str()) {
                lexical -= 1.0;
            }
        }

        let emoji = text.chars().filter(|&ch| lexicon::is_positive_emoji(ch)).count() as f64;
        let exclamations = lexicon::exclamation_runs(text) as f64;

        clamp_score(
            self.weights.baseline
                + self.weights.word * lexical
                + self.weights.emoji * emoji
                + self.weights.exclamation * exclamations,
        )
    }
}
