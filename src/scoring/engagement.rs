use serde::{Deserialize, Serialize};

use crate::scoring::clamp_score;
use crate::Platform;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngagementWeights {
    pub sentiment: f64,
    pub clarity: f64,
    pub cta: f64,
    pub hashtags: f64,
    pub length: f64,
}

impl Default for EngagementWeights {
    fn default() -> Self {
        Self {
            sentiment: 0.30,
            clarity: 0.25,
            cta: 0.15,
            hashtags: 0.15,
            length: 0.15,
        }
    }
}

#[derive(Debug, Clone)]
pub struct EngagementScorer {
    weights: EngagementWeights,
}

impl EngagementScorer {
    pub fn new(weights: EngagementWeights) -> Self {
        Self { weights }
    }

    pub fn score(
        &self,
        sentiment: f64,
        clarity: f64,
        cta: bool,
        hashtag_count: usize,
        length_fit: f64,
    ) -> u32 {
        let cta_signal = if cta { 100.0 } else { 50.0 };
        let hashtag_signal = (hashtag_count as f64 * 20.0).min(100.0);

        let total = self.weights.sentiment * sentiment
            + self.weights.clarity * clarity
            + self.weights.cta * cta_signal
            + self.weights.hashtags * hashtag_signal
            + self.weights.length * length_fit;

        clamp_score(total).round() as u32
    }
}

pub fn length_fit(word_count: usize, platform: Platform) -> f64 {
    let target = platform.target_words() as f64;
    (100.0 - (word_count as f64 - target).abs() * 0.8).max(0.0)
}
