use rand::Rng;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::lexicon::{EMOJI_CUES, FALLBACK_TAGS, NOISE_WORDS, STOPWORDS};
use crate::Platform;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Total width of the tie-breaking jitter band, centered on zero.
    pub jitter_span: f64,
    pub bigram_weight: f64,
    pub emoji_cue_score: f64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            jitter_span: 0.1,
            bigram_weight: 2.0,
            emoji_cue_score: 1.2,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HashtagCandidate {
    pub term: String,
    pub score: f64,
}

pub fn to_hashtag(term: &str) -> String {
    let cleaned: String = term
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect::<String>()
        .to_lowercase();
    if cleaned.is_empty() {
        String::new()
    } else {
        format!("#{cleaned}")
    }
}

fn valid_word(word: &str) -> bool {
    word.len() >= 3
        && !NOISE_WORDS.contains(word)
        && !STOPWORDS.contains(word)
        && !word.chars().all(|ch| ch.is_ascii_digit())
}

/// Ranks hashtag candidates from unigram and bigram frequency plus emoji cues,
/// with caller-injected jitter so regenerate calls can reshuffle ties.
/// `existing` holds tags already present in the caption, `exclude` the tags a
/// prior call suggested. Returns up to the platform cap, backfilled from the
/// generic fallback list to a floor of max(3, cap).
pub fn recommend(
    words: &[String],
    text: &str,
    platform: Platform,
    existing: &HashSet<String>,
    exclude: &HashSet<String>,
    config: &RecommenderConfig,
    rng: &mut impl Rng,
) -> Vec<String> {
    let mut candidates: Vec<HashtagCandidate> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for word in words.iter().filter(|w| valid_word(w)) {
        match index.get(word.as_str()) {
            Some(&slot) => candidates[slot].score += 1.0,
            None => {
                index.insert(word.clone(), candidates.len());
                candidates.push(HashtagCandidate {
                    term: word.clone(),
                    score: 1.0,
                });
            }
        }
    }

    // Bigram keys contain a space, so they never collide with unigrams.
    for pair in words.windows(2) {
        if valid_word(&pair[0]) && valid_word(&pair[1]) {
            let key = format!("{} {}", pair[0], pair[1]);
            match index.get(key.as_str()) {
                Some(&slot) => candidates[slot].score += config.bigram_weight,
                None => {
                    index.insert(key.clone(), candidates.len());
                    candidates.push(HashtagCandidate {
                        term: key,
                        score: config.bigram_weight,
                    });
                }
            }
        }
    }

    for candidate in candidates.iter_mut() {
        candidate.score += (rng.gen::<f64>() - 0.5) * config.jitter_span;
    }

    // Emoji cues are fixed-score hints and skip the jitter.
    for (emoji, cue) in EMOJI_CUES {
        for _ in text.matches(emoji) {
            candidates.push(HashtagCandidate {
                term: (*cue).to_string(),
                score: config.emoji_cue_score,
            });
        }
    }

    candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    let cap = platform.hashtag_cap();
    let mut chosen: Vec<String> = Vec::new();
    for candidate in &candidates {
        let tag = to_hashtag(&candidate.term);
        if tag.is_empty()
            || existing.contains(&tag)
            || exclude.contains(&tag)
            || chosen.contains(&tag)
        {
            continue;
        }
        chosen.push(tag);
        if chosen.len() >= cap {
            break;
        }
    }

    let floor = cap.max(3);
    for tag in FALLBACK_TAGS {
        if chosen.len() >= floor {
            break;
        }
        if existing.contains(*tag) || chosen.iter().any(|t| t == tag) {
            continue;
        }
        chosen.push((*tag).to_string());
    }

    chosen
}
