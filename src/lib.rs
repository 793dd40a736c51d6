pub mod config;
pub mod extract;
pub mod hashtags;
pub mod lexicon;
pub mod scoring;
pub mod tips;
pub mod tokenize;
pub mod variants;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::collections::HashSet;

use crate::config::EngineConfig;
use crate::scoring::{clamp_score, clarity_score, length_fit, top_keywords, EngagementScorer, SentimentScorer};
use crate::tokenize::tokenize;

pub const MAX_SUGGESTIONS: usize = 6;
pub const MAX_KEYWORDS: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Twitter,
    Instagram,
    Tiktok,
    Youtube,
    Linkedin,
}

impl Platform {
    pub fn from_str(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "twitter" | "x" => Some(Platform::Twitter),
            "instagram" | "ig" => Some(Platform::Instagram),
            "tiktok" => Some(Platform::Tiktok),
            "youtube" | "yt" => Some(Platform::Youtube),
            "linkedin" => Some(Platform::Linkedin),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::Tiktok => "tiktok",
            Platform::Youtube => "youtube",
            Platform::Linkedin => "linkedin",
        }
    }

    pub fn hashtag_cap(self) -> usize {
        match self {
            Platform::Twitter => 3,
            Platform::Instagram => 7,
            Platform::Tiktok => 5,
            Platform::Youtube => 5,
            Platform::Linkedin => 5,
        }
    }

    pub fn target_words(self) -> usize {
        match self {
            Platform::Twitter => 120,
            Platform::Instagram => 140,
            Platform::Tiktok => 120,
            Platform::Youtube => 200,
            Platform::Linkedin => 180,
        }
    }

    pub fn best_time(self) -> &'static str {
        match self {
            Platform::Twitter => "Tue\u{2013}Thu 9\u{2013}11am",
            Platform::Instagram => "Mon\u{2013}Fri 11am\u{2013}1pm",
            Platform::Tiktok => "Tue\u{2013}Thu 6\u{2013}9pm",
            Platform::Youtube => "Thu\u{2013}Sun 12\u{2013}3pm",
            Platform::Linkedin => "Tue\u{2013}Thu 8\u{2013}10am",
        }
    }

    pub fn cta_phrase(self) -> &'static str {
        match self {
            Platform::Twitter => "Comment 'yes' for details",
            Platform::Instagram => "Save this and share with a friend",
            Platform::Tiktok => "Follow for more and drop a 'yes' if you want the link",
            Platform::Youtube => "Subscribe for more and comment your thoughts",
            Platform::Linkedin => "Comment 'interested' for details",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct RadarPoint {
    pub dimension: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Keyword {
    pub term: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub word_count: usize,
    pub sentiment: u32,
    pub clarity: u32,
    pub hashtags: usize,
    pub mentions: usize,
    pub links: usize,
    pub hashtag_density: u32,
    pub cta: bool,
    pub engagement: u32,
    pub radar: Vec<RadarPoint>,
    pub keywords: Vec<Keyword>,
    pub best_time: &'static str,
    pub hashtag_suggestions: Vec<String>,
    /// True when the exclusion set covered every candidate and the recommender
    /// had to retry with a fresh pool.
    pub pool_reset: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaptionVariants {
    pub concise: String,
    pub benefit: String,
    pub list: String,
}

/// Analyzes a caption with default weights and a seed derived from the text
/// and the caller's regenerate nonce, so identical inputs reproduce exactly.
pub fn analyze(
    text: &str,
    platform: Platform,
    exclude: &HashSet<String>,
    nonce: u64,
) -> AnalysisResult {
    let config = EngineConfig::default();
    let mut rng = seeded_rng(text, nonce);
    analyze_with(text, platform, exclude, &config, &mut rng)
}

pub fn analyze_with(
    text: &str,
    platform: Platform,
    exclude: &HashSet<String>,
    config: &EngineConfig,
    rng: &mut impl Rng,
) -> AnalysisResult {
    let stream = tokenize(text);
    let word_count = stream.words.len();

    let sentiment = SentimentScorer::new(config.sentiment.clone()).score(&stream.words, text);
    let clarity = clarity_score(&stream.words, stream.sentences.len());
    let hashtag_density =
        clamp_score(stream.hashtags.len() as f64 / word_count.max(1) as f64 * 600.0);
    let cta = lexicon::has_cta(text);
    let fit = length_fit(word_count, platform);
    let engagement = EngagementScorer::new(config.engagement.clone()).score(
        sentiment,
        clarity,
        cta,
        stream.hashtags.len(),
        fit,
    );

    let keywords = top_keywords(&stream.words, MAX_KEYWORDS);

    let existing: HashSet<String> = stream.hashtags.iter().map(|h| h.to_lowercase()).collect();
    let mut suggestions = hashtags::recommend(
        &stream.words,
        text,
        platform,
        &existing,
        exclude,
        &config.recommender,
        rng,
    );
    let mut pool_reset = false;
    if suggestions.is_empty() {
        // Pool exhausted: reset the exclusions and try once more.
        pool_reset = !exclude.is_empty();
        suggestions = hashtags::recommend(
            &stream.words,
            text,
            platform,
            &existing,
            &HashSet::new(),
            &config.recommender,
            rng,
        );
    }
    suggestions.truncate(MAX_SUGGESTIONS);

    let radar = vec![
        RadarPoint {
            dimension: "Emotion",
            value: sentiment.round() as u32,
        },
        RadarPoint {
            dimension: "Clarity",
            value: clarity.round() as u32,
        },
        RadarPoint {
            dimension: "Hashtags",
            value: hashtag_density.round() as u32,
        },
        RadarPoint {
            dimension: "CTA",
            value: if cta { 100 } else { 30 },
        },
        RadarPoint {
            dimension: "Length",
            value: fit.round() as u32,
        },
    ];

    AnalysisResult {
        word_count,
        sentiment: sentiment.round() as u32,
        clarity: clarity.round() as u32,
        hashtags: stream.hashtags.len(),
        mentions: stream.mentions.len(),
        links: stream.links.len(),
        hashtag_density: hashtag_density.round() as u32,
        cta,
        engagement,
        radar,
        keywords,
        best_time: platform.best_time(),
        hashtag_suggestions: suggestions,
        pool_reset,
    }
}

pub fn synthesize_variants(
    text: &str,
    platform: Platform,
    result: &AnalysisResult,
) -> CaptionVariants {
    variants::synthesize(text, platform, result)
}

pub fn seeded_rng(text: &str, nonce: u64) -> StdRng {
    StdRng::seed_from_u64(stable_hash64(text) ^ nonce)
}

fn stable_hash64(value: &str) -> u64 {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(value.as_bytes());
    let digest = hasher.finalize();
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(bytes)
}
