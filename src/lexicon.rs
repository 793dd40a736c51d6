use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

pub const POSITIVE_WORDS: &[&str] = &[
    "great",
    "amazing",
    "love",
    "win",
    "wow",
    "good",
    "awesome",
    "best",
    "excited",
    "happy",
    "success",
    "ready",
    "incredible",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "bad", "hate", "problem", "fail", "sad", "angry", "worst", "bug", "issue", "late", "slow",
];

pub static STOPWORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "if", "in", "on", "for", "with", "to", "of", "at",
        "by", "from", "as", "is", "it", "this", "that", "we", "you", "our", "your", "be", "are",
        "was", "were", "us",
    ]
    .into_iter()
    .collect()
});

// Generic or spammy terms that make bad hashtags even when frequent.
pub static NOISE_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "http",
        "https",
        "www",
        "com",
        "views",
        "likes",
        "subscribers",
        "subscribe",
        "channel",
        "video",
        "click",
        "here",
        "watch",
        "today",
        "live",
        "breaking",
        "news",
        "2024",
        "2025",
        "official",
        "new",
        "latest",
        "link",
        "bio",
        "follow",
        "pls",
        "please",
    ]
    .into_iter()
    .collect()
});

pub const EMOJI_CUES: &[(&str, &str)] = &[
    ("\u{1F680}", "launch"),
    ("\u{1F525}", "trending"),
    ("\u{2728}", "tips"),
    ("\u{1F3AF}", "goals"),
    ("\u{1F4C8}", "growth"),
];

pub const FALLBACK_TAGS: &[&str] = &["#growth", "#marketing", "#strategy", "#content"];

pub static LINK_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https?://\S+").expect("link pattern"));

static CTA_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)join|sign up|comment|like|share|retweet|follow|subscribe|download|try")
        .expect("cta pattern")
});

static EXCLAMATION_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"!+").expect("exclamation runs"));

pub fn has_cta(text: &str) -> bool {
    CTA_PATTERN.is_match(text)
}

pub fn exclamation_runs(text: &str) -> usize {
    EXCLAMATION_RUNS.find_iter(text).count()
}

// The emoticon block plus the celebratory symbols used in marketing captions.
pub fn is_positive_emoji(ch: char) -> bool {
    matches!(ch, '\u{1F600}'..='\u{1F64F}')
        || matches!(
            ch,
            '\u{2728}' | '\u{1F680}' | '\u{1F525}' | '\u{1F4A5}' | '\u{1F4AF}' | '\u{1F973}'
                | '\u{1F44D}' | '\u{1F44F}'
        )
}
