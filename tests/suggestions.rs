use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use caption_coach::hashtags::{recommend, to_hashtag, RecommenderConfig};
use caption_coach::tips::improvement_tips;
use caption_coach::tokenize::tokenize;
use caption_coach::{analyze, lexicon, synthesize_variants, Platform};

fn no_exclusions() -> HashSet<String> {
    HashSet::new()
}

const RICH_TEXT: &str = "alpha bravo charlie delta echo foxtrot golf hotel india juliet kilo lima mike november oscar papa";

#[test]
fn regeneration_never_repeats_prior_suggestions() {
    let first = analyze(RICH_TEXT, Platform::Instagram, &no_exclusions(), 0);
    assert!(!first.hashtag_suggestions.is_empty());

    let exclude: HashSet<String> = first.hashtag_suggestions.iter().cloned().collect();
    let second = analyze(RICH_TEXT, Platform::Instagram, &exclude, 1);

    assert!(!second.pool_reset);
    for tag in &second.hashtag_suggestions {
        assert!(!exclude.contains(tag), "{tag} was suggested twice");
    }
}

#[test]
fn exhausted_pool_resets_and_retries() {
    // The caption already carries every fallback tag, and the exclusion set
    // covers everything its words can produce.
    let text = "growth tactics #growth #marketing #strategy #content";
    let exclude: HashSet<String> = ["#tactics", "#growthtactics"]
        .into_iter()
        .map(str::to_string)
        .collect();

    let result = analyze(text, Platform::Twitter, &exclude, 0);

    assert!(result.pool_reset);
    assert!(!result.hashtag_suggestions.is_empty());
}

#[test]
fn suggestions_respect_platform_cap_and_global_limit() {
    for (platform, cap) in [
        (Platform::Twitter, 3),
        (Platform::Instagram, 7),
        (Platform::Tiktok, 5),
    ] {
        let result = analyze(RICH_TEXT, platform, &no_exclusions(), 0);
        let limit = cap.min(6);
        assert!(result.hashtag_suggestions.len() <= limit);

        let unique: HashSet<&String> = result.hashtag_suggestions.iter().collect();
        assert_eq!(unique.len(), result.hashtag_suggestions.len());
    }
}

#[test]
fn tags_already_in_caption_are_not_suggested() {
    let result = analyze(
        "growth is great #growth",
        Platform::Twitter,
        &no_exclusions(),
        0,
    );

    assert!(!result.hashtag_suggestions.iter().any(|t| t == "#growth"));
    assert!(result.hashtag_suggestions.iter().any(|t| t == "#great"));
    assert_eq!(result.hashtag_suggestions.len(), 3);
}

#[test]
fn recommend_is_deterministic_for_a_fixed_seed() {
    let stream = tokenize(RICH_TEXT);
    let config = RecommenderConfig::default();

    let mut first_rng = StdRng::seed_from_u64(42);
    let first = recommend(
        &stream.words,
        RICH_TEXT,
        Platform::Tiktok,
        &HashSet::new(),
        &HashSet::new(),
        &config,
        &mut first_rng,
    );

    let mut second_rng = StdRng::seed_from_u64(42);
    let second = recommend(
        &stream.words,
        RICH_TEXT,
        Platform::Tiktok,
        &HashSet::new(),
        &HashSet::new(),
        &config,
        &mut second_rng,
    );

    assert_eq!(first, second);
}

#[test]
fn emoji_cues_outrank_single_occurrence_words() {
    // One valid word, so no bigram can form; the 1.2 cue beats 1.0 plus
    // jitter deterministically.
    let text = "launched \u{1F680}";
    let stream = tokenize(text);
    let mut rng = StdRng::seed_from_u64(1);

    let tags = recommend(
        &stream.words,
        text,
        Platform::Twitter,
        &HashSet::new(),
        &HashSet::new(),
        &RecommenderConfig::default(),
        &mut rng,
    );

    assert_eq!(tags[0], "#launch");
    assert!(tags.contains(&"#launched".to_string()));
}

#[test]
fn hashtagify_strips_punctuation_and_spaces() {
    assert_eq!(to_hashtag("growth marketing"), "#growthmarketing");
    assert_eq!(to_hashtag("It's-Great"), "#itsgreat");
    assert_eq!(to_hashtag("!!!"), "");
}

#[test]
fn variants_carry_cta_and_tags() {
    let text = "Morning routines shape the day. Start with water and sunlight.";
    let result = analyze(text, Platform::Youtube, &no_exclusions(), 0);
    assert!(!result.cta);

    let variants = synthesize_variants(text, Platform::Youtube, &result);

    for caption in [&variants.concise, &variants.benefit, &variants.list] {
        assert!(lexicon::has_cta(caption), "missing CTA in {caption}");
        assert!(caption.contains(&result.hashtag_suggestions[0]));
    }

    assert!(variants.concise.starts_with("\u{1F680} Morning \u{2014}"));
    assert!(variants
        .benefit
        .starts_with("Want better morning? Here's how we approach routines."));
}

#[test]
fn variant_keywords_fall_back_when_text_is_thin() {
    let text = "the and or but";
    let result = analyze(text, Platform::Twitter, &no_exclusions(), 0);
    assert!(result.keywords.is_empty());

    let variants = synthesize_variants(text, Platform::Twitter, &result);

    assert!(variants.benefit.contains("Want better results?"));
    assert!(variants.benefit.contains("approach growth"));
    assert!(variants.list.contains("tips"));
    assert!(variants.benefit.contains("Comment 'yes' for details"));
}

#[test]
fn tips_follow_score_thresholds() {
    let result = analyze("bad day", Platform::Twitter, &no_exclusions(), 0);
    let tips = improvement_tips(&result);

    assert!(tips.iter().any(|t| t.contains("positive language")));
    assert!(tips.iter().any(|t| t.contains("call-to-action")));
    assert!(tips.last().unwrap().contains(result.best_time));
}
