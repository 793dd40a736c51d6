use std::collections::HashSet;

use caption_coach::extract::{PlainTextExtractor, TextExtractor};
use caption_coach::scoring::estimate_syllables;
use caption_coach::{analyze, Platform};

fn no_exclusions() -> HashSet<String> {
    HashSet::new()
}

#[test]
fn scores_stay_within_bounds() {
    let long = "word ".repeat(400);
    let samples = [
        "",
        "amazing amazing amazing love love win wow best!!!! \u{1F680}\u{1F525}\u{1F4AF}",
        "bad hate problem fail sad angry worst bug issue late slow",
        "#a #b #c #d one",
        long.as_str(),
    ];

    for text in samples {
        for platform in [Platform::Twitter, Platform::Instagram, Platform::Youtube] {
            let result = analyze(text, platform, &no_exclusions(), 0);
            assert!(result.sentiment <= 100);
            assert!(result.clarity <= 100);
            assert!(result.hashtag_density <= 100);
            assert!(result.engagement <= 100);
            for point in &result.radar {
                assert!(point.value <= 100, "radar {} out of range", point.dimension);
            }
        }
    }
}

#[test]
fn short_quote_is_neutral_positive() {
    let text = "Consistency beats intensity. Show up, even when it's not perfect. \u{2728}";
    let result = analyze(text, Platform::Twitter, &no_exclusions(), 0);

    assert!(!result.cta);
    assert_eq!(result.hashtags, 0);
    // Base 50 plus one positive emoji.
    assert_eq!(result.sentiment, 55);
}

#[test]
fn sentiment_reacts_to_lexicon_words() {
    let upbeat = analyze("great amazing love", Platform::Twitter, &no_exclusions(), 0);
    let gloomy = analyze("bad worst fail", Platform::Twitter, &no_exclusions(), 0);

    assert_eq!(upbeat.sentiment, 80);
    assert_eq!(gloomy.sentiment, 20);
}

#[test]
fn keyword_ranking_prefers_frequency() {
    let text = "growth growth growth marketing marketing";
    let result = analyze(text, Platform::Linkedin, &no_exclusions(), 0);

    assert_eq!(result.keywords[0].term, "growth");
    assert_eq!(result.keywords[0].count, 3);

    let suggestions = &result.hashtag_suggestions;
    assert!(suggestions.iter().any(|t| t == "#growth"));
    assert!(suggestions.iter().any(|t| t == "#growthmarketing"));
}

#[test]
fn exact_target_length_scores_full_fit() {
    let text = (0..120).map(|i| format!("item{i}")).collect::<Vec<_>>().join(" ");
    let result = analyze(&text, Platform::Twitter, &no_exclusions(), 0);

    let fit = result
        .radar
        .iter()
        .find(|p| p.dimension == "Length")
        .expect("length dimension");
    assert_eq!(fit.value, 100);
}

#[test]
fn empty_input_degrades_gracefully() {
    let result = analyze("", Platform::Twitter, &no_exclusions(), 0);

    assert_eq!(result.word_count, 0);
    assert_eq!(result.hashtag_density, 0);
    assert_eq!(result.sentiment, 50);
    assert_eq!(
        result.hashtag_suggestions,
        vec!["#growth", "#marketing", "#strategy"]
    );
}

#[test]
fn identical_inputs_reproduce_exactly() {
    let text = "Launch week! We shipped dashboards, alerts, and a faster importer.";
    let first = analyze(text, Platform::Instagram, &no_exclusions(), 7);
    let second = analyze(text, Platform::Instagram, &no_exclusions(), 7);

    assert_eq!(first.sentiment, second.sentiment);
    assert_eq!(first.clarity, second.clarity);
    assert_eq!(first.engagement, second.engagement);
    assert_eq!(first.keywords, second.keywords);
    assert_eq!(first.hashtag_suggestions, second.hashtag_suggestions);
}

#[test]
fn counts_links_hashtags_and_mentions() {
    let text = "Check https://example.com/page now #launch @me";
    let result = analyze(text, Platform::Twitter, &no_exclusions(), 0);

    assert_eq!(result.links, 1);
    assert_eq!(result.hashtags, 1);
    assert_eq!(result.mentions, 1);
    // Link text is stripped before word counting.
    assert_eq!(result.word_count, 2);
}

#[test]
fn cta_detection_matches_verb_list() {
    let with_cta = analyze(
        "Download the guide and tell a friend",
        Platform::Twitter,
        &no_exclusions(),
        0,
    );
    let without_cta = analyze(
        "The guide covers all five chapters",
        Platform::Twitter,
        &no_exclusions(),
        0,
    );

    assert!(with_cta.cta);
    assert!(!without_cta.cta);

    let cta_radar = with_cta.radar.iter().find(|p| p.dimension == "CTA").unwrap();
    assert_eq!(cta_radar.value, 100);
    let no_cta_radar = without_cta.radar.iter().find(|p| p.dimension == "CTA").unwrap();
    assert_eq!(no_cta_radar.value, 30);
}

#[test]
fn extractor_failures_name_the_cause() {
    let err = PlainTextExtractor
        .extract(b"%PDF-1.4", "application/pdf")
        .unwrap_err();
    assert!(err.contains("application/pdf"));

    let err = PlainTextExtractor
        .extract(&[0xff, 0xfe], "text/plain")
        .unwrap_err();
    assert!(err.contains("utf-8"));

    let text = PlainTextExtractor
        .extract(b"  five hooks that worked  ", "text/plain")
        .unwrap();
    assert_eq!(text, "five hooks that worked");
}

#[test]
fn syllable_estimates() {
    assert_eq!(estimate_syllables("love"), 1);
    assert_eq!(estimate_syllables("amazing"), 3);
    assert_eq!(estimate_syllables("rhythm"), 1);
    assert_eq!(estimate_syllables("be"), 1);
}
