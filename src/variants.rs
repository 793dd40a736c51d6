use crate::lexicon;
use crate::tokenize::split_sentences;
use crate::{AnalysisResult, CaptionVariants, Platform};

/// Rewrites the caption into three templates. Every variant ends with a
/// call-to-action and the top suggested hashtags.
pub fn synthesize(text: &str, platform: Platform, result: &AnalysisResult) -> CaptionVariants {
    let sentences = split_sentences(text);
    let mut base = sentences
        .iter()
        .take(2)
        .cloned()
        .collect::<Vec<_>>()
        .join(". ");
    if !sentences.is_empty() {
        base.push('.');
    }

    let tags = result
        .hashtag_suggestions
        .iter()
        .take(3)
        .cloned()
        .collect::<Vec<_>>()
        .join(" ");

    let keyword = |slot: usize, fallback: &str| {
        result
            .keywords
            .get(slot)
            .map(|k| k.term.clone())
            .unwrap_or_else(|| fallback.to_string())
    };
    let first = keyword(0, "results");
    let second = keyword(1, "growth");
    let third = keyword(2, "tips");

    let hook = match result.keywords.first() {
        Some(top) => format!("\u{1F680} {} \u{2014}", capitalize(&top.term)),
        None => "\u{1F680}".to_string(),
    };

    let concise = finish(
        &collapse_whitespace(&format!("{hook} {base}")),
        platform,
        &tags,
    );
    let benefit = finish(
        &format!("Want better {first}? Here's how we approach {second}. {base}"),
        platform,
        &tags,
    );
    let list = finish(
        &format!("{first} \u{2022} {second} \u{2022} {third} \u{2014} {base}"),
        platform,
        &tags,
    );

    CaptionVariants {
        concise,
        benefit,
        list,
    }
}

fn finish(body: &str, platform: Platform, tags: &str) -> String {
    let with_cta = ensure_cta(body, platform);
    if tags.is_empty() {
        with_cta
    } else {
        format!("{with_cta} {tags}")
    }
}

fn ensure_cta(body: &str, platform: Platform) -> String {
    if lexicon::has_cta(body) {
        body.to_string()
    } else {
        format!("{body} {}.", platform.cta_phrase())
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn collapse_whitespace(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}
