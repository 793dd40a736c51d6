use crate::lexicon::LINK_PATTERN;

#[derive(Debug, Clone)]
pub struct TokenStream {
    pub words: Vec<String>,
    pub hashtags: Vec<String>,
    pub mentions: Vec<String>,
    pub links: Vec<String>,
    pub sentences: Vec<String>,
}

/// Splits a caption into lowercase tokens plus the hashtag, mention, link and
/// sentence views the scorers work on. Accepts any string; empty input yields
/// empty streams.
pub fn tokenize(text: &str) -> TokenStream {
    let lowered = text.to_lowercase();
    let stripped = LINK_PATTERN.replace_all(&lowered, " ");
    let cleaned: String = stripped
        .chars()
        .map(|ch| match ch {
            'a'..='z' | '0'..='9' | '#' | '@' => ch,
            ch if ch.is_whitespace() => ch,
            _ => ' ',
        })
        .collect();

    let mut words = Vec::new();
    let mut hashtags = Vec::new();
    let mut mentions = Vec::new();
    for token in cleaned.split_whitespace() {
        if token.starts_with('#') {
            hashtags.push(token.to_string());
        } else if token.starts_with('@') {
            mentions.push(token.to_string());
        } else {
            words.push(token.to_string());
        }
    }

    // Links and sentences come from the original text, not the stripped form.
    let links = LINK_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect();
    let sentences = split_sentences(text);

    TokenStream {
        words,
        hashtags,
        mentions,
        links,
        sentences,
    }
}

pub fn split_sentences(text: &str) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
