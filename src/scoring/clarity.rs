use crate::scoring::clamp_score;

/// Vowel-group runs after dropping a trailing silent "e", minimum one.
pub fn estimate_syllables(word: &str) -> usize {
    let trimmed = word.strip_suffix('e').unwrap_or(word);
    let mut groups = 0usize;
    let mut in_group = false;
    for ch in trimmed.chars() {
        let vowel = matches!(ch, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }
    groups.max(1)
}

/// Flesch reading ease shifted by +10 and clamped to [0,100]. Denominators are
/// floored to 1 so empty input stays well-defined.
pub fn clarity_score(words: &[String], sentence_count: usize) -> f64 {
    let word_count = words.len();
    let sentences = sentence_count.max(1) as f64;
    let syllables: usize = words.iter().map(|w| estimate_syllables(w)).sum();

    let ease = 206.835
        - 1.015 * (word_count as f64 / sentences)
        - 84.6 * (syllables as f64 / word_count.max(1) as f64);

    clamp_score(ease + 10.0)
}
