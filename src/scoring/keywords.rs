use std::collections::HashMap;

use crate::lexicon::STOPWORDS;
use crate::Keyword;

/// Frequency ranking of non-stopword terms. The sort is stable, so equally
/// frequent terms keep their first-seen order.
pub fn top_keywords(words: &[String], limit: usize) -> Vec<Keyword> {
    let mut ranked: Vec<Keyword> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for word in words {
        if STOPWORDS.contains(word.as_str()) {
            continue;
        }
        match index.get(word.as_str()) {
            Some(&slot) => ranked[slot].count += 1,
            None => {
                index.insert(word.as_str(), ranked.len());
                ranked.push(Keyword {
                    term: word.clone(),
                    count: 1,
                });
            }
        }
    }

    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(limit);
    ranked
}
