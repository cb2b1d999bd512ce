use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::lexicon::{any_present, QUOTE_CHARS, SOURCE_WORDS, TOKEN_PUNCTUATION, TOPIC_KEYWORDS};
use crate::metrics::words;

const TOP_WORDS: usize = 10;
/// Tokens must be longer than this (in characters, before trimming) to count.
const MIN_FREQUENCY_TOKEN_CHARS: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentProfile {
    pub most_common_words: Vec<WordCount>,
    pub topics_covered: Vec<&'static str>,
    pub has_quotes: bool,
    pub mentions_sources: bool,
    pub diversity_score: f64,
}

/// Most frequent tokens, highest count first. Equal counts keep the order in
/// which the words first appeared.
pub fn most_common_words(text: &str, limit: usize) -> Vec<WordCount> {
    let mut order: Vec<WordCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in words(text) {
        if token.chars().count() <= MIN_FREQUENCY_TOKEN_CHARS {
            continue;
        }
        let word = token.trim_matches(TOKEN_PUNCTUATION);
        match index.get(word) {
            Some(&i) => order[i].count += 1,
            None => {
                index.insert(word, order.len());
                order.push(WordCount {
                    word: word.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so first-seen order survives among ties
    order.sort_by(|a, b| b.count.cmp(&a.count));
    order.truncate(limit);
    order
}

pub fn topics_covered(text: &str) -> Vec<&'static str> {
    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| any_present(text, keywords))
        .map(|(label, _)| *label)
        .collect()
}

/// Type/token ratio over whitespace tokens, in `[0, 1]`.
pub fn diversity_score(text: &str) -> f64 {
    let tokens = words(text);
    if tokens.is_empty() {
        return 0.0;
    }
    let distinct: HashSet<&str> = tokens.iter().copied().collect();
    distinct.len() as f64 / tokens.len() as f64
}

pub fn analyze(text: &str) -> ContentProfile {
    ContentProfile {
        most_common_words: most_common_words(text, TOP_WORDS),
        topics_covered: topics_covered(text),
        has_quotes: text.contains(QUOTE_CHARS),
        mentions_sources: any_present(text, SOURCE_WORDS),
        diversity_score: diversity_score(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_strips_punctuation_and_skips_short_tokens() {
        let top = most_common_words("المدينة، المدينة. المدينة: في في في", 10);
        // "المدينة،" ends in an Arabic comma which is not stripped
        assert_eq!(
            top,
            vec![
                WordCount {
                    word: "المدينة".to_string(),
                    count: 2
                },
                WordCount {
                    word: "المدينة،".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn ties_keep_first_occurrence_order() {
        let top = most_common_words("beta alpha gamma alpha beta gamma", 10);
        let order: Vec<&str> = top.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(order, vec!["beta", "alpha", "gamma"]);
    }

    #[test]
    fn topics_follow_declaration_order() {
        let text = "استثمار في السياحة وزيارة المواقع ذات التاريخ";
        assert_eq!(topics_covered(text), vec!["history", "tourism", "economy"]);
    }

    #[test]
    fn diversity_is_a_type_token_ratio() {
        assert_eq!(diversity_score(""), 0.0);
        assert_eq!(diversity_score("a a b b"), 0.5);
        assert_eq!(diversity_score("a b c"), 1.0);
    }

    #[test]
    fn quotes_and_sources() {
        let p = analyze("قال \"المدير\" وفق التقرير");
        assert!(p.has_quotes);
        assert!(p.mentions_sources);
        assert!(!analyze("نص عادي").has_quotes);
    }
}
