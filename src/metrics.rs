use serde::Serialize;

/// Words per minute for silent reading.
pub const READING_WPM: f64 = 150.0;
/// Spoken delivery rate for Arabic broadcast copy.
pub const BROADCAST_WORDS_PER_SECOND: f64 = 2.5;

const READABILITY_EASY_MAX: f64 = 15.0;
const READABILITY_MEDIUM_MAX: f64 = 25.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Readability {
    Easy,
    Medium,
    Advanced,
}

impl Readability {
    fn for_sentence_length(avg: f64) -> Self {
        if avg < READABILITY_EASY_MAX {
            Readability::Easy
        } else if avg < READABILITY_MEDIUM_MAX {
            Readability::Medium
        } else {
            Readability::Advanced
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BasicMetrics {
    pub word_count: usize,
    pub sentence_count: usize,
    pub char_count: usize,
    pub paragraph_count: usize,
    pub avg_sentence_length: f64,
    pub avg_word_length: f64,
    pub reading_time_minutes: f64,
    pub broadcast_time_seconds: u64,
    pub readability: Readability,
}

// ---------------------------------------------------------------------------
// Tokenization
// ---------------------------------------------------------------------------

pub fn words(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// Period-delimited fragments, trimmed, empties dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

pub fn paragraph_breaks(text: &str) -> usize {
    text.matches("\n\n").count()
}

/// One decimal place, ties to even.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

pub fn compute(text: &str) -> BasicMetrics {
    let words = words(text);
    let word_count = words.len();
    let sentence_count = sentences(text).len();

    let avg_sentence_length = if sentence_count > 0 {
        word_count as f64 / sentence_count as f64
    } else {
        0.0
    };
    let avg_word_length = if word_count > 0 {
        let total: usize = words.iter().map(|w| w.chars().count()).sum();
        total as f64 / word_count as f64
    } else {
        0.0
    };

    BasicMetrics {
        word_count,
        sentence_count,
        char_count: text.chars().count(),
        paragraph_count: paragraph_breaks(text) + 1,
        avg_sentence_length: round1(avg_sentence_length),
        avg_word_length: round1(avg_word_length),
        reading_time_minutes: round1(word_count as f64 / READING_WPM),
        broadcast_time_seconds: (word_count as f64 / BROADCAST_WORDS_PER_SECOND) as u64,
        readability: Readability::for_sentence_length(avg_sentence_length),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_has_one_paragraph_and_nothing_else() {
        let m = compute("");
        assert_eq!(m.word_count, 0);
        assert_eq!(m.sentence_count, 0);
        assert_eq!(m.char_count, 0);
        assert_eq!(m.paragraph_count, 1);
        assert_eq!(m.avg_sentence_length, 0.0);
        assert_eq!(m.avg_word_length, 0.0);
        assert_eq!(m.broadcast_time_seconds, 0);
    }

    #[test]
    fn counts_sentences_on_periods_only() {
        // the lone "." is still a whitespace token
        let m = compute("one two. three four five.  . six");
        assert_eq!(m.word_count, 7);
        assert_eq!(m.sentence_count, 3);
        assert_eq!(m.avg_sentence_length, 2.3);
    }

    #[test]
    fn char_count_uses_characters_not_bytes() {
        let m = compute("مرحبا");
        assert_eq!(m.char_count, 5);
        assert_eq!(m.avg_word_length, 5.0);
    }

    #[test]
    fn rounding_ties_go_to_even() {
        // 9 chars over 4 words = 2.25
        assert_eq!(compute("ab cd ef abc").avg_word_length, 2.2);
        assert_eq!(round1(0.25), 0.2);
        assert_eq!(round1(91.58), 91.6);
    }

    #[test]
    fn broadcast_time_floors() {
        let text = vec!["word"; 7].join(" ");
        let m = compute(&text);
        // 7 / 2.5 = 2.8
        assert_eq!(m.broadcast_time_seconds, 2);
        assert_eq!(m.reading_time_minutes, 0.0);
    }
}
