use serde::Serialize;

use crate::metrics::round1;
use crate::recommend::Signals;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

struct Weights {
    length_ideal_min: usize,
    length_ideal_max: usize,
    length_near_min: usize,
    length_near_max: usize,
    length_ideal_points: f64,
    length_near_points: f64,
    length_other_points: f64,
    style_points_per_indicator: f64,
    style_max: f64,
    objectivity_factor: f64,
    data_points: f64,
    dates_points: f64,
    sources_points: f64,
    paragraph_min: usize,
    paragraph_points: f64,
    well_structured_points: f64,
    diversity_factor: f64,
    score_max: f64,
}

static W: Weights = Weights {
    length_ideal_min: 200,
    length_ideal_max: 500,
    length_near_min: 150,
    length_near_max: 600,
    length_ideal_points: 20.0,
    length_near_points: 15.0,
    length_other_points: 10.0,
    style_points_per_indicator: 3.0,
    style_max: 25.0,
    objectivity_factor: 0.15,
    data_points: 10.0,
    dates_points: 5.0,
    sources_points: 10.0,
    paragraph_min: 3,
    paragraph_points: 5.0,
    well_structured_points: 5.0,
    diversity_factor: 5.0,
    score_max: 100.0,
};

pub const MAX_SCORE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    Excellent,
    VeryGood,
    Good,
    Acceptable,
    NeedsImprovement,
}

/// Lower bound of each tier, best first.
static RATING_TIERS: &[(f64, Rating)] = &[
    (90.0, Rating::Excellent),
    (75.0, Rating::VeryGood),
    (60.0, Rating::Good),
    (50.0, Rating::Acceptable),
];

impl Rating {
    pub fn for_score(score: f64) -> Self {
        RATING_TIERS
            .iter()
            .find(|(min, _)| score >= *min)
            .map(|(_, rating)| *rating)
            .unwrap_or(Rating::NeedsImprovement)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallScore {
    pub score: f64,
    pub rating: Rating,
    pub max_score: u32,
}

// ---------------------------------------------------------------------------
// Terms
// ---------------------------------------------------------------------------

pub fn length_term(word_count: usize) -> f64 {
    if (W.length_ideal_min..=W.length_ideal_max).contains(&word_count) {
        W.length_ideal_points
    } else if (W.length_near_min..W.length_ideal_min).contains(&word_count)
        || (W.length_ideal_max + 1..=W.length_near_max).contains(&word_count)
    {
        W.length_near_points
    } else {
        W.length_other_points
    }
}

pub fn style_term(journalist_score: usize) -> f64 {
    (journalist_score as f64 * W.style_points_per_indicator).min(W.style_max)
}

fn objectivity_term(objectivity: u32) -> f64 {
    objectivity as f64 * W.objectivity_factor
}

fn data_term(uses_data: bool, has_dates: bool) -> f64 {
    let mut points = 0.0;
    if uses_data {
        points += W.data_points;
    }
    if has_dates {
        points += W.dates_points;
    }
    points
}

fn structure_term(paragraph_count: usize, well_structured: bool) -> f64 {
    let mut points = 0.0;
    if paragraph_count >= W.paragraph_min {
        points += W.paragraph_points;
    }
    if well_structured {
        points += W.well_structured_points;
    }
    points
}

fn sources_term(mentions_sources: bool) -> f64 {
    if mentions_sources {
        W.sources_points
    } else {
        0.0
    }
}

/// Unrounded; only the final sum is rounded.
fn diversity_term(diversity_score: f64) -> f64 {
    diversity_score * W.diversity_factor
}

pub fn score(signals: &Signals) -> OverallScore {
    let Signals {
        basic,
        style,
        content,
    } = *signals;

    let sum = length_term(basic.word_count)
        + style_term(style.journalist_score)
        + objectivity_term(style.objectivity)
        + data_term(style.uses_data, style.has_dates)
        + sources_term(content.mentions_sources)
        + structure_term(basic.paragraph_count, style.well_structured)
        + diversity_term(content.diversity_score);

    let score = round1(sum).min(W.score_max);
    OverallScore {
        score,
        rating: Rating::for_score(score),
        max_score: MAX_SCORE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentProfile;
    use crate::metrics::{BasicMetrics, Readability};
    use crate::style::{StyleProfile, StyleType, Tone};

    fn basic(word_count: usize, paragraph_count: usize) -> BasicMetrics {
        BasicMetrics {
            word_count,
            sentence_count: 1,
            char_count: word_count * 5,
            paragraph_count,
            avg_sentence_length: word_count as f64,
            avg_word_length: 5.0,
            reading_time_minutes: 0.0,
            broadcast_time_seconds: 0,
            readability: Readability::Easy,
        }
    }

    fn style(journalist_score: usize, objectivity: u32, flags: bool) -> StyleProfile {
        StyleProfile {
            style_type: StyleType::ProfessionalJournalistic,
            journalist_score,
            objectivity,
            uses_data: flags,
            numbers_count: usize::from(flags),
            has_dates: flags,
            well_structured: flags,
            tone: Tone::Formal,
        }
    }

    fn content(mentions_sources: bool, diversity_score: f64) -> ContentProfile {
        ContentProfile {
            most_common_words: Vec::new(),
            topics_covered: Vec::new(),
            has_quotes: false,
            mentions_sources,
            diversity_score,
        }
    }

    fn total(basic: &BasicMetrics, style: &StyleProfile, content: &ContentProfile) -> OverallScore {
        score(&Signals {
            basic,
            style,
            content,
        })
    }

    #[test]
    fn length_bands() {
        assert_eq!(length_term(0), 10.0);
        assert_eq!(length_term(149), 10.0);
        assert_eq!(length_term(150), 15.0);
        assert_eq!(length_term(199), 15.0);
        assert_eq!(length_term(200), 20.0);
        assert_eq!(length_term(500), 20.0);
        assert_eq!(length_term(501), 15.0);
        assert_eq!(length_term(600), 15.0);
        assert_eq!(length_term(601), 10.0);
    }

    #[test]
    fn style_term_caps_at_25() {
        assert_eq!(style_term(4), 12.0);
        assert_eq!(style_term(8), 24.0);
        assert_eq!(style_term(9), 25.0);
    }

    #[test]
    fn rating_tiers() {
        assert_eq!(Rating::for_score(100.0), Rating::Excellent);
        assert_eq!(Rating::for_score(90.0), Rating::Excellent);
        assert_eq!(Rating::for_score(89.9), Rating::VeryGood);
        assert_eq!(Rating::for_score(60.0), Rating::Good);
        assert_eq!(Rating::for_score(50.0), Rating::Acceptable);
        assert_eq!(Rating::for_score(49.9), Rating::NeedsImprovement);
    }

    #[test]
    fn data_term_adds_numbers_and_dates() {
        assert_eq!(data_term(false, false), 0.0);
        assert_eq!(data_term(true, false), 10.0);
        assert_eq!(data_term(false, true), 5.0);
        assert_eq!(data_term(true, true), 15.0);
    }

    #[test]
    fn structure_term_needs_three_paragraphs() {
        assert_eq!(structure_term(2, false), 0.0);
        assert_eq!(structure_term(3, false), 5.0);
        assert_eq!(structure_term(1, true), 5.0);
        assert_eq!(structure_term(4, true), 10.0);
    }

    #[test]
    fn diversity_contributes_up_to_five() {
        assert_eq!(diversity_term(0.0), 0.0);
        assert_eq!(diversity_term(1.0), 5.0);

        // 10 + 0 + 15 + 0 + 0 + 0 + 0.58
        let b = basic(10, 1);
        let s = style(0, 100, false);
        let c = content(false, 0.116);
        assert_eq!(total(&b, &s, &c).score, 25.6);
    }

    #[test]
    fn every_term_maxed_reaches_the_cap() {
        let b = basic(300, 5);
        let s = style(12, 100, true);
        let c = content(true, 1.0);
        let overall = total(&b, &s, &c);
        assert_eq!(overall.score, 100.0);
        assert_eq!(overall.rating, Rating::Excellent);
        assert_eq!(overall.max_score, MAX_SCORE);
    }
}
