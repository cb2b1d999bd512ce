use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};

use crate::lexicon::{
    count_present, FORMAL_WORDS, INFORMAL_WORDS, JOURNALIST_INDICATORS, PERSONAL_PRONOUNS,
};
use crate::metrics::paragraph_breaks;

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());
static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

const PROFESSIONAL_MIN_INDICATORS: usize = 5;
const OBJECTIVITY_PENALTY_PER_PRONOUN: u32 = 10;
const WELL_STRUCTURED_MIN_BREAKS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StyleType {
    #[serde(rename = "professional journalistic")]
    ProfessionalJournalistic,
    #[serde(rename = "generic")]
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Formal,
    Informal,
    Balanced,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyleProfile {
    pub style_type: StyleType,
    pub journalist_score: usize,
    /// Percentage in `0..=100`, rendered as `"90%"` on output.
    #[serde(serialize_with = "as_percentage")]
    pub objectivity: u32,
    pub uses_data: bool,
    pub numbers_count: usize,
    pub has_dates: bool,
    pub well_structured: bool,
    pub tone: Tone,
}

fn as_percentage<S: Serializer>(value: &u32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value}%"))
}

pub fn detect_tone(text: &str) -> Tone {
    let formal = count_present(text, FORMAL_WORDS);
    let informal = count_present(text, INFORMAL_WORDS);

    if formal > informal * 2 {
        Tone::Formal
    } else if informal > formal {
        Tone::Informal
    } else {
        Tone::Balanced
    }
}

pub fn objectivity(text: &str) -> u32 {
    let found = count_present(text, PERSONAL_PRONOUNS) as u32;
    100u32.saturating_sub(found * OBJECTIVITY_PENALTY_PER_PRONOUN)
}

pub fn classify(text: &str) -> StyleProfile {
    let journalist_score = count_present(text, JOURNALIST_INDICATORS);
    let numbers_count = NUMBER_RE.find_iter(text).count();

    StyleProfile {
        style_type: if journalist_score >= PROFESSIONAL_MIN_INDICATORS {
            StyleType::ProfessionalJournalistic
        } else {
            StyleType::Generic
        },
        journalist_score,
        objectivity: objectivity(text),
        uses_data: numbers_count > 0,
        numbers_count,
        has_dates: YEAR_RE.is_match(text),
        well_structured: paragraph_breaks(text) >= WELL_STRUCTURED_MIN_BREAKS,
        tone: detect_tone(text),
    }
}
