use serde::Serialize;
use tracing::debug;

use crate::content::{self, ContentProfile};
use crate::metrics::{self, BasicMetrics};
use crate::recommend::{recommend, Recommendation, Signals};
use crate::score::{score, OverallScore};
use crate::style::{self, StyleProfile};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub basic: BasicMetrics,
    pub style: StyleProfile,
    pub content: ContentProfile,
    pub recommendations: Vec<Recommendation>,
    pub overall_score: OverallScore,
}

/// Run the full heuristic pipeline over `text`. Deterministic; empty input
/// is valid and yields mostly-zero metrics.
pub fn analyze(text: &str) -> AnalysisResult {
    let basic = metrics::compute(text);
    let style = style::classify(text);
    let content = content::analyze(text);

    let signals = Signals {
        basic: &basic,
        style: &style,
        content: &content,
    };
    let recommendations = recommend(&signals);
    let overall_score = score(&signals);

    debug!(
        words = basic.word_count,
        journalist_score = style.journalist_score,
        recommendations = recommendations.len(),
        score = overall_score.score,
        "script analyzed"
    );

    AnalysisResult {
        basic,
        style,
        content,
        recommendations,
        overall_score,
    }
}
