use serde::Serialize;

use crate::content::ContentProfile;
use crate::metrics::BasicMetrics;
use crate::style::StyleProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationType {
    Length,
    Style,
    Objectivity,
    Data,
    Sources,
    Structure,
    Readability,
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub priority: Priority,
    pub issue: String,
    pub suggestion: String,
}

/// Everything a rule may look at.
#[derive(Debug, Clone, Copy)]
pub struct Signals<'a> {
    pub basic: &'a BasicMetrics,
    pub style: &'a StyleProfile,
    pub content: &'a ContentProfile,
}

pub struct Rule {
    pub kind: RecommendationType,
    pub priority: Priority,
    pub issue: &'static str,
    pub suggestion: &'static str,
    pub fires: fn(&Signals) -> bool,
}

impl Rule {
    fn recommendation(&self) -> Recommendation {
        Recommendation {
            kind: self.kind,
            priority: self.priority,
            issue: self.issue.to_string(),
            suggestion: self.suggestion.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Rule table
// ---------------------------------------------------------------------------

pub const MIN_WORDS: usize = 100;
pub const MAX_WORDS: usize = 600;
pub const MIN_JOURNALIST_SCORE: usize = 3;
pub const MIN_OBJECTIVITY: u32 = 80;
pub const MIN_PARAGRAPHS: usize = 3;
pub const MAX_AVG_SENTENCE_LENGTH: f64 = 25.0;

/// Evaluated top to bottom; output order follows this table.
pub static RULES: &[Rule] = &[
    Rule {
        kind: RecommendationType::Length,
        priority: Priority::High,
        issue: "script is too short",
        suggestion: "Add more detail and background. A solid broadcast script runs 200-500 words.",
        fires: |s| s.basic.word_count < MIN_WORDS,
    },
    Rule {
        kind: RecommendationType::Length,
        priority: Priority::Medium,
        issue: "script is too long and may lose the audience",
        suggestion: "Cut down to the main points, or split the material into two separate reports.",
        fires: |s| s.basic.word_count > MAX_WORDS,
    },
    Rule {
        kind: RecommendationType::Style,
        priority: Priority::High,
        issue: "style is not journalistic enough",
        suggestion: "Use newsroom phrasing such as \"according to sources\" or \"reports indicate\", and drop personal pronouns.",
        fires: |s| s.style.journalist_score < MIN_JOURNALIST_SCORE,
    },
    Rule {
        kind: RecommendationType::Objectivity,
        priority: Priority::High,
        issue: "script contains personal opinion",
        suggestion: "Keep a neutral voice. Replace opinions with documented facts and figures.",
        fires: |s| s.style.objectivity < MIN_OBJECTIVITY,
    },
    Rule {
        kind: RecommendationType::Data,
        priority: Priority::Medium,
        issue: "no figures or statistics",
        suggestion: "Support the story with numbers: visitor counts, costs, area, specific dates.",
        fires: |s| !s.style.uses_data,
    },
    Rule {
        kind: RecommendationType::Sources,
        priority: Priority::High,
        issue: "no sources cited",
        suggestion: "Name where the information comes from, e.g. \"according to a UNESCO report\".",
        fires: |s| !s.content.mentions_sources,
    },
    Rule {
        kind: RecommendationType::Structure,
        priority: Priority::Medium,
        issue: "script is not organized into paragraphs",
        suggestion: "Split into clear paragraphs: an introduction, two or three body paragraphs, and a conclusion.",
        fires: |s| s.basic.paragraph_count < MIN_PARAGRAPHS,
    },
    Rule {
        kind: RecommendationType::Readability,
        priority: Priority::Medium,
        issue: "sentences are too long",
        suggestion: "Shorten sentences so they read aloud easily. Aim for 15-20 words.",
        fires: |s| s.basic.avg_sentence_length > MAX_AVG_SENTENCE_LENGTH,
    },
];

static NO_ISSUES: Rule = Rule {
    kind: RecommendationType::General,
    priority: Priority::Info,
    issue: "no major issues",
    suggestion: "The script is professional and well built. Keep it up.",
    fires: |_| true,
};

pub fn recommend(signals: &Signals) -> Vec<Recommendation> {
    let mut out: Vec<Recommendation> = RULES
        .iter()
        .filter(|rule| (rule.fires)(signals))
        .map(Rule::recommendation)
        .collect();

    if out.is_empty() {
        out.push(NO_ISSUES.recommendation());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{content, metrics, style};

    fn run(text: &str) -> Vec<Recommendation> {
        let basic = metrics::compute(text);
        let style = style::classify(text);
        let content = content::analyze(text);
        recommend(&Signals {
            basic: &basic,
            style: &style,
            content: &content,
        })
    }

    fn kinds(recs: &[Recommendation]) -> Vec<RecommendationType> {
        recs.iter().map(|r| r.kind).collect()
    }

    #[test]
    fn each_rule_fires_in_isolation() {
        let basic = metrics::compute("");
        let style = style::classify("");
        let content = content::analyze("");
        let signals = Signals {
            basic: &basic,
            style: &style,
            content: &content,
        };
        let fired: Vec<bool> = RULES.iter().map(|r| (r.fires)(&signals)).collect();
        assert_eq!(
            fired,
            vec![true, false, true, false, true, true, true, false]
        );
    }

    #[test]
    fn long_sentences_rule() {
        let sentence = vec!["كلمة"; 30].join(" ");
        let recs = run(&format!("{sentence}."));
        assert!(kinds(&recs).contains(&RecommendationType::Readability));
    }

    #[test]
    fn opinion_rule_uses_threshold() {
        let recs = run("أنا نحن أعتقد");
        assert!(kinds(&recs).contains(&RecommendationType::Objectivity));
        let recs = run("أنا نحن");
        assert!(!kinds(&recs).contains(&RecommendationType::Objectivity));
    }

    #[test]
    fn too_long_rule() {
        let text = vec!["كلمة"; 601].join(" ");
        let recs = run(&text);
        assert_eq!(recs[0].kind, RecommendationType::Length);
        assert_eq!(recs[0].priority, Priority::Medium);
    }
}
