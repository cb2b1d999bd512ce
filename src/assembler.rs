//! Duration-driven script assembly.
//!
//! A script is built from a fixed run of candidate sections. Each section has
//! a minimum target duration; longer slots unlock more of them. Phrasing
//! variants, the story, and landmark/angle subsets are drawn from the caller's
//! random source so a seeded generator reproduces a script exactly.

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::dataset::{display_value, humanize_key, present, CityRecord, LandmarkRecord, Story};
use crate::metrics::BROADCAST_WORDS_PER_SECOND;

const ARCH_FEATURES_SHOWN: usize = 3;
const STORY_SOURCES_SHOWN: usize = 3;
const KEY_LANDMARKS_MIN: usize = 2;
const KEY_LANDMARK_SECONDS_EACH: u32 = 60;
const ANGLES_MAX: usize = 5;
const PARAGRAPH_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Title,
    Intro,
    HistoricalContext,
    DetailedDescription,
    Significance,
    Story,
    KeyLandmarks,
    Statistics,
    JournalistAngles,
    VisitInfo,
    Conclusion,
}

impl SectionKind {
    /// Shortest target duration, in seconds, at which the section is included.
    pub fn min_duration(self) -> u32 {
        match self {
            SectionKind::Title
            | SectionKind::Intro
            | SectionKind::DetailedDescription
            | SectionKind::Conclusion => 0,
            SectionKind::Significance | SectionKind::VisitInfo => 60,
            SectionKind::HistoricalContext | SectionKind::KeyLandmarks => 90,
            SectionKind::Story => 120,
            SectionKind::Statistics => 150,
            SectionKind::JournalistAngles => 180,
        }
    }

    fn heading(self) -> &'static str {
        match self {
            SectionKind::Title => "العنوان",
            SectionKind::Intro => "المقدمة",
            SectionKind::HistoricalContext => "الخلفية التاريخية",
            SectionKind::DetailedDescription => "الوصف التفصيلي",
            SectionKind::Significance => "الأهمية والتفرد",
            SectionKind::Story => "قصة",
            SectionKind::KeyLandmarks => "المعالم البارزة",
            SectionKind::Statistics => "أرقام وإحصائيات",
            SectionKind::JournalistAngles => "زوايا صحفية مقترحة",
            SectionKind::VisitInfo => "معلومات الزيارة",
            SectionKind::Conclusion => "الخاتمة",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptSection {
    pub kind: SectionKind,
    pub title: String,
    #[serde(rename = "content")]
    pub body: String,
}

impl ScriptSection {
    fn new(kind: SectionKind, body: String) -> Self {
        Self {
            kind,
            title: kind.heading().to_string(),
            body,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Script {
    pub title: String,
    pub sections: Vec<ScriptSection>,
    pub full_text: String,
    pub target_words: u32,
}

impl Script {
    pub fn has(&self, kind: SectionKind) -> bool {
        self.sections.iter().any(|s| s.kind == kind)
    }
}

pub struct ScriptAssembler<'a> {
    city: &'a CityRecord,
    landmark: &'a LandmarkRecord,
    duration_seconds: u32,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn pick_one<R: Rng + ?Sized>(rng: &mut R, mut options: Vec<String>) -> String {
    let i = rng.random_range(0..options.len());
    options.swap_remove(i)
}

fn non_empty(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|s| !s.is_empty())
}

pub fn key_landmark_count(available: usize, duration_seconds: u32) -> usize {
    let wanted = (duration_seconds / KEY_LANDMARK_SECONDS_EACH) as usize;
    available.min(wanted.max(KEY_LANDMARKS_MIN))
}

pub fn target_words(duration_seconds: u32) -> u32 {
    (duration_seconds as f64 * BROADCAST_WORDS_PER_SECOND) as u32
}

// ---------------------------------------------------------------------------
// Assembly
// ---------------------------------------------------------------------------

impl<'a> ScriptAssembler<'a> {
    pub fn new(city: &'a CityRecord, landmark: &'a LandmarkRecord, duration_seconds: u32) -> Self {
        Self {
            city,
            landmark,
            duration_seconds,
        }
    }

    fn unlocked(&self, kind: SectionKind) -> bool {
        self.duration_seconds >= kind.min_duration()
    }

    pub fn assemble<R: Rng + ?Sized>(&self, rng: &mut R) -> Script {
        let mut sections = Vec::new();

        let title = self.title(rng);
        sections.push(ScriptSection::new(SectionKind::Title, title.clone()));
        sections.push(ScriptSection::new(SectionKind::Intro, self.intro(rng)));

        if self.unlocked(SectionKind::HistoricalContext) {
            sections.push(ScriptSection::new(
                SectionKind::HistoricalContext,
                self.historical_context(),
            ));
        }

        sections.push(ScriptSection::new(
            SectionKind::DetailedDescription,
            self.detailed_description(),
        ));

        if self.unlocked(SectionKind::Significance) {
            sections.push(ScriptSection::new(
                SectionKind::Significance,
                self.significance(),
            ));
        }

        if self.unlocked(SectionKind::Story) {
            if let Some(story) = self.landmark.stories.choose(rng) {
                sections.push(ScriptSection {
                    kind: SectionKind::Story,
                    title: format!("{}: {}", SectionKind::Story.heading(), story.title),
                    body: format_story(story),
                });
            }
        }

        if self.unlocked(SectionKind::KeyLandmarks) {
            if let Some(body) = self.key_landmarks(rng) {
                sections.push(ScriptSection::new(SectionKind::KeyLandmarks, body));
            }
        }

        if self.unlocked(SectionKind::Statistics) {
            if let Some(body) = self.statistics() {
                sections.push(ScriptSection::new(SectionKind::Statistics, body));
            }
        }

        if self.unlocked(SectionKind::JournalistAngles) {
            if let Some(body) = self.journalist_angles(rng) {
                sections.push(ScriptSection::new(SectionKind::JournalistAngles, body));
            }
        }

        if self.unlocked(SectionKind::VisitInfo) {
            sections.push(ScriptSection::new(SectionKind::VisitInfo, self.visit_info()));
        }

        sections.push(ScriptSection::new(
            SectionKind::Conclusion,
            self.conclusion(rng),
        ));

        debug!(
            landmark = %self.landmark.name,
            duration = self.duration_seconds,
            sections = ?sections.iter().map(|s| s.kind).collect::<Vec<_>>(),
            "script assembled"
        );

        let full_text = sections
            .iter()
            .filter(|s| s.kind != SectionKind::Title)
            .map(|s| s.body.as_str())
            .collect::<Vec<_>>()
            .join(PARAGRAPH_SEPARATOR);

        Script {
            title,
            sections,
            full_text,
            target_words: target_words(self.duration_seconds),
        }
    }

    fn title<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let lm = self.landmark;
        pick_one(
            rng,
            vec![
                format!("{}: {}", lm.name, lm.category),
                format!("{} في {} - {}", lm.name, self.city.name, lm.description),
                format!("تقرير: {} - {}", lm.name, lm.kind),
            ],
        )
    }

    fn intro<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let lm = self.landmark;
        let city = self.city;
        let mut intro = pick_one(
            rng,
            vec![
                format!(
                    "في {}، {}، يقع {}، {}. {}",
                    city.name, city.region, lm.name, lm.description, lm.detailed_info
                ),
                format!(
                    "يُعد {} أحد أبرز المعالم في {}، حيث {}. {}",
                    lm.name, city.name, lm.description, lm.detailed_info
                ),
                format!(
                    "{} - {} - معلم استثنائي في {} {}. {}",
                    lm.name, lm.category, city.name, lm.description, lm.detailed_info
                ),
            ],
        );

        if lm.info.unesco {
            intro.push_str(&self.unesco_clause());
        }
        intro
    }

    fn unesco_clause(&self) -> String {
        let info = &self.landmark.info;
        let year = present(info.year_inscribed.as_ref())
            .map(display_value)
            .unwrap_or_else(|| "غير محدد".to_string());
        let name = non_empty(info.inscription_name.as_ref()).unwrap_or(self.landmark.name.as_str());

        let mut clause = format!(
            " الموقع مُدرج في قائمة التراث العالمي لليونسكو منذ عام {year}م تحت اسم '{name}'"
        );
        if let Some(criteria) = non_empty(info.unesco_criteria.as_ref()) {
            clause.push_str(&format!(" وفقاً لـ{criteria}"));
        }
        clause.push('.');
        clause
    }

    fn historical_context(&self) -> String {
        let lm = self.landmark;
        if let Some(history) = non_empty(lm.historical_significance.as_ref()) {
            return history.to_string();
        }
        match present(lm.info.age.as_ref()) {
            Some(age) => format!(
                "يعود تاريخ {} إلى {}، مما يجعله شاهداً على حقب تاريخية متعددة.",
                lm.name,
                display_value(age)
            ),
            None => String::new(),
        }
    }

    fn detailed_description(&self) -> String {
        let lm = self.landmark;
        let mut parts = Vec::new();

        if !lm.architectural_features.is_empty() {
            parts.push("من الناحية المعمارية:".to_string());
            for (feature, desc) in lm.architectural_features.iter().take(ARCH_FEATURES_SHOWN) {
                parts.push(format!("- {}: {}", humanize_key(feature), display_value(desc)));
            }
        }
        if let Some(importance) = non_empty(lm.archaeological_importance.as_ref()) {
            parts.push(importance.to_string());
        }
        if let Some(development) = non_empty(lm.historical_development.as_ref()) {
            parts.push(development.to_string());
        }
        if parts.is_empty() {
            parts.push(lm.detailed_info.clone());
        }

        parts.join(PARAGRAPH_SEPARATOR)
    }

    fn significance(&self) -> String {
        let lm = self.landmark;
        let mut parts = Vec::new();

        if let Some(history) = non_empty(lm.historical_significance.as_ref()) {
            parts.push(format!("تاريخياً: {history}"));
        }
        if lm.info.unesco {
            parts.push(format!(
                "ثقافياً: يمثل {} قيمة عالمية استثنائية، كما أقرته منظمة اليونسكو.",
                lm.name
            ));
        }
        if let Some(visitors) = present(lm.statistics.get("annual_visitors_2023")) {
            parts.push(format!(
                "اقتصادياً: استقبل الموقع {} زائر في 2023، مما يجعله محركاً اقتصادياً مهماً.",
                display_value(visitors)
            ));
        }

        parts.join(PARAGRAPH_SEPARATOR)
    }

    fn key_landmarks<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let all = &self.landmark.key_landmarks;
        if all.is_empty() {
            return None;
        }

        let count = key_landmark_count(all.len(), self.duration_seconds);
        let parts: Vec<String> = all
            .choose_multiple(rng, count)
            .map(|lm| {
                let mut line = format!("• {}", lm.name);
                if let Some(year) = present(lm.year.as_ref()) {
                    line.push_str(&format!(" ({})", display_value(year)));
                }
                line.push_str(&format!(": {}", lm.description));
                if let Some(significance) = non_empty(lm.significance.as_ref()) {
                    line.push_str(&format!(" الأهمية: {significance}"));
                }
                line
            })
            .collect();

        Some(parts.join(PARAGRAPH_SEPARATOR))
    }

    fn statistics(&self) -> Option<String> {
        let stats = &self.landmark.statistics;
        if stats.is_empty() {
            return None;
        }

        let mut parts = vec!["الأرقام تتحدث:".to_string()];
        for (key, value) in stats {
            parts.push(format!("• {}: {}", humanize_key(key), display_value(value)));
        }
        Some(parts.join("\n"))
    }

    fn journalist_angles<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        let angles = &self.landmark.journalist_angles;
        if angles.is_empty() {
            return None;
        }

        let count = angles.len().min(ANGLES_MAX);
        let mut parts = vec!["زوايا صحفية مقترحة للتغطية:".to_string()];
        for (i, angle) in angles.choose_multiple(rng, count).enumerate() {
            parts.push(format!("{}. {angle}", i + 1));
        }
        Some(parts.join("\n"))
    }

    fn visit_info(&self) -> String {
        let info = &self.landmark.info;
        let mut parts = vec!["معلومات عملية للزيارة:".to_string()];

        let lines = [
            ("أفضل وقت", &info.best_time),
            ("المدة المقترحة", &info.duration),
            ("رسوم الدخول", &info.entry_fee),
            ("الجولات المصحوبة", &info.guided_tours),
        ];
        for (label, value) in lines {
            if let Some(value) = present(value.as_ref()) {
                parts.push(format!("• {label}: {}", display_value(value)));
            }
        }

        parts.join("\n")
    }

    fn conclusion<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let name = &self.landmark.name;
        pick_one(
            rng,
            vec![
                format!("يظل {name} شاهداً على عظمة التاريخ والحضارة، ومعلماً يستحق الزيارة والدراسة المعمقة."),
                format!(
                    "بين الماضي والحاضر، يقف {name} كجسر يربط الأجيال، ويروي قصة {} العريقة.",
                    self.city.name
                ),
                format!("يواصل {name} جذب الباحثين والزوار من مختلف أنحاء العالم، مؤكداً مكانته كأحد أهم المعالم في المملكة."),
                format!("في عصر التحول والتطوير، يحافظ {name} على هويته التاريخية، مقدماً للعالم نموذجاً فريداً للحفاظ على التراث."),
            ],
        )
    }
}

fn format_story(story: &Story) -> String {
    let mut formatted = match present(story.year.as_ref()) {
        Some(year) => format!("[{}]{PARAGRAPH_SEPARATOR}{}", display_value(year), story.content),
        None => story.content.clone(),
    };

    if !story.sources.is_empty() {
        let shown: Vec<&str> = story
            .sources
            .iter()
            .take(STORY_SOURCES_SHOWN)
            .map(String::as_str)
            .collect();
        formatted.push_str(&format!("{PARAGRAPH_SEPARATOR}المصادر: {}", shown.join(", ")));
    }
    if let Some(kind) = non_empty(story.kind.as_ref()) {
        formatted.push_str(&format!("{PARAGRAPH_SEPARATOR}النوع: {kind}"));
    }
    formatted
}
