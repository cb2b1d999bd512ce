use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::analysis::{analyze, AnalysisResult};
use crate::assembler::{ScriptAssembler, ScriptSection};
use crate::dataset::{Dataset, KeyLandmark, Story};
use crate::error::{DeskError, Result};
use crate::metrics::READING_WPM;

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Generation request as it arrives from a caller. Every field is optional
/// so missing input can be reported by name.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    pub city: Option<String>,
    pub landmark: Option<String>,
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeRequest {
    pub script: Option<String>,
}

impl GenerateRequest {
    /// `(city, landmark, duration)`, or the first missing field.
    pub fn validate(&self) -> Result<(&str, &str, u32)> {
        let city = self
            .city
            .as_deref()
            .ok_or_else(|| DeskError::missing_field("city"))?;
        let landmark = self
            .landmark
            .as_deref()
            .ok_or_else(|| DeskError::missing_field("landmark"))?;
        let duration = self
            .duration
            .ok_or_else(|| DeskError::missing_field("duration"))?;
        Ok((city, landmark, duration))
    }
}

impl AnalyzeRequest {
    pub fn validate(&self) -> Result<&str> {
        self.script.as_deref().ok_or_else(|| DeskError::Validation {
            message: "missing script text".to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct GeneratedScript {
    pub title: String,
    pub full_text: String,
    pub sections: Vec<ScriptSection>,
    pub city: String,
    pub city_region: String,
    pub landmark: String,
    pub landmark_type: String,
    pub landmark_category: String,
    pub duration_seconds: u32,
    pub target_words: u32,
    pub word_count: usize,
    pub char_count: usize,
    pub estimated_reading_minutes: usize,
    pub generated_at: DateTime<Utc>,

    pub field_questions: Vec<String>,
    pub cultural_notes: Vec<String>,
    pub stories: Vec<Story>,
    pub journalist_angles: Vec<String>,
    pub statistics: Map<String, Value>,
    pub references: Vec<String>,
    pub key_landmarks: Vec<KeyLandmark>,

    pub analysis: AnalysisResult,
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Entry point for callers. Holds only a borrowed dataset; every call builds
/// its own assembler and analysis.
pub struct ScriptDesk<'d> {
    dataset: &'d Dataset,
}

impl<'d> ScriptDesk<'d> {
    pub fn new(dataset: &'d Dataset) -> Self {
        Self { dataset }
    }

    pub fn generate<R: Rng + ?Sized>(
        &self,
        city_id: &str,
        landmark_id: &str,
        duration_seconds: u32,
        rng: &mut R,
    ) -> Result<GeneratedScript> {
        let (city, landmark) = self.dataset.landmark(city_id, landmark_id)?;
        let script = ScriptAssembler::new(&city.record, landmark, duration_seconds).assemble(rng);

        let word_count = script.full_text.split_whitespace().count();
        let char_count = script.full_text.chars().count();
        let analysis = analyze(&script.full_text);

        info!(
            city = city_id,
            landmark = landmark_id,
            duration = duration_seconds,
            sections = script.sections.len(),
            words = word_count,
            score = analysis.overall_score.score,
            "script generated"
        );

        Ok(GeneratedScript {
            title: script.title,
            full_text: script.full_text,
            sections: script.sections,
            city: city.record.name.clone(),
            city_region: city.record.region.clone(),
            landmark: landmark.name.clone(),
            landmark_type: landmark.kind.clone(),
            landmark_category: landmark.category.clone(),
            duration_seconds,
            target_words: script.target_words,
            word_count,
            char_count,
            estimated_reading_minutes: (word_count as f64 / READING_WPM) as usize,
            generated_at: Utc::now(),
            field_questions: landmark.field_questions.clone(),
            cultural_notes: landmark.cultural_notes.clone(),
            stories: landmark.stories.clone(),
            journalist_angles: landmark.journalist_angles.clone(),
            statistics: landmark.statistics.clone(),
            references: landmark.references.clone(),
            key_landmarks: landmark.key_landmarks.clone(),
            analysis,
        })
    }

    pub fn handle_generate<R: Rng + ?Sized>(
        &self,
        request: &GenerateRequest,
        rng: &mut R,
    ) -> Result<GeneratedScript> {
        let (city, landmark, duration) = request.validate()?;
        self.generate(city, landmark, duration, rng)
    }
}

pub fn handle_analyze(request: &AnalyzeRequest) -> Result<AnalysisResult> {
    let text = request.validate()?;
    let result = analyze(text);
    info!(
        words = result.basic.word_count,
        score = result.overall_score.score,
        "script analysis complete"
    );
    Ok(result)
}
