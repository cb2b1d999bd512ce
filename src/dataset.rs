//! Reference data about cities and their landmarks.
//!
//! The dataset is read once and then only borrowed. Object-valued fields
//! (`architectural_features`, `statistics`) keep the key order of the source
//! file because the assembler renders them in that order.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::info;

use crate::error::{DeskError, Result};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VisitInfo {
    #[serde(default)]
    pub unesco: bool,
    pub year_inscribed: Option<Value>,
    pub unesco_criteria: Option<String>,
    pub inscription_name: Option<String>,
    pub best_time: Option<Value>,
    pub duration: Option<Value>,
    pub entry_fee: Option<Value>,
    pub guided_tours: Option<Value>,
    pub age: Option<Value>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Story {
    pub title: String,
    pub content: String,
    pub year: Option<Value>,
    #[serde(default)]
    pub sources: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct KeyLandmark {
    pub name: String,
    pub year: Option<Value>,
    pub description: String,
    pub significance: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LandmarkRecord {
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub category: String,
    pub description: String,
    #[serde(default)]
    pub detailed_info: String,
    pub historical_significance: Option<String>,
    pub historical_development: Option<String>,
    pub archaeological_importance: Option<String>,
    #[serde(default)]
    pub architectural_features: Map<String, Value>,
    #[serde(default)]
    pub info: VisitInfo,
    #[serde(default)]
    pub statistics: Map<String, Value>,
    #[serde(default)]
    pub stories: Vec<Story>,
    #[serde(default)]
    pub key_landmarks: Vec<KeyLandmark>,
    #[serde(default)]
    pub journalist_angles: Vec<String>,
    #[serde(default)]
    pub field_questions: Vec<String>,
    #[serde(default)]
    pub cultural_notes: Vec<String>,
    #[serde(default)]
    pub references: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CityRecord {
    pub name: String,
    #[serde(default)]
    pub name_en: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub population: Value,
}

/// Loaded reference data. Landmarks are decoded eagerly so malformed records
/// surface at load time rather than mid-request.
#[derive(Debug, Clone)]
pub struct Dataset {
    cities: Vec<(String, City)>,
}

#[derive(Debug, Clone)]
pub struct City {
    pub record: CityRecord,
    landmarks: Vec<(String, LandmarkRecord)>,
}

#[derive(Deserialize)]
struct RawDataset {
    cities: Map<String, Value>,
}

#[derive(Deserialize)]
struct RawCity {
    #[serde(flatten)]
    record: CityRecord,
    #[serde(default)]
    landmarks: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Listings
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct CitySummary {
    pub id: String,
    pub name: String,
    pub name_en: String,
    pub icon: String,
    pub description: String,
    pub region: String,
    pub population: Value,
    pub landmarks_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct CityHeader {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub region: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandmarkSummary {
    pub id: String,
    pub name: String,
    pub icon: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub category: String,
    pub description: String,
    pub has_stories: bool,
    pub stories_count: usize,
    pub unesco: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct LandmarkListing {
    pub city: CityHeader,
    pub landmarks: Vec<LandmarkSummary>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub cities: usize,
    pub landmarks: usize,
    pub stories: usize,
}

impl City {
    pub fn landmark(&self, id: &str) -> Result<&LandmarkRecord> {
        self.landmarks
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, record)| record)
            .ok_or_else(|| DeskError::landmark_not_found(id))
    }

    pub fn landmarks(&self) -> impl Iterator<Item = (&str, &LandmarkRecord)> {
        self.landmarks.iter().map(|(id, record)| (id.as_str(), record))
    }
}

impl Dataset {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawDataset = serde_json::from_str(json)?;
        let mut cities = Vec::with_capacity(raw.cities.len());

        for (city_id, value) in raw.cities {
            let city: RawCity = serde_json::from_value(value).map_err(|e| DeskError::Dataset {
                message: format!("city {city_id}: {e}"),
            })?;
            let mut landmarks = Vec::with_capacity(city.landmarks.len());
            for (landmark_id, value) in city.landmarks {
                let landmark: LandmarkRecord =
                    serde_json::from_value(value).map_err(|e| DeskError::Dataset {
                        message: format!("landmark {city_id}/{landmark_id}: {e}"),
                    })?;
                landmarks.push((landmark_id, landmark));
            }
            cities.push((
                city_id,
                City {
                    record: city.record,
                    landmarks,
                },
            ));
        }

        Ok(Dataset { cities })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| DeskError::Dataset {
            message: format!("{}: {e}", path.display()),
        })?;
        let dataset = Self::from_json_str(&json)?;
        let stats = dataset.stats();
        info!(
            path = %path.display(),
            cities = stats.cities,
            landmarks = stats.landmarks,
            stories = stats.stories,
            "dataset loaded"
        );
        Ok(dataset)
    }

    pub fn city(&self, id: &str) -> Result<&City> {
        self.cities
            .iter()
            .find(|(key, _)| key == id)
            .map(|(_, city)| city)
            .ok_or_else(|| DeskError::city_not_found(id))
    }

    /// City and landmark by id. Fails on whichever lookup misses first.
    pub fn landmark(&self, city_id: &str, landmark_id: &str) -> Result<(&City, &LandmarkRecord)> {
        let city = self.city(city_id)?;
        Ok((city, city.landmark(landmark_id)?))
    }

    pub fn cities(&self) -> Vec<CitySummary> {
        self.cities
            .iter()
            .map(|(id, city)| CitySummary {
                id: id.clone(),
                name: city.record.name.clone(),
                name_en: city.record.name_en.clone(),
                icon: city.record.icon.clone(),
                description: city.record.description.clone(),
                region: city.record.region.clone(),
                population: city.record.population.clone(),
                landmarks_count: city.landmarks.len(),
            })
            .collect()
    }

    pub fn landmarks(&self, city_id: &str) -> Result<LandmarkListing> {
        let city = self.city(city_id)?;
        let landmarks = city
            .landmarks()
            .map(|(id, lm)| LandmarkSummary {
                id: id.to_string(),
                name: lm.name.clone(),
                icon: lm.icon.clone(),
                kind: lm.kind.clone(),
                category: lm.category.clone(),
                description: lm.description.clone(),
                has_stories: !lm.stories.is_empty(),
                stories_count: lm.stories.len(),
                unesco: lm.info.unesco,
            })
            .collect();

        Ok(LandmarkListing {
            city: CityHeader {
                id: city_id.to_string(),
                name: city.record.name.clone(),
                icon: city.record.icon.clone(),
                region: city.record.region.clone(),
            },
            landmarks,
        })
    }

    pub fn stats(&self) -> DatasetStats {
        let mut stats = DatasetStats {
            cities: self.cities.len(),
            landmarks: 0,
            stories: 0,
        };
        for (_, city) in &self.cities {
            stats.landmarks += city.landmarks.len();
            stats.stories += city
                .landmarks
                .iter()
                .map(|(_, lm)| lm.stories.len())
                .sum::<usize>();
        }
        stats
    }
}

/// Render a loosely-typed JSON scalar the way it reads in prose: strings
/// without quotes, everything else in JSON form.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// JSON truthiness: null, false, zero and empty containers are all absent.
pub fn truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

pub fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| truthy(v))
}

/// `"annual_visitors"` → `"Annual Visitors"`.
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn humanize_key_title_cases_words() {
        assert_eq!(humanize_key("annual_visitors_2023"), "Annual Visitors 2023");
        assert_eq!(humanize_key("main_GATE"), "Main Gate");
        assert_eq!(humanize_key("قاعة_الأعمدة"), "قاعة الأعمدة");
    }

    #[test]
    fn display_value_strips_string_quotes() {
        assert_eq!(display_value(&Value::from("القرن الأول")), "القرن الأول");
        assert_eq!(display_value(&Value::from(1985)), "1985");
    }

    #[test]
    fn loose_scalar_types_load() {
        let json = r#"{"cities": {"c1": {
            "name": "x",
            "population": 60000,
            "landmarks": {"l1": {
                "name": "n",
                "type": "t",
                "description": "d",
                "info": {"guided_tours": true, "entry_fee": 0, "duration": 3, "age": "قديم"}
            }}
        }}}"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.cities()[0].population, Value::from(60000));

        let (_, landmark) = dataset.landmark("c1", "l1").unwrap();
        let info = &landmark.info;
        assert_eq!(present(info.guided_tours.as_ref()).map(display_value), Some("true".to_string()));
        assert_eq!(present(info.duration.as_ref()).map(display_value), Some("3".to_string()));
        assert!(present(info.entry_fee.as_ref()).is_none());
        assert!(present(info.best_time.as_ref()).is_none());
    }

    #[test]
    fn falsy_values_are_absent() {
        assert!(!truthy(&Value::from(0)));
        assert!(!truthy(&Value::from("")));
        assert!(!truthy(&Value::Null));
        assert!(!truthy(&Value::Bool(false)));
        assert!(truthy(&Value::from("2023")));
    }

    #[test]
    fn malformed_landmark_names_its_location() {
        let json = r#"{"cities": {"c1": {"name": "x", "landmarks": {"l1": {"name": 5}}}}}"#;
        let err = Dataset::from_json_str(json).unwrap_err();
        assert!(err.to_string().contains("c1/l1"));
    }
}
