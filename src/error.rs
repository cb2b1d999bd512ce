//! Error types for script generation and analysis.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeskError {
    #[error("{message}")]
    Validation { message: String },

    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },

    #[error("Dataset error: {message}")]
    Dataset { message: String },
}

impl DeskError {
    pub fn missing_field(field: &str) -> Self {
        DeskError::Validation {
            message: format!("missing required field: {field}"),
        }
    }

    pub fn city_not_found(id: &str) -> Self {
        DeskError::NotFound {
            kind: "city",
            id: id.to_string(),
        }
    }

    pub fn landmark_not_found(id: &str) -> Self {
        DeskError::NotFound {
            kind: "landmark",
            id: id.to_string(),
        }
    }
}

impl From<serde_json::Error> for DeskError {
    fn from(err: serde_json::Error) -> Self {
        DeskError::Dataset {
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DeskError>;
