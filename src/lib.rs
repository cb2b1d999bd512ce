//! Broadcast script desk: assembles spoken-word scripts about landmarks from
//! reference data, and scores any script text against fixed newsroom
//! heuristics.

pub mod analysis;
pub mod assembler;
pub mod content;
pub mod dataset;
pub mod error;
pub mod lexicon;
pub mod metrics;
pub mod recommend;
pub mod score;
pub mod service;
pub mod style;

pub use analysis::{analyze, AnalysisResult};
pub use assembler::{Script, ScriptAssembler, ScriptSection, SectionKind};
pub use dataset::{CityRecord, Dataset, LandmarkRecord};
pub use error::{DeskError, Result};
pub use service::{handle_analyze, AnalyzeRequest, GenerateRequest, GeneratedScript, ScriptDesk};
