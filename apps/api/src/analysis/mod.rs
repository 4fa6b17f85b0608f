// Resume analysis: model reply interpretation, merging, and the run pipeline.
// All external calls go through llm_client; PDF decoding goes through extraction.

pub mod handlers;
pub mod merge;
pub mod models;
pub mod prompts;
pub mod response;
pub mod run;

use thiserror::Error;

use crate::extraction::ExtractionError;

use merge::MergeError;

pub use models::AnalysisReport;
pub use run::Analyzer;

/// Why a run ended in `Failed`. Service unavailability is not here: it is a
/// normal branch that still produces a report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("Malformed model response: {0}")]
    MalformedModelResponse(String),

    #[error("{0}")]
    NotAResume(String),

    #[error(transparent)]
    Merge(#[from] MergeError),
}
