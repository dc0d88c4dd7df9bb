//! Data model: candidate files, backend outcomes and the workflow state.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A file picked or dropped by the user, held in memory until the
/// submission completes or a new selection replaces it. Owned exclusively
/// by the [`crate::WorkflowController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
        }
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Result of checking a candidate file against the extension allow-list.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Accepted(CandidateFile),
    Rejected { reason: String },
}

/// What the backend call produced, before any contract checks.
///
/// Network failure, timeout, bad status and undecodable body all collapse
/// into `TransportError`; the caller does not distinguish them further.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Response {
        classification: i64,
        confidence: Option<f64>,
    },
    TransportError {
        message: String,
    },
}

/// Backend class labels. The raw mapping (0 = Schizophrenia, 1 = Healthy)
/// is an arbitrary but fixed contract with the model service and must be
/// preserved exactly; label and display color both derive from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Classification {
    Schizophrenia,
    Healthy,
}

impl Classification {
    /// Decode the backend's integer label.
    pub fn from_raw(raw: i64) -> Option<Self> {
        match raw {
            0 => Some(Classification::Schizophrenia),
            1 => Some(Classification::Healthy),
            _ => None,
        }
    }

    pub fn raw(&self) -> i64 {
        match self {
            Classification::Schizophrenia => 0,
            Classification::Healthy => 1,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Classification::Schizophrenia => "Schizophrenia",
            Classification::Healthy => "Healthy",
        }
    }

    /// Disclaimer sentence shown next to the label.
    pub fn description(&self) -> &'static str {
        match self {
            Classification::Healthy => {
                "The EDF analysis indicates normal brain activity patterns."
            }
            Classification::Schizophrenia => {
                "The EDF analysis indicates patterns consistent with schizophrenia."
            }
        }
    }
}

impl TryFrom<i64> for Classification {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        Classification::from_raw(raw).ok_or_else(|| format!("unknown classification value {}", raw))
    }
}

impl From<Classification> for i64 {
    fn from(c: Classification) -> i64 {
        c.raw()
    }
}

/// One successful workflow run. Created once, never mutated; the next run
/// replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub classification: Classification,
    /// Backend-reported score in [0, 1], when the backend provided one.
    pub confidence: Option<f64>,
    pub completed_at: DateTime<Utc>,
}

impl ClassificationResult {
    /// Confidence formatted for display, e.g. "93.0%".
    pub fn confidence_percent(&self) -> Option<String> {
        self.confidence.map(|c| format!("{:.1}%", c * 100.0))
    }
}

/// The single live state of the submission workflow. Transitioning
/// discards the previous state; no history is kept.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkflowState {
    Idle,
    Validated(CandidateFile),
    Submitting(CandidateFile),
    Succeeded(ClassificationResult),
    Failed { reason: String },
}

impl WorkflowState {
    /// Short name used in log fields.
    pub fn label(&self) -> &'static str {
        match self {
            WorkflowState::Idle => "idle",
            WorkflowState::Validated(_) => "validated",
            WorkflowState::Submitting(_) => "submitting",
            WorkflowState::Succeeded(_) => "succeeded",
            WorkflowState::Failed { .. } => "failed",
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, WorkflowState::Submitting(_))
    }
}
