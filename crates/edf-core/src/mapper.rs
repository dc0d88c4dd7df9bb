//! Maps raw backend outcomes into [`ClassificationResult`]s, enforcing the
//! response contract.
use chrono::{DateTime, Utc};

use crate::error::WorkflowError;
use crate::model::{Classification, ClassificationResult, SubmissionOutcome};

/// Contract checks applied to a backend response:
/// classification must decode to a known class, confidence (when present)
/// must lie in [0, 1]. Transport errors pass through unchanged so the
/// controller can log them distinctly.
pub fn map_outcome(
    outcome: SubmissionOutcome,
    completed_at: DateTime<Utc>,
) -> Result<ClassificationResult, WorkflowError> {
    match outcome {
        SubmissionOutcome::Response {
            classification,
            confidence,
        } => {
            let classification = Classification::from_raw(classification).ok_or_else(|| {
                WorkflowError::InvalidPayload(format!(
                    "unknown classification value {}",
                    classification
                ))
            })?;

            if let Some(conf) = confidence {
                // NaN fails this check too.
                if !(0.0..=1.0).contains(&conf) {
                    return Err(WorkflowError::InvalidPayload(format!(
                        "confidence {} outside [0, 1]",
                        conf
                    )));
                }
            }

            Ok(ClassificationResult {
                classification,
                confidence,
                completed_at,
            })
        }
        SubmissionOutcome::TransportError { message } => Err(WorkflowError::Transport(message)),
    }
}
