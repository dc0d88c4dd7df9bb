//! Backend trait: the single contract the workflow expects from a
//! classification service.
use async_trait::async_trait;

use crate::model::{CandidateFile, SubmissionOutcome};

/// An opaque classification capability. One file in, one outcome out;
/// a single attempt with no internal retry. Implementations must not
/// retain the file bytes after the call returns.
#[async_trait]
pub trait ClassificationBackend: Send + Sync {
    async fn submit(&self, file: &CandidateFile) -> SubmissionOutcome;
}
