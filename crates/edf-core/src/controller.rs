//! Workflow controller: the submission state machine.
//!
//! States: `Idle → Validated → Submitting → Succeeded | Failed`. The
//! controller owns the candidate file and the live state; the presentation
//! layer only reads snapshots and raises events. There is one logical
//! thread of control, so no locks; the only race (a superseded request
//! resolving late) is handled by generation tokens.
use chrono::{DateTime, Utc};

use crate::backend::ClassificationBackend;
use crate::error::WorkflowError;
use crate::mapper::map_outcome;
use crate::model::{
    CandidateFile, ClassificationResult, SubmissionOutcome, ValidationOutcome, WorkflowState,
};
use crate::validate::{validate, ExtensionPolicy};

/// Handle for one dispatched submission. Carries the generation token that
/// decides, at resolution time, whether the outcome still matters.
#[derive(Debug)]
pub struct SubmissionTicket {
    generation: u64,
    file: CandidateFile,
}

impl SubmissionTicket {
    pub fn file(&self) -> &CandidateFile {
        &self.file
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

pub struct WorkflowController {
    state: WorkflowState,
    policy: ExtensionPolicy,
    /// Inline message from the last rejected selection or failed run.
    error: Option<String>,
    /// Bumped on every selection and every dispatch. A resolving
    /// submission is applied only while its token still matches.
    generation: u64,
}

impl WorkflowController {
    pub fn new(policy: ExtensionPolicy) -> Self {
        Self {
            state: WorkflowState::Idle,
            policy,
            error: None,
            generation: 0,
        }
    }

    // ---- snapshot accessors (read-only for the presentation layer) ----

    pub fn state(&self) -> &WorkflowState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        match &self.state {
            WorkflowState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn selected_file(&self) -> Option<&CandidateFile> {
        match &self.state {
            WorkflowState::Validated(file) | WorkflowState::Submitting(file) => Some(file),
            _ => None,
        }
    }

    // ---- events ----

    /// A file was picked or dropped. Allowed from any state; supersedes
    /// whatever was in flight. Returns whether the file was accepted.
    pub fn select_file(&mut self, candidate: CandidateFile) -> bool {
        self.generation += 1;
        match validate(candidate, &self.policy) {
            ValidationOutcome::Accepted(file) => {
                tracing::debug!(file = %file.file_name, size = file.len(), "file accepted");
                self.error = None;
                self.state = WorkflowState::Validated(file);
                true
            }
            ValidationOutcome::Rejected { reason } => {
                let err = WorkflowError::Validation(reason);
                tracing::debug!(detail = %err, "file rejected");
                self.error = Some(err.user_message());
                self.state = WorkflowState::Idle;
                false
            }
        }
    }

    /// Classification was requested. Only honored from `Validated`; from
    /// any other state, `Submitting` included, this is a no-op so at most
    /// one submission is ever in flight.
    pub fn begin_classify(&mut self) -> Option<SubmissionTicket> {
        let file = match &self.state {
            WorkflowState::Validated(file) => file.clone(),
            other => {
                tracing::debug!(state = other.label(), "classify request ignored");
                return None;
            }
        };

        self.generation += 1;
        self.error = None;
        self.state = WorkflowState::Submitting(file.clone());
        tracing::info!(file = %file.file_name, generation = self.generation, "submission dispatched");
        Some(SubmissionTicket {
            generation: self.generation,
            file,
        })
    }

    /// A dispatched submission resolved. Applies the outcome only if the
    /// ticket's generation still matches; stale results from superseded
    /// submissions are silently discarded. Returns whether it was applied.
    pub fn resolve(
        &mut self,
        ticket: SubmissionTicket,
        outcome: SubmissionOutcome,
        completed_at: DateTime<Utc>,
    ) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                stale = ticket.generation,
                current = self.generation,
                "discarding superseded submission result"
            );
            return false;
        }

        match map_outcome(outcome, completed_at) {
            Ok(result) => {
                tracing::info!(
                    label = result.classification.label(),
                    confidence = ?result.confidence,
                    "classification succeeded"
                );
                self.error = None;
                self.state = WorkflowState::Succeeded(result);
            }
            Err(err) => {
                // Transport and payload failures look the same to the user
                // but are logged distinctly. Validation never reaches this
                // point; `select_file` handles it before dispatch.
                match &err {
                    WorkflowError::InvalidPayload(detail) => {
                        tracing::error!(%detail, "backend returned an invalid payload")
                    }
                    other => tracing::warn!(detail = %other, "classification request failed"),
                }
                let reason = err.user_message();
                self.error = Some(reason.clone());
                self.state = WorkflowState::Failed { reason };
            }
        }
        true
    }

    /// Drive a full round trip: dispatch, await the backend, resolve.
    /// No-op unless the state is `Validated`.
    pub async fn classify<B>(&mut self, backend: &B) -> &WorkflowState
    where
        B: ClassificationBackend + ?Sized,
    {
        if let Some(ticket) = self.begin_classify() {
            let outcome = backend.submit(ticket.file()).await;
            self.resolve(ticket, outcome, Utc::now());
        }
        &self.state
    }
}

impl Default for WorkflowController {
    fn default() -> Self {
        Self::new(ExtensionPolicy::default())
    }
}
