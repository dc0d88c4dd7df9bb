//! Unified error model for the submission workflow.
use thiserror::Error;

/// Message shown for any failure that the user can only fix by retrying.
pub const RETRY_MESSAGE: &str = "Failed to classify the EDF file. Please try again.";

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkflowError {
    /// The selected file did not pass the extension check. Never reaches
    /// the backend.
    #[error("VALIDATE/{0}")]
    Validation(String),

    /// Network failure, timeout, non-2xx status or an undecodable body.
    /// The distinguishing detail lives only in the message.
    #[error("TRANSPORT/{0}")]
    Transport(String),

    /// The backend answered with a well-formed response whose values are
    /// outside the contract (unknown class, confidence out of [0, 1]).
    #[error("PAYLOAD/{0}")]
    InvalidPayload(String),
}

impl WorkflowError {
    /// What the user sees. Transport and payload failures are deliberately
    /// indistinguishable here; the full detail goes to the logs.
    pub fn user_message(&self) -> String {
        match self {
            WorkflowError::Validation(reason) => reason.clone(),
            WorkflowError::Transport(_) | WorkflowError::InvalidPayload(_) => {
                RETRY_MESSAGE.to_string()
            }
        }
    }
}
