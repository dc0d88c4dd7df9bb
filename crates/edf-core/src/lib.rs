//! EDF Core: data model, validation, result mapping and the submission
//! workflow state machine.
//!
//! Everything in this crate is I/O-free. The only external collaborator is
//! the classification backend, reached through the [`ClassificationBackend`]
//! trait so the controller can be driven end-to-end in tests.

pub mod backend;
pub mod controller;
pub mod error;
pub mod mapper;
pub mod model;
pub mod validate;

pub use backend::ClassificationBackend;
pub use controller::{SubmissionTicket, WorkflowController};
pub use error::WorkflowError;
pub use mapper::map_outcome;
pub use model::{
    CandidateFile, Classification, ClassificationResult, SubmissionOutcome, ValidationOutcome,
    WorkflowState,
};
pub use validate::{validate, ExtensionPolicy};

/// Version of the workflow engine, reported by the gateway health route.
pub const ENGINE_VERSION: &str = "1.0.0";
