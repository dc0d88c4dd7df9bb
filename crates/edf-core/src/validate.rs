//! Extension-based file validation.
//!
//! Only the filename is inspected; whether the bytes are a well-formed EDF
//! recording is the backend's concern.
use crate::model::{CandidateFile, ValidationOutcome};

/// Case-insensitive extension allow-list. Always non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionPolicy {
    allowed: Vec<String>,
}

impl ExtensionPolicy {
    /// Build a policy from extensions like ".edf". Leading dots are added
    /// when missing and everything is compared lowercase.
    pub fn new(extensions: &[&str]) -> Self {
        assert!(!extensions.is_empty(), "extension allow-list must be non-empty");
        let allowed = extensions
            .iter()
            .map(|ext| {
                let ext = ext.to_ascii_lowercase();
                if ext.starts_with('.') {
                    ext
                } else {
                    format!(".{}", ext)
                }
            })
            .collect();
        Self { allowed }
    }

    pub fn allows(&self, file_name: &str) -> bool {
        let lower = file_name.to_ascii_lowercase();
        self.allowed.iter().any(|ext| lower.ends_with(ext.as_str()))
    }

    /// User-facing message for a file that did not match.
    pub fn rejection_reason(&self) -> String {
        if self.allowed.len() == 1 {
            format!("Please select a valid {} file", self.allowed[0])
        } else {
            format!("Please select a valid file ({})", self.allowed.join(", "))
        }
    }
}

impl Default for ExtensionPolicy {
    fn default() -> Self {
        Self::new(&[".edf"])
    }
}

/// Check a candidate against the policy. Pure; no side effects, content
/// never read.
pub fn validate(candidate: CandidateFile, policy: &ExtensionPolicy) -> ValidationOutcome {
    if policy.allows(&candidate.file_name) {
        ValidationOutcome::Accepted(candidate)
    } else {
        ValidationOutcome::Rejected {
            reason: policy.rejection_reason(),
        }
    }
}
