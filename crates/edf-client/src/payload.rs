//! Wire types for the classification endpoint.
use serde::Deserialize;

/// JSON body the model service answers with: `{ classification, confidence? }`.
/// Values are taken as-is here; range checks happen in the core mapper.
#[derive(Debug, Clone, Deserialize)]
pub struct RawClassification {
    pub classification: i64,
    #[serde(default)]
    pub confidence: Option<f64>,
}
