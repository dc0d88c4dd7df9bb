//! Gateway handlers.
use axum::{
    extract::{
        multipart::{Multipart, MultipartError},
        State,
    },
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use edf_core::{CandidateFile, SubmissionOutcome, ENGINE_VERSION};

use crate::GatewayState;

/// Answer served while no model service is configured. Deterministic on
/// purpose; the frontend must not learn anything from stub values.
const STUB_CLASSIFICATION: i64 = 1;
const STUB_CONFIDENCE: f64 = 0.85;

/// `POST /api/classify`: one multipart file part in, the model service's
/// `{ classification, confidence }` JSON out. 400 when no file part is
/// present, 500 when forwarding fails.
pub async fn classify(
    State(state): State<GatewayState>,
    mut multipart: Multipart,
) -> (StatusCode, Json<Value>) {
    let file = match read_file_part(&mut multipart).await {
        Ok(Some(file)) => file,
        Ok(None) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "No file provided" })),
            )
        }
        Err(err) => {
            tracing::warn!(error = %err, "could not read multipart body");
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "Malformed multipart body" })),
            );
        }
    };

    let client = match &state.upstream {
        Some(client) => client,
        None => {
            tracing::debug!(file = %file.file_name, "no upstream configured, serving stub");
            return (
                StatusCode::OK,
                Json(json!({
                    "classification": STUB_CLASSIFICATION,
                    "confidence": STUB_CONFIDENCE,
                })),
            );
        }
    };

    match client.submit(&file).await {
        SubmissionOutcome::Response {
            classification,
            confidence,
        } => (
            StatusCode::OK,
            Json(json!({
                "classification": classification,
                "confidence": confidence,
            })),
        ),
        SubmissionOutcome::TransportError { message } => {
            tracing::error!(detail = %message, "forwarding to the model service failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Classification failed" })),
            )
        }
    }
}

pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({ "status": "ok", "version": ENGINE_VERSION })),
    )
}

/// Pull the `file` part out of the multipart stream, skipping unrelated
/// fields. The original filename is preserved for the upstream request.
async fn read_file_part(
    multipart: &mut Multipart,
) -> Result<Option<CandidateFile>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }
        let file_name = field.file_name().unwrap_or("upload.edf").to_string();
        let bytes = field.bytes().await?;
        return Ok(Some(CandidateFile::new(file_name, bytes.to_vec())));
    }
    Ok(None)
}
