//! Binary entrypoint for the EDF classification gateway.
use edf_client::SubmissionClient;
use edf_gateway::{run, GatewayState};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    // Default listen address can be overridden with EDF_ADDR
    let addr = std::env::var("EDF_ADDR").unwrap_or_else(|_| "0.0.0.0:8787".to_string());

    // EDF_MODEL_URL selects the upstream classification endpoint; without
    // it the gateway serves stub answers so the frontend stays usable.
    let upstream = std::env::var("EDF_MODEL_URL").ok().map(SubmissionClient::new);
    match &upstream {
        Some(client) => tracing::info!("forwarding classifications to {}", client.endpoint()),
        None => tracing::warn!("EDF_MODEL_URL not set; serving stub classifications"),
    }

    run(&addr, GatewayState { upstream }).await;
}
