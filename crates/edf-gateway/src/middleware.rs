//! Layer hooks for the gateway router.
use tower_http::cors::CorsLayer;

/// The gateway only serves its own frontend; permissive CORS keeps local
/// development across ports working.
pub fn cors() -> CorsLayer {
    CorsLayer::permissive()
}
