pub mod routes;
pub mod state;

use crate::{
    config::Config,
    errors::{AppError, GatewayError},
    indexer::Indexer,
};
use axum::Router;
use routes::get_api_routes;
use state::AppState;
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Builds and configures the axum `Router`.
/// Returns `Ok((Router, AppState))` on success or an `AppError` if a step fails.
pub fn build(config: Arc<Config>) -> Result<(Router, AppState), AppError> {
    let indexer = Indexer::new(&config.indexer)?;

    let app_state = AppState {
        config: config.clone(),
        indexer,
    };

    let inner = get_api_routes()
        .with_state(app_state.clone())
        .fallback(GatewayError::not_found());

    let inner = NormalizePathLayer::trim_trailing_slash().layer(inner);
    let app = Router::new().fallback_service(inner);

    Ok((app, app_state))
}
