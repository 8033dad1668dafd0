use crate::api::{governance, root, stake};
use crate::server::state::AppState;
use axum::{Router, routing::get};

pub fn get_api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root::route))
        .route("/stake/delegations", get(stake::delegations::route))
        .route("/gov-action-proposals", get(governance::proposals::route))
}
