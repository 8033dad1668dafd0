use crate::{
    pagination::{Pagination, PaginationQuery},
    server::state::AppState,
    types::{ApiResult, ResourcePage},
};
use axum::extract::{Query, State};

pub async fn route(
    State(state): State<AppState>,
    Query(pagination_query): Query<PaginationQuery>,
) -> ApiResult<ResourcePage> {
    let pagination = Pagination::from_query(pagination_query);

    state.indexer.gov_action_proposals(&pagination).await
}
