use crate::config::IndexerConfig;
use crate::errors::{AppError, GatewayError};
use crate::pagination::{ApplyPagination, Pagination};
use crate::types::{ApiResult, ResourcePage};
use axum::Json;
use reqwest::{Client, Method, Url};
use tracing::{debug, error};

const DELEGATIONS_PATH: &str = "stake/delegations";
const PROPOSALS_PATH: &str = "gov-action-proposals";

const DELEGATIONS_FETCH_ERROR: &str = "Can not fetch stake delegations.";
const PROPOSALS_FETCH_ERROR: &str = "Can not fetch Gov Action Proposals.";

/// Client for the chain indexer's REST API.
///
/// The base URL and request timeout come from [`IndexerConfig`], validated
/// once at startup. Each listing call fetches exactly one page and either
/// yields a [`ResourcePage`] or a [`GatewayError`] carrying the upstream
/// status; there is no retrying and no caching.
#[derive(Clone)]
pub struct Indexer {
    base_url: Url,
    client: Client,
}

impl Indexer {
    pub fn new(config: &IndexerConfig) -> Result<Self, AppError> {
        let base_url =
            Url::parse(&config.endpoint).map_err(|e| AppError::Indexer(e.to_string()))?;
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Indexer(format!("failed to build client: {e}")))?;

        Ok(Self { base_url, client })
    }

    pub async fn stake_delegations(&self, pagination: &Pagination) -> ApiResult<ResourcePage> {
        self.fetch_page(DELEGATIONS_PATH, DELEGATIONS_FETCH_ERROR, pagination)
            .await
    }

    pub async fn gov_action_proposals(&self, pagination: &Pagination) -> ApiResult<ResourcePage> {
        self.fetch_page(PROPOSALS_PATH, PROPOSALS_FETCH_ERROR, pagination)
            .await
    }

    async fn fetch_page(
        &self,
        path: &str,
        fetch_error: &str,
        pagination: &Pagination,
    ) -> ApiResult<ResourcePage> {
        let mut url = self.base_url.join(path)?;
        url.apply_pagination(pagination);

        let url_str = url.to_string();
        debug!(path, url = %url_str, ?pagination, "Indexer GET");

        let resp = self
            .client
            .request(Method::GET, url)
            .send()
            .await
            .map_err(|e| {
                error!(path, url = %url_str, error = %e, "Indexer request failed");
                GatewayError::from(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            // The body of a failed upstream response is not trusted to be JSON.
            return Err(GatewayError::upstream_failure(status, fetch_error));
        }

        let body_text = resp.text().await?;

        let items: serde_json::Value = serde_json::from_str(&body_text).map_err(|e| {
            error!(
                path,
                url = %url_str,
                status = %status,
                response_body = %body_text,
                error = %e,
                "Indexer returned a non-JSON body"
            );
            e
        })?;

        Ok(Json(ResourcePage {
            items,
            total: 0,
            total_pages: 0,
            page: pagination.page,
            count: pagination.count,
        }))
    }
}
