use crate::{config::Config, indexer::Indexer};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub indexer: Indexer,
}
