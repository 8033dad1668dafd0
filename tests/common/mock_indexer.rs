use axum::{
    Router,
    http::{StatusCode, Uri},
};
use std::sync::{Arc, Mutex};

/// In-process stand-in for the chain indexer's REST API.
///
/// Answers every request with a fixed status and body, and records each
/// request's path and query string so tests can assert on the composed
/// upstream URL.
pub struct MockIndexer {
    pub url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockIndexer {
    pub async fn respond_with(status: StatusCode, body: &str) -> Self {
        let requests: Arc<Mutex<Vec<String>>> = Arc::default();
        let body = body.to_string();

        let mock_app = Router::new().fallback({
            let requests = requests.clone();
            move |uri: Uri| {
                let requests = requests.clone();
                let body = body.clone();
                async move {
                    requests.lock().unwrap().push(uri.to_string());
                    (status, body)
                }
            }
        });

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let url = format!("http://{addr}");

        tokio::spawn(async move {
            axum::serve(listener, mock_app).await.unwrap();
        });

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        Self { url, requests }
    }

    pub fn unreachable() -> Self {
        Self {
            url: "http://127.0.0.1:1".to_string(),
            requests: Arc::default(),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}
