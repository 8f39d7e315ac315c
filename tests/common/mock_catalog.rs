//! Local HTTP catalog that serves queued JSON responses and records requests.

#![allow(dead_code)]

use axum::extract::{Request, State};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Router;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::{watch, Mutex};

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    /// Raw (still percent-encoded) path.
    pub path: String,
    pub query: Option<String>,
}

#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub body: String,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
        }
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self {
            status,
            body: serde_json::json!({ "message": message }).to_string(),
        }
    }
}

#[derive(Default)]
struct Exchange {
    requests: Vec<CapturedRequest>,
    responses: VecDeque<MockResponse>,
}

type Shared = Arc<Mutex<Exchange>>;

pub struct MockCatalog {
    base_url: String,
    exchange: Shared,
    _shutdown: watch::Sender<()>,
}

impl MockCatalog {
    pub async fn start() -> Self {
        let exchange = Shared::default();
        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&exchange));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock catalog");
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let (shutdown, mut stopped) = watch::channel(());
        tokio::spawn(async move {
            let _ = axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = stopped.changed().await;
                })
                .await;
        });

        Self {
            base_url,
            exchange,
            _shutdown: shutdown,
        }
    }

    /// Queue the next answer. With nothing queued the catalog answers 404.
    pub async fn enqueue(&self, response: MockResponse) {
        self.exchange.lock().await.responses.push_back(response);
    }

    pub async fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.exchange.lock().await.requests.clone()
    }

    pub fn base_url(&self) -> String {
        self.base_url.clone()
    }
}

async fn respond(State(exchange): State<Shared>, req: Request) -> impl IntoResponse {
    let mut exchange = exchange.lock().await;
    exchange.requests.push(CapturedRequest {
        method: req.method().to_string(),
        path: req.uri().path().to_string(),
        query: req.uri().query().map(String::from),
    });
    let response = exchange
        .responses
        .pop_front()
        .unwrap_or_else(|| MockResponse::error(404, "nothing queued"));

    (
        StatusCode::from_u16(response.status).unwrap(),
        [(header::CONTENT_TYPE, "application/json")],
        response.body,
    )
}
