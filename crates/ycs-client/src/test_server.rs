//! Local HTTP server serving canned API responses.
//!
//! The user agent selects failure modes: `http-error` gets a 503, and
//! `data-error` gets a 200 with a body that is not JSON.

use std::sync::{Arc, Mutex};
use std::thread;

use axum::Router;
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::Client;

const SERVICES: &str = include_str!("../testdata/services.json");
const INCIDENTS: &str = include_str!("../testdata/incidents.json");
const INCIDENT: &str = include_str!("../testdata/incident.json");

/// Request as seen by the server.
#[derive(Debug, Clone)]
pub(crate) struct RecordedRequest {
    pub path: String,
    pub query: Vec<(String, String)>,
    pub user_agent: Option<String>,
    pub accept: Option<String>,
}

type Requests = Arc<Mutex<Vec<RecordedRequest>>>;

pub(crate) struct TestServer {
    url: String,
    requests: Requests,
}

impl TestServer {
    /// Bind to a free port and serve on a runtime in a background thread.
    pub(crate) fn start() -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.set_nonblocking(true).unwrap();
        let url = format!("http://{}", listener.local_addr().unwrap());
        let requests = Requests::default();

        let app = create_router(Arc::clone(&requests));
        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async move {
                let listener = tokio::net::TcpListener::from_std(listener).unwrap();
                axum::serve(listener, app).await.unwrap();
            });
        });

        Self { url, requests }
    }

    /// URL of a port nobody listens on.
    pub(crate) fn unused_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        format!("http://{}", listener.local_addr().unwrap())
    }

    pub(crate) fn url(&self) -> &str {
        &self.url
    }

    /// Client pointed at this server.
    pub(crate) fn client(&self) -> Client {
        Client::builder().api_url(&self.url).build()
    }

    pub(crate) fn last_request(&self) -> RecordedRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }

    pub(crate) fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

/// Client whose user agent triggers a failure mode.
pub(crate) fn failing_client(server: &TestServer, mode: &str) -> Client {
    Client::builder()
        .api_url(server.url())
        .user_agent(mode, "1")
        .build()
}

fn create_router(requests: Requests) -> Router {
    Router::new()
        .route("/services", get(|| async { json(SERVICES) }))
        .route("/incidents", get(|| async { json(INCIDENTS) }))
        .route("/incidents/{id}", get(get_incident))
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(requests, record))
}

/// Record every request, then apply the user-agent failure modes.
async fn record(State(requests): State<Requests>, request: Request, next: Next) -> Response {
    let headers = request.headers();
    let recorded = RecordedRequest {
        path: request.uri().path().to_owned(),
        query: request
            .uri()
            .query()
            .map(|q| serde_urlencoded::from_str(q).unwrap())
            .unwrap_or_default(),
        user_agent: header_value(headers, header::USER_AGENT.as_str()),
        accept: header_value(headers, header::ACCEPT.as_str()),
    };
    let user_agent = recorded.user_agent.clone().unwrap_or_default();
    requests.lock().unwrap().push(recorded);

    if user_agent.contains("http-error") {
        return StatusCode::SERVICE_UNAVAILABLE.into_response();
    }
    if user_agent.contains("data-error") {
        return json("FFFF");
    }
    next.run(request).await
}

async fn get_incident(Path(id): Path<u64>) -> Response {
    if id == 972 { json(INCIDENT) } else { not_found().await }
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, json("{}")).into_response()
}

fn json(body: &'static str) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned)
}
