//! A local axum app standing in for the Glosbe translate endpoint.

#![allow(clippy::unwrap_used, dead_code)]

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::RawQuery;
use axum::http::{StatusCode, header};
use axum::routing::get;
use tokio::runtime::Runtime;

pub const TWO_HITS: &str = r#"{"result":"ok","tuc":[{"phrase":{"text":"bonjour"}},{"meaning":{"text":"x"}},{"phrase":{"text":"salut"}}]}"#;

/// Answers every `GET /gapi/translate` with one canned response and keeps
/// the query string of the last request.
pub struct Responder {
    pub url: String,
    query: Arc<Mutex<Option<String>>>,
    // Keeps the server alive for blocking tests that drive the binary.
    _runtime: Option<Runtime>,
}

impl Responder {
    /// Raw query string of the last request, e.g. `from=en&dest=fr&...`.
    pub fn query(&self) -> Option<String> {
        self.query.lock().unwrap().clone()
    }
}

async fn bind_and_spawn(
    status: StatusCode,
    body: &'static str,
) -> (String, Arc<Mutex<Option<String>>>) {
    let query = Arc::new(Mutex::new(None));
    let seen = Arc::clone(&query);

    let app = Router::new().route(
        "/gapi/translate",
        get(move |RawQuery(raw): RawQuery| {
            let seen = Arc::clone(&seen);
            async move {
                *seen.lock().unwrap() = raw;
                (status, [(header::CONTENT_TYPE, "application/json; charset=utf-8")], body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/gapi/translate"), query)
}

/// Serves on the caller's runtime, for `#[tokio::test]`s.
pub async fn serve(status: StatusCode, body: &'static str) -> Responder {
    let (url, query) = bind_and_spawn(status, body).await;
    Responder {
        url,
        query,
        _runtime: None,
    }
}

/// Serves on a runtime of its own, for plain `#[test]`s that run the binary.
pub fn serve_blocking(status: StatusCode, body: &'static str) -> Responder {
    let runtime = Runtime::new().unwrap();
    let (url, query) = runtime.block_on(bind_and_spawn(status, body));
    Responder {
        url,
        query,
        _runtime: Some(runtime),
    }
}

/// Environment variables that would route localhost traffic through a proxy.
pub const PROXY_VARS: &[&str] = &[
    "HTTP_PROXY",
    "http_proxy",
    "HTTPS_PROXY",
    "https_proxy",
    "ALL_PROXY",
    "all_proxy",
];
