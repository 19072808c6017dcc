//! Fake article API shared by the web client's tests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};

use crate::article_client::ArticleClient;

pub const ARTICLE: &str = "The Riverside Rovers clinched the regional title on Saturday, \
    beating their rivals 3-1 in front of a sold-out home crowd.";

pub const GENERATED_AT: &str = "2026-10-16T09:30:00.123456Z";

#[derive(Clone)]
pub struct FakeApi {
    pub base_url: String,
    status: StatusCode,
    reply: Value,
    pub hits: Arc<AtomicUsize>,
    pub bodies: Arc<Mutex<Vec<Value>>>,
}

impl FakeApi {
    pub fn hit_count(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }
}

async fn fake_generate(
    State(api): State<FakeApi>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    api.hits.fetch_add(1, Ordering::SeqCst);
    api.bodies.lock().unwrap().push(body);
    (api.status, Json(api.reply.clone()))
}

/// Serves a fake `/generate-article` on an ephemeral port.
pub async fn spawn_api(status: StatusCode, reply: Value) -> (ArticleClient, FakeApi) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let api = FakeApi {
        base_url: format!("http://{addr}"),
        status,
        reply,
        hits: Arc::new(AtomicUsize::new(0)),
        bodies: Arc::new(Mutex::new(Vec::new())),
    };
    let app = Router::new()
        .route("/generate-article", post(fake_generate))
        .with_state(api.clone());

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (ArticleClient::new(api.base_url.clone()), api)
}

pub fn success_reply(headline: &str) -> Value {
    json!({
        "headline": headline,
        "article": ARTICLE,
        "generated_at": GENERATED_AT,
        "word_count": ARTICLE.split_whitespace().count()
    })
}
