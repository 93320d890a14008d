// Stub Twitch endpoints plus a status server wired against them.
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::json;
use std::{
    collections::HashMap,
    net::SocketAddr,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

pub const CLIENT_ID: &str = "stub-client-id";
pub const CLIENT_SECRET: &str = "stub-client-secret";
pub const STUB_TOKEN: &str = "stub-token";

// Channels the stub knows how to answer for.
pub const LIVE_CHANNEL: &str = "live_channel";
pub const OFFLINE_CHANNEL: &str = "offline_channel";
pub const BROKEN_CHANNEL: &str = "broken_channel";

#[derive(Clone, Default)]
pub struct TwitchStub {
    pub token_calls: Arc<AtomicUsize>,
    pub stream_calls: Arc<AtomicUsize>,
}

impl TwitchStub {
    pub fn token_calls(&self) -> usize {
        self.token_calls.load(Ordering::SeqCst)
    }

    pub fn stream_calls(&self) -> usize {
        self.stream_calls.load(Ordering::SeqCst)
    }
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|value| value.to_str().ok())
}

async fn token(
    State(stub): State<TwitchStub>,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    stub.token_calls.fetch_add(1, Ordering::SeqCst);

    let valid = query.get("client_id").map(String::as_str) == Some(CLIENT_ID)
        && query.get("client_secret").map(String::as_str) == Some(CLIENT_SECRET)
        && query.get("grant_type").map(String::as_str) == Some("client_credentials");
    if !valid {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": 400, "message": "invalid client secret"})),
        )
            .into_response();
    }

    Json(json!({
        "access_token": STUB_TOKEN,
        "expires_in": 3600,
        "token_type": "bearer"
    }))
    .into_response()
}

async fn streams(
    State(stub): State<TwitchStub>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    stub.stream_calls.fetch_add(1, Ordering::SeqCst);

    let bearer = format!("Bearer {STUB_TOKEN}");
    if header(&headers, "authorization") != Some(bearer.as_str())
        || header(&headers, "client-id") != Some(CLIENT_ID)
    {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "Unauthorized", "status": 401, "message": "Invalid OAuth token"})),
        )
            .into_response();
    }

    match query.get("user_login").map(String::as_str) {
        Some(LIVE_CHANNEL) => Json(json!({
            "data": [{"id": "1", "user_login": LIVE_CHANNEL, "user_name": "Live", "type": "live"}],
            "pagination": {}
        }))
        .into_response(),
        Some(BROKEN_CHANNEL) => "<html>not json</html>".into_response(),
        _ => Json(json!({"data": [], "pagination": {}})).into_response(),
    }
}

async fn spawn_on_ephemeral_port(app: Router) -> SocketAddr {
    // Bind to an ephemeral port to avoid collisions with local services.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("stub server failed");
    });
    addr
}

pub async fn spawn_twitch_stub() -> (TwitchStub, String) {
    let stub = TwitchStub::default();
    let app = Router::new()
        .route("/oauth2/token", post(token))
        .route("/helix/streams", get(streams))
        .with_state(stub.clone());

    let addr = spawn_on_ephemeral_port(app).await;
    (stub, format!("http://{addr}"))
}

// Start the status server against a fresh stub and return its base URL.
pub async fn spawn_status_server(channel: &str, client_secret: &str) -> (TwitchStub, String) {
    let (stub, stub_url) = spawn_twitch_stub().await;

    let vars: HashMap<&str, String> = HashMap::from([
        ("TWITCH_CLIENT_ID", CLIENT_ID.to_string()),
        ("TWITCH_CLIENT_SECRET", client_secret.to_string()),
        ("TWITCH_CHANNEL", channel.to_string()),
        ("TWITCH_AUTH_URL", format!("{stub_url}/oauth2/token")),
        ("TWITCH_API_URL", format!("{stub_url}/helix")),
    ]);
    let config = status_server::Config::from_lookup(|key| vars.get(key).cloned())
        .expect("test config should be complete");
    let state = status_server::build_state(&config);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral test port");
    let addr = listener.local_addr().expect("get local addr");
    tokio::spawn(async move {
        status_server::serve(listener, state)
            .await
            .expect("server failed");
    });

    (stub, format!("http://{addr}"))
}
