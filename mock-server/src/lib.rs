use std::collections::BTreeMap;

use axum::{
    extract::Path,
    http::{HeaderMap, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::net::TcpListener;
use uuid::Uuid;

/// What `/echo` reports about the request it received. Header names come
/// back lowercased — that is how they arrive on the wire.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EchoReply {
    pub request_id: Uuid,
    pub method: String,
    pub headers: BTreeMap<String, String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/json", get(fixture).post(fixture))
        .route("/echo", get(echo).post(echo))
        .route("/status/{code}", get(status_passthrough))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn fixture() -> Json<serde_json::Value> {
    Json(json!({ "test": "data" }))
}

async fn echo(method: Method, headers: HeaderMap) -> Json<EchoReply> {
    let headers = headers
        .iter()
        .map(|(name, value)| {
            (
                name.as_str().to_string(),
                value.to_str().unwrap_or_default().to_string(),
            )
        })
        .collect();
    Json(EchoReply {
        request_id: Uuid::new_v4(),
        method: method.to_string(),
        headers,
    })
}

async fn status_passthrough(Path(code): Path<u16>) -> Result<impl IntoResponse, StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    Ok((status, Json(json!({ "status": code }))))
}
