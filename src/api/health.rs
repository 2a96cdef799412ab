use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::types::PendingCode;

pub async fn health(Extension(shared_state): Extension<Arc<Mutex<PendingCode>>>) -> Json<Value> {
    let pending = shared_state.lock().await;
    Json(json!({
        "status": "ok",
        "awaiting_code": pending.result.is_none(),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
