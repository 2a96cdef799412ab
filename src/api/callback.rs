use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{types::PendingCode, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<PendingCode>>>,
) -> Html<&'static str> {
    let mut pending = shared_state.lock().await;

    if let Some(error) = params.get("error") {
        warning!("Authorization was denied: {}", error);
        pending.result = Some(Err(format!("authorization denied: {error}")));
        return Html("<h4>Authorization denied.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    if let Some(expected) = &pending.expected_state {
        if params.get("state") != Some(expected) {
            pending.result = Some(Err("state mismatch in callback".to_string()));
            return Html("<h4>State mismatch. Login failed.</h4>");
        }
    }

    pending.result = Some(Ok(code.clone()));
    Html("<h2>Authorization received.</h2><p>You can close this browser window.</p>")
}
