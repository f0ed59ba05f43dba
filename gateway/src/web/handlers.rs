use axum::{extract::State, response::Html, Json};
use serde_json::{json, Value};

use crate::registry::SubsystemStatus;
use crate::web::AppState;

const GREETING: &str = "<!DOCTYPE html><article><h1>Hello World!</h1><section><p>The gateway can now serve HTTP requests!</p></section></article></html>";

const MAGIC: &str = " /\\_/\\\n( o.o )\n > ^ <\n";

pub async fn root() -> Html<&'static str> {
    Html(GREETING)
}

/// Aggregate health over every registered subsystem.
///
/// An entry counts as bad only when its status is `Bad`; Starting,
/// ShuttingDown, and Shutdown are all treated as good. The health signal is
/// carried in the body, not the HTTP status, which is 200 unconditionally.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    let statuses = state.registry.get_all().await;

    let systems_bad = statuses
        .values()
        .filter(|status| matches!(status, SubsystemStatus::Bad))
        .count();

    Json(json!({ "ok": systems_bad == 0 }))
}

// magic endpoint
pub async fn kitty() -> &'static str {
    MAGIC
}
