use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

pub async fn list_tools_handler(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "tools": state.dispatcher.registry().list() }))
}
