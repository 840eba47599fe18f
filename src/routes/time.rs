//! routes/time.rs
use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

pub fn router() -> Router {
    Router::new().route("/time", get(server_time))
}

/* ---------------- Time ---------------- */
// 對時用:回傳伺服器 Unix 時間
async fn server_time() -> Json<Value> {
    Json(json!({ "message": chrono::Utc::now().timestamp() }))
}
