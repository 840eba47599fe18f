use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::state::RoomId;
use crate::upstream::UpstreamError;

pub type AppResult<T> = Result<T, AppErr>;

#[derive(thiserror::Error, Debug)]   // ✅ thiserror 宏
pub enum AppErr {
    #[error("invalid room id: {0}")]
    InvalidRoomId(String),

    #[error("room source unavailable: {0}")]
    SourceUnavailable(#[source] UpstreamError),

    #[error("user fetch failed: {0}")]
    UserFetchFailed(#[source] UpstreamError),

    #[error("room {0} vanished from cache right after write")]
    CachePersistence(RoomId),
}

impl IntoResponse for AppErr {
    fn into_response(self) -> axum::response::Response {
        let code = match self {
            AppErr::InvalidRoomId(_)     => StatusCode::BAD_REQUEST,
            AppErr::SourceUnavailable(_) => StatusCode::BAD_GATEWAY,
            AppErr::UserFetchFailed(_)   => StatusCode::BAD_GATEWAY,
            AppErr::CachePersistence(_)  => StatusCode::INTERNAL_SERVER_ERROR,
        };
        tracing::warn!(error = %self, status = code.as_u16(), "request failed");
        (code, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
