//! routes/rooms.rs
use axum::{
    extract::{Extension, Json, Path, Query},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::{
    error::{AppErr, AppResult},
    state::{parse_room_id, CachedRoom, SharedManager, SharedSource},
    upstream::RoomUpdate,
};

#[derive(Deserialize)]
struct RoomsQuery {
    user_id: Option<String>,
}

#[derive(Serialize)]
struct RoomSummary {
    name:         String,
    current_user: usize,
    max_user:     u32,
}

#[derive(Deserialize)]
struct JoinForm {
    #[serde(default)]
    user_id:     String,
    room_name:   Option<String>,
    limit_users: Option<u32>,
    creator:     Option<String>,
    is_active:   Option<bool>,
}

pub fn router() -> Router {
    Router::new()
        .route("/rooms", get(list_rooms))
        .route("/room/:room_id", get(current_room).put(join_room))
}

/* ---------------- 房間總覽 ---------------- */
async fn list_rooms(
    Extension(source): Extension<SharedSource>,
    Query(q): Query<RoomsQuery>,
) -> AppResult<Json<Value>> {
    let rooms: Vec<RoomSummary> = source
        .fetch_all_rooms()
        .await
        .map_err(AppErr::SourceUnavailable)?
        .into_iter()
        .map(|r| RoomSummary {
            name:         r.name,
            current_user: r.users.len(),
            max_user:     r.limit_users,
        })
        .collect();

    let user = source
        .fetch_user(q.user_id.as_deref().unwrap_or_default())
        .await
        .map_err(AppErr::UserFetchFailed)?;

    Ok(Json(json!({ "rooms": rooms, "user": user })))
}

/* ---------------- 讀房 ---------------- */
async fn current_room(
    Extension(manager): Extension<SharedManager>,
    Path(room_id): Path<String>,
) -> AppResult<Json<CachedRoom>> {
    Ok(Json(manager.current_room(&room_id).await?))
}

/* ---------------- 進房 ---------------- */
async fn join_room(
    Extension(manager): Extension<SharedManager>,
    Extension(source): Extension<SharedSource>,
    Path(room_id): Path<String>,
    Json(form): Json<JoinForm>,
) -> AppResult<Json<Value>> {
    let id = parse_room_id(&room_id)?;

    // 先把房間異動送回上游,順便確認房間存在
    let update = RoomUpdate {
        name:        form.room_name,
        limit_users: form.limit_users,
        creator:     form.creator,
        is_active:   form.is_active,
    };
    source
        .submit_room_update(id, &update)
        .await
        .map_err(AppErr::SourceUnavailable)?;

    manager.join_room(id, &form.user_id).await?;

    Ok(Json(json!({
        "message": format!("user {} joined room {id}", form.user_id)
    })))
}
