use std::sync::Arc;

use serde::Serialize;

use crate::error::{AppErr, AppResult};
use crate::manager::RoomManager;
use crate::upstream::{RoomSource, UserProfile};

pub type RoomId = u32;

/* ------------ 快取房間 ------------ */
#[derive(Debug, Clone, Serialize)]
pub struct CachedRoom {
    pub id:    RoomId,
    pub users: Vec<UserProfile>,           // 依 id 去重
}

impl CachedRoom {
    pub fn has_user(&self, user_id: i64) -> bool {
        self.users.iter().any(|u| u.id == user_id)
    }
}

/* ------------ 房號解析 ------------ */
pub fn parse_room_id(raw: &str) -> AppResult<RoomId> {
    match raw.parse::<RoomId>() {
        Ok(id) if id != 0 => Ok(id),
        _ => Err(AppErr::InvalidRoomId(raw.to_string())),   // 0 或非數字都拒絕
    }
}

pub type SharedManager = Arc<RoomManager>;
pub type SharedSource  = Arc<dyn RoomSource>;
