// src/manager.rs — 房間狀態:cache-aside 讀取 + 進房名單維護

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::cache::TtlCache;
use crate::error::{AppErr, AppResult};
use crate::state::{parse_room_id, CachedRoom, RoomId};
use crate::upstream::RoomSource;

pub struct RoomManager {
    cache:  TtlCache<RoomId, CachedRoom>,
    source: Arc<dyn RoomSource>,
    joins:  RwLock<HashMap<RoomId, Arc<Mutex<()>>>>,   // 每房一把鎖
}

impl RoomManager {
    pub fn new(cache: TtlCache<RoomId, CachedRoom>, source: Arc<dyn RoomSource>) -> Self {
        Self { cache, source, joins: RwLock::new(HashMap::new()) }
    }

    /* ---------------- 讀房 ---------------- */

    pub async fn current_room(&self, room_id: &str) -> AppResult<CachedRoom> {
        let id = parse_room_id(room_id)?;

        if let Some(room) = self.cache.get(&id).await {
            return Ok(room);
        }

        let profile = self
            .source
            .fetch_room(id)
            .await
            .map_err(AppErr::SourceUnavailable)?;
        self.cache
            .set(id, CachedRoom { id, users: profile.users })
            .await;

        // 寫後立即讀不到視為異常,不重試
        self.cache.get(&id).await.ok_or(AppErr::CachePersistence(id))
    }

    /* ---------------- 進房 ---------------- */

    pub async fn join_room(&self, room_id: RoomId, user_id: &str) -> AppResult<()> {
        let lock = self.join_lock(room_id).await;
        let _guard = lock.lock().await;

        // 冷快取時默默跳過,下一次讀房會重抓完整名單
        let Some(mut room) = self.cache.get(&room_id).await else {
            return Ok(());
        };

        let already_in = user_id
            .parse::<i64>()
            .ok()
            .map(|uid| room.has_user(uid))
            .unwrap_or(false);
        if already_in {
            return Ok(());
        }

        let user = self
            .source
            .fetch_user(user_id)
            .await
            .map_err(AppErr::UserFetchFailed)?;
        room.users.push(user);
        self.cache.set(room_id, room).await;   // 名單變動才重設 TTL
        Ok(())
    }

    async fn join_lock(&self, room_id: RoomId) -> Arc<Mutex<()>> {
        self.joins.write().await.entry(room_id).or_default().clone()
    }
}
