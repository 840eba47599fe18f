// src/testutil.rs — 測試用上游替身

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::state::RoomId;
use crate::upstream::{RoomProfile, RoomSource, RoomUpdate, UpstreamError, UserProfile};

#[derive(Default)]
pub struct StubSource {
    rooms: HashMap<RoomId, RoomProfile>,
    users: HashMap<i64, UserProfile>,

    fail_rooms:   AtomicBool,
    fail_users:   AtomicBool,
    fail_updates: AtomicBool,
    user_delay:   Duration,

    room_fetches: AtomicUsize,
    user_fetches: AtomicUsize,
    updates:      AtomicUsize,
}

impl StubSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_room(mut self, id: RoomId, users: &[(i64, &str, i64)]) -> Self {
        self.rooms.insert(id, RoomProfile {
            id,
            name:        format!("room-{id}"),
            limit_users: 8,
            creator:     "stub".into(),
            is_active:   true,
            created_at:  "2024-01-01".into(),
            updated_at:  "2024-01-01".into(),
            users:       users
                .iter()
                .map(|&(id, name, coin)| UserProfile { id, name: name.into(), coin })
                .collect(),
        });
        self
    }

    pub fn with_user(mut self, id: i64, name: &str, coin: i64) -> Self {
        self.users.insert(id, UserProfile { id, name: name.into(), coin });
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.user_delay = delay;
        self
    }

    pub fn set_fail_rooms(&self, on: bool) {
        self.fail_rooms.store(on, Ordering::SeqCst);
    }

    pub fn set_fail_users(&self, on: bool) {
        self.fail_users.store(on, Ordering::SeqCst);
    }

    pub fn set_fail_updates(&self, on: bool) {
        self.fail_updates.store(on, Ordering::SeqCst);
    }

    pub fn room_fetches(&self) -> usize {
        self.room_fetches.load(Ordering::SeqCst)
    }

    pub fn user_fetches(&self) -> usize {
        self.user_fetches.load(Ordering::SeqCst)
    }

    pub fn updates(&self) -> usize {
        self.updates.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RoomSource for StubSource {
    async fn fetch_room(&self, id: RoomId) -> Result<RoomProfile, UpstreamError> {
        self.room_fetches.fetch_add(1, Ordering::SeqCst);
        if self.fail_rooms.load(Ordering::SeqCst) {
            return Err(UpstreamError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        self.rooms
            .get(&id)
            .cloned()
            .ok_or(UpstreamError::Status(StatusCode::NOT_FOUND))
    }

    async fn fetch_all_rooms(&self) -> Result<Vec<RoomProfile>, UpstreamError> {
        if self.fail_rooms.load(Ordering::SeqCst) {
            return Err(UpstreamError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        let mut rooms: Vec<_> = self.rooms.values().cloned().collect();
        rooms.sort_by_key(|r| r.id);
        Ok(rooms)
    }

    async fn fetch_user(&self, id: &str) -> Result<UserProfile, UpstreamError> {
        self.user_fetches.fetch_add(1, Ordering::SeqCst);
        if !self.user_delay.is_zero() {
            tokio::time::sleep(self.user_delay).await;
        }
        if self.fail_users.load(Ordering::SeqCst) {
            return Err(UpstreamError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        id.parse::<i64>()
            .ok()
            .and_then(|uid| self.users.get(&uid).cloned())
            .ok_or(UpstreamError::Status(StatusCode::NOT_FOUND))
    }

    async fn submit_room_update(
        &self,
        _id: RoomId,
        _update: &RoomUpdate,
    ) -> Result<(), UpstreamError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if self.fail_updates.load(Ordering::SeqCst) {
            return Err(UpstreamError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(())
    }
}
