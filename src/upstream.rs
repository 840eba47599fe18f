// src/upstream.rs — 外部房間/使用者 REST 後端

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::state::RoomId;

/* ------------ 上游資料形狀 ------------ */

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id:   i64,
    pub name: String,
    pub coin: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomProfile {
    pub id:          RoomId,
    pub name:        String,
    pub limit_users: u32,
    pub creator:     String,
    pub is_active:   bool,
    pub created_at:  String,
    pub updated_at:  String,
    #[serde(default)]
    pub users:       Vec<UserProfile>,
}

// 部分更新:沒帶的欄位完全不出現在 JSON 裡
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name:        Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit_users: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator:     Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active:   Option<bool>,
}

/* ------------ 上游錯誤 ------------ */

#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(StatusCode),
}

/* ------------ 取用介面 ------------ */

#[async_trait]
pub trait RoomSource: Send + Sync {
    async fn fetch_room(&self, id: RoomId) -> Result<RoomProfile, UpstreamError>;
    async fn fetch_all_rooms(&self) -> Result<Vec<RoomProfile>, UpstreamError>;
    async fn fetch_user(&self, id: &str) -> Result<UserProfile, UpstreamError>;
    async fn submit_room_update(&self, id: RoomId, update: &RoomUpdate)
        -> Result<(), UpstreamError>;
}

/* ------------ REST 實作 ------------ */

pub struct RestRoomSource {
    client: reqwest::Client,
    base:   String,
}

impl RestRoomSource {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base: base.trim_end_matches('/').to_string(),
        })
    }

    fn rooms_url(&self, tail: &str) -> String {
        format!("{}/api/Rooms/{}", self.base, tail)
    }

    fn users_url(&self, tail: &str) -> String {
        format!("{}/api/Users/{}", self.base, tail)
    }
}

#[async_trait]
impl RoomSource for RestRoomSource {
    async fn fetch_room(&self, id: RoomId) -> Result<RoomProfile, UpstreamError> {
        let resp = self.client.get(self.rooms_url(&id.to_string())).send().await?;
        if !resp.status().is_success() {
            return Err(UpstreamError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    async fn fetch_all_rooms(&self) -> Result<Vec<RoomProfile>, UpstreamError> {
        let resp = self.client.get(self.rooms_url("")).send().await?;
        if !resp.status().is_success() {
            return Err(UpstreamError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    async fn fetch_user(&self, id: &str) -> Result<UserProfile, UpstreamError> {
        let resp = self.client.get(self.users_url(id)).send().await?;
        if !resp.status().is_success() {
            return Err(UpstreamError::Status(resp.status()));
        }
        Ok(resp.json().await?)
    }

    async fn submit_room_update(
        &self,
        id: RoomId,
        update: &RoomUpdate,
    ) -> Result<(), UpstreamError> {
        // 上游沿用 POST 承載房間異動
        let resp = self
            .client
            .post(self.rooms_url(&id.to_string()))
            .json(update)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(UpstreamError::Status(resp.status()));
        }
        Ok(())
    }
}
