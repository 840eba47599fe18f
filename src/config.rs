// src/config.rs — 全部設定集中到 .env / 環境變數

use std::env;
use std::time::Duration;

use anyhow::Context;

const DEFAULT_UPSTREAM: &str = "https://myfistwebsite-204102.appspot.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_addr:        String,
    pub upstream_base:    String,
    pub upstream_timeout: Duration,
    pub room_ttl:         Duration,
    pub cache_sweep:      Duration,   // 被動清掃間隔,通常比 TTL 長;0 停用
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            bind_addr:        env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".into()),
            upstream_base:    env::var("UPSTREAM_BASE").unwrap_or_else(|_| DEFAULT_UPSTREAM.into()),
            upstream_timeout: secs_var("UPSTREAM_TIMEOUT_SECS", 10)?,
            room_ttl:         secs_var("ROOM_TTL_SECS", 300)?,
            cache_sweep:      secs_var("CACHE_SWEEP_SECS", 600)?,
        })
    }
}

fn secs_var(key: &str, default: u64) -> anyhow::Result<Duration> {
    let secs = match env::var(key) {
        Ok(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("{key} must be a number of seconds"))?,
        Err(_) => default,
    };
    Ok(Duration::from_secs(secs))
}
