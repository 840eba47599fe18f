use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::{self, Instant};

/* ------------ TTL 快取 ------------ */

struct Entry<V> {
    value:      V,
    expires_at: Instant,
}

pub struct TtlCache<K, V> {
    inner:       Arc<RwLock<HashMap<K, Entry<V>>>>,
    default_ttl: Duration,
}

impl<K, V> Clone for TtlCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            inner:       Arc::clone(&self.inner),
            default_ttl: self.default_ttl,
        }
    }
}

impl<K: Eq + Hash, V: Clone> TtlCache<K, V> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            inner: Arc::new(RwLock::new(HashMap::new())),
            default_ttl,
        }
    }

    // 過期視同不存在;讀取不會延長 TTL
    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.read().await;
        map.get(key).and_then(|e| {
            if Instant::now() >= e.expires_at {
                return None;
            }
            Some(e.value.clone())
        })
    }

    // 插入或覆寫;覆寫即重設 TTL
    pub async fn set(&self, key: K, value: V) {
        let expires_at = Instant::now() + self.default_ttl;
        self.inner
            .write()
            .await
            .insert(key, Entry { value, expires_at });
    }

    // 實體筆數,含尚未清掃的過期項
    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn sweep_expired(&self) -> usize {
        let now = Instant::now();
        let mut map = self.inner.write().await;
        let before = map.len();
        map.retain(|_, e| now < e.expires_at);
        before - map.len()
    }
}

/* ------------ 清掃任務 ------------ */
pub async fn sweep_task<K, V>(cache: TtlCache<K, V>, every: Duration)
where
    K: Eq + Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    let mut tick = time::interval(every);
    loop {
        tick.tick().await;
        let removed = cache.sweep_expired().await;
        if removed > 0 {
            let remaining = cache.len().await;
            tracing::debug!(removed, remaining, "cache sweep");
        }
    }
}
