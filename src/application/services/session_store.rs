use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::sync::RwLock;
use uuid::Uuid;

/// Process-lifetime store of extracted document text, keyed by session id.
///
/// Entries are written once on upload and read by the multi-step flows.
/// Each entry carries an expiry deadline; expired entries report not-found
/// and are reclaimed by a periodic sweep so abandoned sessions do not
/// accumulate for the life of the process.
pub struct SessionStore {
    ttl: Duration,
    entries: RwLock<HashMap<Uuid, SessionEntry>>,
}

struct SessionEntry {
    text: String,
    expires_at: Instant,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub async fn create(&self, text: String) -> Uuid {
        let id = Uuid::new_v4();
        let entry = SessionEntry {
            text,
            expires_at: Instant::now() + self.ttl,
        };
        self.entries.write().await.insert(id, entry);
        id
    }

    pub async fn get(&self, id: Uuid) -> Option<String> {
        let entries = self.entries.read().await;
        entries
            .get(&id)
            .filter(|entry| entry.expires_at > Instant::now())
            .map(|entry| entry.text.clone())
    }

    /// Removes expired entries. Returns the number evicted.
    pub async fn sweep(&self) -> usize {
        let now = Instant::now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| entry.expires_at > now);
        before - entries.len()
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Spawns the background eviction task.
    pub fn start_sweeper(store: Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let evicted = store.sweep().await;
                if evicted > 0 {
                    tracing::debug!(evicted, "expired sessions evicted");
                }
            }
        })
    }
}
