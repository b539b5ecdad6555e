use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;
use std::time::{Duration, Instant};

// Cache entry with absolute deadline
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

// entries and order always hold the same key set; order is oldest-first
struct CacheInner {
    entries: HashMap<String, CacheEntry>,
    order: VecDeque<String>,
}

// TTL cache with a fixed capacity. When full, the oldest-inserted entry is
// evicted first. Expired entries are purged lazily on read and are never
// handed out. A single lock keeps get/put/delete atomic across handlers.
pub struct TtlCache {
    capacity: usize,
    inner: Mutex<CacheInner>,
}

impl TtlCache {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            inner: Mutex::new(CacheInner {
                entries: HashMap::new(),
                order: VecDeque::new(),
            }),
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        let mut inner = self.inner.lock().unwrap();
        let now = Instant::now();
        let expired = match inner.entries.get(key) {
            Some(entry) if entry.expires_at > now => return Some(entry.value.clone()),
            Some(_) => true,
            None => false,
        };
        if expired {
            inner.entries.remove(key);
            inner.order.retain(|k| k != key);
        }
        None
    }

    pub fn put(&self, key: &str, value: String, ttl: Duration) {
        if self.capacity == 0 {
            return;
        }
        let mut inner = self.inner.lock().unwrap();
        let expires_at = Instant::now() + ttl;

        // overwrite keeps the original insertion slot and never evicts
        if let Some(entry) = inner.entries.get_mut(key) {
            entry.value = value;
            entry.expires_at = expires_at;
            return;
        }

        while inner.entries.len() >= self.capacity {
            match inner.order.pop_front() {
                Some(oldest) => {
                    inner.entries.remove(&oldest);
                }
                None => break,
            }
        }

        inner.order.push_back(key.to_string());
        inner.entries.insert(key.to_string(), CacheEntry { value, expires_at });
    }

    // true if an entry existed, expired or not
    pub fn delete(&self, key: &str) -> bool {
        let mut inner = self.inner.lock().unwrap();
        if inner.entries.remove(key).is_some() {
            inner.order.retain(|k| k != key);
            true
        } else {
            false
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
