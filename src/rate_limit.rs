use std::time::{Duration, Instant};

use dashmap::DashMap;

// Rate limit entry - tracks requests per requester
pub struct RateLimitEntry {
    pub count: u32,
    pub window_start: Instant,
}

// fixed-window check; the tldr cooldown from the chat front-end maps onto
// this with limit=1, window=10s per requester
pub fn check_rate_limit(
    limiter: &DashMap<String, RateLimitEntry>,
    requester: &str,
    limit: u32,
    window: Duration,
) -> bool {
    let now = Instant::now();

    let mut entry = limiter
        .entry(requester.to_string())
        .or_insert(RateLimitEntry {
            count: 0,
            window_start: now,
        });

    // window expired..? reset it
    if entry.window_start.elapsed() > window {
        entry.count = 1;
        entry.window_start = now;
        return true;
    }

    // under limit..? allow
    if entry.count < limit {
        entry.count += 1;
        return true;
    }

    // over limit
    false
}
