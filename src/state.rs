use std::time::Duration;

use dashmap::DashMap;

use crate::pipeline::SummaryPipeline;
use crate::rate_limit::RateLimitEntry;
// app's shared state

pub struct AppState {
    pub pipeline: SummaryPipeline,
    pub rate_limiter: DashMap<String, RateLimitEntry>,
    pub rate_limit: u32,       // max requests allowed per requester
    pub rate_window: Duration, // duration of the rate limit window
    pub admin_token: Option<String>, // when set, /admin routes require it
}
