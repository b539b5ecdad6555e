mod admin;
mod health;
mod metrics;
mod tldr;

pub use admin::clear_cache_handler;
pub use health::{about_handler, health_handler};
pub use metrics::metrics_handler;
pub use tldr::{random_pep_handler, tldr_handler};
