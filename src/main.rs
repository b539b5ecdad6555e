use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::routing::{delete, get, post};
use clap::Parser;
use dashmap::DashMap;
use tracing::{info, warn};

use tldr_gateway::cache::TtlCache;
use tldr_gateway::config::Args;
use tldr_gateway::fetch::HttpFetcher;
use tldr_gateway::handlers::{
    about_handler, clear_cache_handler, health_handler, metrics_handler, random_pep_handler,
    tldr_handler,
};
use tldr_gateway::pipeline::SummaryPipeline;
use tldr_gateway::state::AppState;
use tldr_gateway::summarize::OpenAiSummarizer;
use tldr_gateway::tokenizer::WordTokenizer;

#[tokio::main]
async fn main() {
    // parse cli arguments
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tldr_gateway=info".into()),
        )
        .init();

    // secrets come from the environment, not argv
    let api_key = std::env::var("OPENAI_API_KEY").unwrap_or_default();
    if api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set, summarization calls will fail");
    }
    let github_token = std::env::var("GITHUB_TOKEN").ok();
    let admin_token = std::env::var("ADMIN_TOKEN").ok();
    if admin_token.is_none() {
        warn!("ADMIN_TOKEN is not set, /admin routes are open");
    }

    let client = reqwest::Client::new();
    let pipeline = SummaryPipeline::new(
        TtlCache::new(args.cache_capacity),
        Duration::from_secs(args.cache_ttl),
        Arc::new(HttpFetcher::new(client.clone(), github_token)),
        Arc::new(WordTokenizer),
        Arc::new(OpenAiSummarizer::new(
            client,
            args.openai_url.clone(),
            api_key,
            args.model.clone(),
        )),
    );

    // creating shared state
    let state = Arc::new(AppState {
        pipeline,
        rate_limiter: DashMap::new(),
        rate_limit: args.rate_limit,
        rate_window: Duration::from_secs(args.rate_window),
        admin_token,
    });

    // creating the router with routes
    let app = Router::new()
        .route("/health", get(health_handler))
        .route("/about", get(about_handler))
        .route("/metrics", get(metrics_handler))
        .route("/api/tldr", post(tldr_handler))
        .route("/api/random", get(random_pep_handler))
        .route("/admin/cache/{key}", delete(clear_cache_handler))
        .with_state(state);

    let addr = format!("0.0.0.0:{}", args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    info!("gateway running on http://localhost:{}", args.port);
    info!(
        "summarizing with {} at {}",
        args.model, args.openai_url
    );
    info!(
        "cache: capacity {}, ttl {} seconds",
        args.cache_capacity, args.cache_ttl
    );
    info!(
        "rate limit: {} requests per {} seconds",
        args.rate_limit, args.rate_window
    );
    axum::serve(listener, app).await.unwrap();
}
