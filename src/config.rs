use clap::Parser;

// CLI argument structure. Secrets stay out of argv: OPENAI_API_KEY,
// GITHUB_TOKEN and ADMIN_TOKEN are read from the environment in main.
#[derive(Parser, Debug, Clone)]
#[command(name = "tldr-gateway")]
#[command(about = "Caching summarization gateway for Python PEPs and CPython issues")]
pub struct Args {
    // Port to run the server on
    #[arg(short, long, default_value_t = 8080)]
    pub port: u16,

    // OpenAI-compatible API base url
    #[arg(long, default_value = "https://api.openai.com")]
    pub openai_url: String,

    // Model used for partial renders and the final summary
    #[arg(long, default_value = "gpt-3.5-turbo")]
    pub model: String,

    // Cache TTL in seconds
    #[arg(short, long, default_value_t = 600)]
    pub cache_ttl: u64,

    // Max cached summaries before the oldest is evicted
    #[arg(long, default_value_t = 100)]
    pub cache_capacity: usize,

    // Rate limit max requests per window
    #[arg(long, default_value_t = 1)]
    pub rate_limit: u32,

    // Rate limit window in seconds
    #[arg(long, default_value_t = 10)]
    pub rate_window: u64,
}
