use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use crate::cache::TtlCache;
use crate::error::TldrError;
use crate::fetch::DocumentFetcher;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, CACHE_SIZE};
use crate::models::DocKind;
use crate::summarize::Summarizer;
use crate::tokenizer::Tokenizer;

// documents longer than this many token units get chunked before the final
// summarization call
pub const TOKEN_LIMIT: usize = 3000;

// token units per chunk; the last chunk may be shorter
pub const CHUNK_SIZE: usize = 2000;

// Lookup-or-compute-and-store summarization. Holds the cache plus the three
// collaborator capabilities; one instance is shared by all handlers.
pub struct SummaryPipeline {
    cache: TtlCache,
    ttl: Duration,
    fetcher: Arc<dyn DocumentFetcher>,
    tokenizer: Arc<dyn Tokenizer>,
    summarizer: Arc<dyn Summarizer>,
}

impl SummaryPipeline {
    pub fn new(
        cache: TtlCache,
        ttl: Duration,
        fetcher: Arc<dyn DocumentFetcher>,
        tokenizer: Arc<dyn Tokenizer>,
        summarizer: Arc<dyn Summarizer>,
    ) -> Self {
        Self {
            cache,
            ttl,
            fetcher,
            tokenizer,
            summarizer,
        }
    }

    // the admin clear endpoint deletes through this
    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    pub async fn summarize_request(&self, kind: &str, number: u32) -> Result<String, TldrError> {
        let kind = DocKind::parse(kind).ok_or_else(|| TldrError::InvalidRequest(kind.to_string()))?;
        let key = kind.canonical_key(number);

        // a hit is returned as stored; it does not extend its own ttl
        if let Some(cached) = self.cache.get(&key) {
            CACHE_HITS.inc();
            info!(key = %key, "cache hit");
            return Ok(cached);
        }
        CACHE_MISSES.inc();

        let (text, link) = match kind {
            DocKind::Pep => (
                self.fetcher.fetch_pep_text(&key).await?,
                format!("https://peps.python.org/{key}"),
            ),
            DocKind::Gh => (
                self.fetcher.fetch_issue_discussion(number).await?,
                format!("https://github.com/python/cpython/issues/{number}"),
            ),
        };

        let tokens = self.tokenizer.encode(&text)?;
        let final_text = if tokens.len() > TOKEN_LIMIT {
            info!(key = %key, tokens = tokens.len(), "over token limit, chunking");
            // chunks are contiguous, non-overlapping and processed strictly
            // in document order so the digest reads front to back
            let mut responses = Vec::new();
            for chunk in tokens.chunks(CHUNK_SIZE) {
                let decoded = self.tokenizer.decode(chunk)?;
                let response = self.summarizer.render_partial(&decoded, &key).await?;
                responses.push(response);
            }
            responses.join("\n")
        } else {
            text
        };

        let summary = self.summarizer.summarize(&link, &final_text).await?;

        // only a completed summary is cached; failures above never write
        self.cache.put(&key, summary.clone(), self.ttl);
        CACHE_SIZE.set(self.cache.len() as f64);
        info!(key = %key, "summary cached");
        Ok(summary)
    }
}
