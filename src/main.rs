use clap::Parser;
use prefix_autocomplete::config::ServiceConfig;
use prefix_autocomplete::corpus::{CorpusStats, load_corpus};
use prefix_autocomplete::search::FrequencyIndex;
use prefix_autocomplete::search::handlers::{AutocompleteService, router};
use std::sync::Arc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServiceConfig::parse();

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    // 1. Build the index, failing fast if the corpus is unavailable:
    let corpus = load_corpus(&config.corpus_path).await?;
    let index = Arc::new(FrequencyIndex::from_corpus(&corpus));
    drop(corpus);

    let stats = CorpusStats::from(index.as_ref());
    tracing::info!(
        "Index ready: {} tokens, {} distinct",
        stats.total_tokens,
        stats.distinct_tokens
    );

    // 2. Serve queries against the now read-only index:
    let app = router(AutocompleteService::new(index, config.max_matches));

    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Stopping server...");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
