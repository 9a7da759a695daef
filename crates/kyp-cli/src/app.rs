//! Wiring from configuration to running components.

use std::sync::Arc;

use anyhow::Context;
use kyp_api::{AppState, Server};
use kyp_core::{CompletionConfig, KypConfig, Record, StoreConfig};
use kyp_llm::OpenAiProvider;
use kyp_search::{CompletionClient, KeywordSet, Query, SearchOutcome, SearchPipeline};
use kyp_store::{JsonFileStore, MemoryStore, RecordStore};
use tracing::info;

use crate::Overrides;

/// Load the config file and apply command-line and environment overrides.
pub fn load_config(
    config_path: Option<&str>,
    overrides: &Overrides,
) -> kyp_core::Result<KypConfig> {
    let mut config = KypConfig::load(config_path)?;
    overrides.apply(&mut config);
    Ok(config)
}

/// Open the configured record store.
pub fn build_store(config: &StoreConfig) -> Arc<dyn RecordStore> {
    match &config.path {
        Some(path) => {
            info!(path = %path.display(), "Using JSON file store");
            Arc::new(JsonFileStore::new(path.clone()))
        }
        None => {
            info!("Using in-memory store");
            Arc::new(MemoryStore::new())
        }
    }
}

/// Build the search pipeline.
///
/// Without an API key the pipeline is local-only.
pub fn build_pipeline(config: &CompletionConfig) -> kyp_llm::Result<SearchPipeline> {
    if !config.is_configured() {
        info!("No completion API key configured, search will use substring matching");
        return Ok(SearchPipeline::local_only());
    }

    let provider = OpenAiProvider::from_config(config)?;
    info!(
        endpoint = provider.endpoint(),
        model = provider.model(),
        timeout = ?config.timeout(),
        "Completion provider ready"
    );
    Ok(SearchPipeline::new(CompletionClient::from_config(
        Arc::new(provider),
        config,
    )))
}

/// Run the HTTP API until shutdown.
pub async fn serve(
    config: &KypConfig,
    host: Option<String>,
    port: Option<u16>,
) -> anyhow::Result<()> {
    let mut server_config = config.server.clone();
    if let Some(host) = host {
        server_config.host = host;
    }
    if let Some(port) = port {
        server_config.port = port;
    }

    let store = build_store(&config.store);
    let pipeline = build_pipeline(&config.completion).context("failed to set up completion")?;
    let state = AppState::new(store, pipeline);

    let address = server_config.bind_address();
    Server::bind(&address, state)
        .await?
        .serve()
        .await
        .context("server stopped with an error")
}

/// Run one search against the configured store.
pub async fn search(config: &KypConfig, query: &str) -> anyhow::Result<SearchOutcome> {
    let store = build_store(&config.store);
    let pipeline = build_pipeline(&config.completion)?;
    Ok(pipeline.search(query, store.as_ref()).await?)
}

/// Extract keywords for one query. Fails when the completion service does.
pub async fn keywords(config: &KypConfig, query: &str) -> anyhow::Result<KeywordSet> {
    let query = Query::parse(query)?;
    let pipeline = build_pipeline(&config.completion)?;
    if !pipeline.is_completion_enabled() {
        anyhow::bail!("no completion API key configured; set KYP_OPENAI_API_KEY");
    }
    Ok(pipeline.extract(&query).await?)
}

/// Render records for the terminal, one per line, or as pretty JSON.
pub fn render_records(records: &[Record], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(records)?);
    }
    Ok(records
        .iter()
        .map(|r| {
            format!(
                "{}\t{:.2}\t{}\t{}",
                r.product_id, r.price, r.description, r.notes
            )
        })
        .collect::<Vec<_>>()
        .join("\n"))
}
