//! QuestLedger Engine - Main entry point.
//!
//! Reads newline-delimited JSON commands from stdin and answers each with one
//! JSON line on stdout. Logs go to stderr.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use questledger_engine::commands::LedgerCommand;
use questledger_engine::infrastructure::config::{load_dotenv_from, LedgerConfig};
use questledger_engine::infrastructure::memory_store::InMemoryStore;
use questledger_engine::App;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment from repo root (the binary may run from `crates/engine`).
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let dotenv_failures = load_dotenv_from(&repo_root);

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "questledger_engine=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    for failure in &dotenv_failures {
        tracing::warn!(error = %failure, "Ignoring env file");
    }

    let config = LedgerConfig::from_env().context("loading configuration")?;
    tracing::info!(rules = ?config.rules, "Starting QuestLedger Engine");

    let store = match &config.seed_path {
        Some(path) => InMemoryStore::from_seed_file(path)
            .await
            .context("seeding the store")?,
        None => InMemoryStore::new(),
    };
    let store = Arc::new(store);
    tracing::info!(characters = store.character_count(), "Store seeded");

    let app = App::in_memory(store, config.rules)?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<LedgerCommand>(&line) {
            Ok(command) => match app.execute(command).await {
                Ok(reply) => serde_json::to_value(reply)?,
                Err(e) => {
                    tracing::warn!(error = %e, "Command failed");
                    serde_json::json!({ "error": e.to_string() })
                }
            },
            Err(e) => serde_json::json!({ "error": format!("invalid command: {e}") }),
        };

        stdout.write_all(format!("{reply}\n").as_bytes()).await?;
        stdout.flush().await?;
    }

    tracing::info!("Input closed, shutting down");
    Ok(())
}
