//! Asha application binary - composition root.
//!
//! 1. Parse CLI flags and load configuration
//! 2. Install the tracing subscriber
//! 3. Build the LLM client and the record stores
//! 4. Serve the API until ctrl-c

mod cli;

use clap::Parser;

use asha_api::{start_server, AppState};
use asha_core::AshaConfig;
use asha_records::RecordStores;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();
    let config_path = args.resolve_config_path();

    if args.write_config {
        AshaConfig::default().save(&config_path)?;
        println!("Wrote default configuration to {}", config_path.display());
        return Ok(());
    }

    let loaded = AshaConfig::load(&config_path);
    let file_level = loaded
        .as_ref()
        .map(|c| c.server.log_level.as_str())
        .unwrap_or("info");
    let log_level = args.resolve_log_level(file_level);

    // Tracing. RUST_LOG wins over the configured level.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level)),
        )
        .init();

    tracing::info!("Starting Asha v{}", env!("CARGO_PKG_VERSION"));

    let mut config = match loaded {
        Ok(config) => {
            tracing::info!(path = %config_path.display(), "Configuration loaded");
            config
        }
        Err(e) => {
            tracing::warn!(
                path = %config_path.display(),
                error = %e,
                "Could not load configuration; using defaults"
            );
            AshaConfig::default()
        }
    };
    config.server.port = args.resolve_port(config.server.port);
    config.server.host = args.resolve_host(&config.server.host);
    config.server.log_level = log_level;

    let llm = asha_llm::build_client(&config.llm)?;
    let stores = RecordStores::from_config(&config.cache, &config.providers)?;
    tracing::info!(
        jobs_ttl_secs = config.cache.jobs_ttl_secs,
        mentorships_ttl_secs = config.cache.mentorships_ttl_secs,
        events_ttl_secs = config.cache.events_ttl_secs,
        "Record stores ready"
    );

    let state = AppState::new(config.clone(), llm, stores);

    if let Err(e) = start_server(&config, state).await {
        tracing::error!(error = %e, "API server failed");
        return Err(e.into());
    }

    Ok(())
}
