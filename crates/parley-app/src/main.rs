mod cli;
mod shell;

use std::time::Duration;

use parley_ai::{GeminiConnector, ProviderConfig, Session};
use parley_config::ParleyConfig;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::shell::Shell;

/// Load environment variables from a .env file (KEY=VALUE lines).
///
/// Variables already set in the environment win.
fn load_dotenv() {
    let mut candidates = vec![std::path::PathBuf::from(".env")];
    if let Ok(dir) = parley_config::toml_loader::default_config_dir() {
        candidates.push(dir.join(".env"));
    }

    for path in &candidates {
        if let Ok(contents) = std::fs::read_to_string(path) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }
                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"').trim_matches('\'');
                    if std::env::var(key).is_err() {
                        std::env::set_var(key, value);
                    }
                }
            }
            return;
        }
    }
}

fn connector_for(config: &ParleyConfig) -> GeminiConnector {
    let provider = &config.provider;
    GeminiConnector::default()
        .with_base_url(provider.base_url.clone())
        .with_timeouts(
            Duration::from_secs(u64::from(provider.connect_timeout_secs)),
            Duration::from_secs(u64::from(provider.request_timeout_secs)),
        )
        .with_verify_key(provider.verify_key)
}

fn main() {
    // Load .env file before anything else, while the process is single-threaded
    load_dotenv();

    let args = cli::parse();

    // Load errors are reported after the subscriber is installed.
    let loaded = parley_config::load_config(args.config.as_deref());
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let log_directive = args
        .log_level
        .as_deref()
        .unwrap_or_else(|| config.logging.level.as_directive());
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(
                log_directive
                    .parse()
                    .unwrap_or_else(|_| LevelFilter::WARN.into()),
            ),
        )
        .init();

    tracing::info!("Parley v{} starting...", env!("CARGO_PKG_VERSION"));
    if let Err(e) = &loaded {
        tracing::warn!("Config load failed, using defaults: {e}");
    }
    tracing::debug!("Config: {}", parley_config::config_to_json(&config));

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to create tokio runtime: {e}");
            return;
        }
    };

    if let Err(e) = runtime.block_on(run_shell(&args, &config)) {
        tracing::error!("Shell error: {e}");
    }
    tracing::info!("Shutdown complete");
}

async fn run_shell(args: &cli::Args, config: &ParleyConfig) -> std::io::Result<()> {
    let model = args.model.as_deref().unwrap_or(&config.provider.model);
    let settings = match ProviderConfig::new(
        model,
        config.provider.temperature,
        config.provider.max_tokens,
    ) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Invalid provider settings, using defaults: {e}");
            ProviderConfig::default()
        }
    };

    let session = Session::new(connector_for(config)).with_config(settings);
    tracing::info!("Session {} created", session.id().short());

    let export_dir = args
        .export_dir
        .clone()
        .unwrap_or_else(|| config.export.resolved_dir());
    let mut shell = Shell::new(session, export_dir, std::io::stdout());

    let env_key = std::env::var(&config.provider.api_key_env)
        .ok()
        .filter(|key| !key.trim().is_empty());
    if env_key.is_some() {
        tracing::info!("Using API key from ${}", config.provider.api_key_env);
    }
    shell.open(env_key.as_deref()).await?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    shell.run(stdin).await
}
