use anyhow::Result;
use swaad_ai::{config, server};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Validates that a log level string is valid
fn validate_log_level(level: &str) -> Result<()> {
    level
        .parse::<tracing_subscriber::filter::LevelFilter>()
        .map_err(|_| {
            anyhow::anyhow!(
                "Invalid log level: '{}'. Valid levels: error, warn, info, debug, trace",
                level
            )
        })?;
    Ok(())
}

/// Builds the log filter. `RUST_LOG` directives win over the configured
/// level; only the configured level has to be a bare level name.
fn build_filter(rust_log: Option<&str>, configured_level: &str) -> Result<EnvFilter> {
    validate_log_level(configured_level)?;

    let filter = match rust_log {
        Some(directives) => {
            EnvFilter::try_new(directives).or_else(|_| EnvFilter::try_new(configured_level))?
        }
        None => EnvFilter::try_new(configured_level)?,
    };
    Ok(filter)
}

#[tokio::main]
async fn main() -> Result<()> {
    // The API key is checked here, before anything is bound
    let config = match config::load().await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let rust_log = std::env::var("RUST_LOG").ok();
    let filter = match build_filter(rust_log.as_deref(), &config.server.logs.level) {
        Ok(filter) => filter,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt().with_env_filter(filter).json().init();

    info!(
        "Starting SwaadAI recipe generator with log filter: {}",
        rust_log.as_deref().unwrap_or(&config.server.logs.level)
    );

    server::run(config).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_directives_are_accepted() {
        assert!(build_filter(Some("swaad_ai=debug"), "info").is_ok());
        assert!(build_filter(Some("warn,tower_http=trace"), "info").is_ok());
    }

    #[test]
    fn test_configured_level_without_rust_log() {
        assert!(build_filter(None, "debug").is_ok());
    }

    #[test]
    fn test_invalid_configured_level_is_rejected() {
        let err = build_filter(None, "swaad_ai=debug").unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));

        assert!(build_filter(Some("info"), "loud").is_err());
    }
}
