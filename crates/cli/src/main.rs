//! lectio CLI entry point.

use anyhow::Result;
use clap::Parser;
use lectio_cli::cli::Cli;
use lectio_cli::{commands, Config};
use lectio_core::cache::YearCache;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env();

    // Logs go to stderr so stdout stays clean for JSON output.
    let fallback_filter = if cli.quiet {
        "warn".to_string()
    } else {
        config.default_log_filter.clone()
    };
    let (json_layer, text_layer) = if config.log_json {
        (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
    } else {
        (None, Some(fmt::layer().with_writer(std::io::stderr)))
    };
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| fallback_filter.into()),
        )
        .with(json_layer)
        .with(text_layer)
        .init();

    tracing::debug!(cache_max_years = config.cache_max_years, "starting lectio");

    let cache = YearCache::new(config.cache_max_years);
    let output = commands::run(&cli, &cache)?;

    if !output.is_empty() {
        println!("{}", output);
    }

    Ok(())
}
