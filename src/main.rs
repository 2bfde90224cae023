use anyhow::{Context, Result};
use clap::Parser;
use watermark_studio::cli::{Cli, commands};
use watermark_studio_config::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config is loaded before logging so the bridge can honour its level and log file
    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("watermark-studio: error: {e:#}");
            std::process::exit(1);
        }
    };

    // CLI --log-level flag takes highest precedence, then RUST_LOG, then config
    let rust_log = std::env::var("RUST_LOG").ok();
    let level = watermark_studio::debug::resolve_level(
        cli.log_level.map(|l| l.to_level_filter()),
        rust_log.as_deref(),
        config.log_level,
    );
    watermark_studio::debug::init_log_bridge(level, config.log_file.as_deref());

    log::info!("Starting watermark-studio {}", watermark_studio::VERSION);

    if let Err(e) = commands::run(&cli.command, &config) {
        eprintln!("watermark-studio: error: {e:#}");
        // Non-zero exit: use process::exit so the shell sees the correct exit code
        log::logger().flush();
        std::process::exit(1);
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Config::load().context("Failed to load config"),
    }
}
