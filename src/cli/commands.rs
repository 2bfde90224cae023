//! Subcommand implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use watermark_studio_config::Config;
use watermark_studio_fonts::FontCatalogBuilder;

use super::{Commands, PlaceArgs};
use crate::watermark::WatermarkPlanner;

/// Run a parsed subcommand against the loaded config.
pub fn run(command: &Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Fonts { dir } => fonts_cli(dir.as_deref(), config),
        Commands::Place(args) => place_cli(args, config),
        Commands::Templates => templates_cli(config),
    }
}

/// Print the catalog of `dir` (or the configured folder) as `name -> filename` lines.
pub fn fonts_cli(dir: Option<&Path>, config: &Config) -> Result<()> {
    let dir = fonts_dir(dir, config);
    let catalog = FontCatalogBuilder::new()
        .build(dir.as_deref())
        .context("Failed to build font catalog")?;

    if catalog.is_empty() {
        log::warn!("No fonts found in {}", catalog.directory().display());
    }
    print!("{catalog}");
    Ok(())
}

/// Plan the watermark for every `--image` and print the plans.
pub fn place_cli(args: &PlaceArgs, config: &Config) -> Result<()> {
    let templates = config.template_library();
    let settings = args.settings(&config.watermark, &templates)?;
    settings.validate()?;

    let dir = fonts_dir(args.fonts_dir.as_deref(), config);
    let planner = WatermarkPlanner::from_dir(dir.as_deref())
        .context("Failed to build font catalog")?
        .with_margin(args.margin.unwrap_or(config.margin));

    let results = planner.plan_batch(&args.images, &settings);
    let mut failed = 0;
    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match result {
            Ok(plan) => println!("{plan}"),
            Err(e) => {
                failed += 1;
                eprintln!("watermark-studio: {}: {e}", args.images[i]);
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} watermark plans failed", results.len());
    }
    Ok(())
}

/// Print every template with its settings.
pub fn templates_cli(config: &Config) -> Result<()> {
    let templates = config.template_library();
    for template in templates.iter() {
        let s = &template.settings;
        println!(
            "{}: \"{}\" {} opacity={} size={} color={} font={}",
            template.name, s.text, s.position, s.opacity, s.font_size, s.color, s.font
        );
    }
    Ok(())
}

fn fonts_dir(flag: Option<&Path>, config: &Config) -> Option<PathBuf> {
    flag.map(Path::to_path_buf)
        .or_else(|| config.expanded_fonts_dir())
}
