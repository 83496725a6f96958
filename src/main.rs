use std::path::PathBuf;

use anyhow::Context;
use stickerkit::{init_logging, load_script, run_script, StickerViewConfig, BUILD_DATE, VERSION};
use stickerkit_settings::default_config_path;
use tracing::info;

const USAGE: &str = "usage: stickerkit <script.json> [config.toml|config.json]";

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;
    info!("stickerkit {} (built {})", VERSION, BUILD_DATE);

    let mut args = std::env::args().skip(1);
    let script_path = PathBuf::from(args.next().context(USAGE)?);

    let config = match args.next().map(PathBuf::from).or_else(default_config_path) {
        Some(path) if path.exists() => {
            info!("Using configuration {}", path.display());
            StickerViewConfig::load_from_file(&path)
                .with_context(|| format!("loading {}", path.display()))?
        }
        _ => StickerViewConfig::default(),
    };

    let script = load_script(&script_path)
        .with_context(|| format!("loading {}", script_path.display()))?;
    let report = run_script(&script, &config)?;

    for event in &report.events {
        println!("{}", event);
    }
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
