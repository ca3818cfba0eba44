use clap::Parser;
use log::warn;
use sidenav::LayoutMode;
use sidenav::core::config;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sidenav", about = "Sectioned navigation panel for the terminal")]
struct Args {
    /// Panel layout (overrides config and SIDENAV_LAYOUT)
    #[arg(short, long, value_enum)]
    layout: Option<LayoutMode>,

    /// Initial selection: a category key, "homepage" or "mostviewed"
    #[arg(short, long)]
    category: Option<String>,

    /// Read config from this file instead of ~/.sidenav/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to sidenav.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("sidenav.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let loaded = match &args.config {
        Some(path) => config::load_config_from(path),
        None => config::load_config(),
    };
    let file_config = match loaded {
        Ok(c) => c,
        Err(e) => {
            warn!("Config load failed: {}", e);
            eprintln!("sidenav: {e}");
            std::process::exit(1);
        }
    };

    let resolved = config::resolve(&file_config, args.layout, args.category.as_deref());
    log::info!(
        "Sidenav starting up: layout={:?}, {} sections",
        resolved.layout,
        resolved.registry.sections().len()
    );

    sidenav::tui::run(resolved)
}
