mod app;
mod color;
mod config;
mod data;
mod error;
mod state;
mod ui;

use anyhow::{Context, Result, anyhow};

use app::StripesApp;
use color::DivergingColormap;
use config::StripesConfig;
use data::{clean, loader};
use state::StripesState;

fn main() -> Result<()> {
    env_logger::init();

    if let Err(e) = run(&StripesConfig::default()) {
        log::error!("{e:#}");
        return Err(e);
    }
    Ok(())
}

/// Load, clean, normalize, reshape, plot. Every failure is fatal.
fn run(config: &StripesConfig) -> Result<()> {
    let raw = loader::load_source(&config.source, config.columns())
        .with_context(|| format!("loading {}", config.source))?;

    let dataset = clean::clean_and_sort(&raw);
    log::info!("{} complete records after cleaning", dataset.len());

    let colormap = DivergingColormap::by_name(&config.colormap)
        .with_context(|| format!("unknown colormap {}", config.colormap))?;
    let state = StripesState::prepare(&dataset, colormap, &config.title)
        .context("preparing stripes")?;

    eframe::run_native(
        &config.title,
        config.native_options(),
        Box::new(|_cc| Ok(Box::new(StripesApp::new(state)))),
    )
    .map_err(|e| anyhow!("display failed: {e}"))
}
