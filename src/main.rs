#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::{Catalog, SiteConfig};

/// Catalog loaded at startup, read by the app through context
static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Site config loaded at startup
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the project catalog (empty when startup didn't set one)
pub fn get_catalog() -> Arc<Catalog> {
    CATALOG.get().cloned().unwrap_or_default()
}

/// Get the site config (defaults when startup didn't set one)
pub fn get_site_config() -> SiteConfig {
    SITE_CONFIG.get().cloned().unwrap_or_default()
}

/// Portfolio - project showcase
#[derive(Parser, Debug)]
#[command(name = "portfolio")]
#[command(about = "Personal portfolio with project gallery")]
struct Args {
    /// Project catalog JSON (defaults to the built-in catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Site config JSON (owner text, effect timings)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_filter: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_filter)),
        )
        .init();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog {:?}", path))?,
        None => Catalog::builtin().context("built-in catalog is invalid")?,
    };

    let config = match &args.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("failed to load site config {:?}", path))?,
        None => SiteConfig::default(),
    };

    tracing::info!(
        "Starting portfolio for '{}' with {} projects",
        config.owner_name,
        catalog.len()
    );

    let title = format!("{} - Portfolio", config.owner_name);

    let _ = CATALOG.set(Arc::new(catalog));
    let _ = SITE_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
