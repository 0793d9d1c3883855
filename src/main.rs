//! Trove
//!
//! Desktop client for the Trove asset management platform.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .pretty()
        .init();

    // Resolve configuration before the window opens so a broken config
    // file fails on the terminal instead of inside the UI.
    let config = trove_ui::AppConfig::load().context("loading Trove configuration")?;

    println!();
    println!("  📦 Trove — asset management desktop client");
    println!();

    // Launch the Dioxus desktop application
    trove_ui::launch(config);

    Ok(())
}
