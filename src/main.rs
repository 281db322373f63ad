// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Folio - a single-page portfolio viewer
//!
//! Shows an intro that reveals the rest of the page as you scroll, a
//! projects list with an image/video detail overlay, a competitions
//! timeline, a skills grid and an auto-scrolling photo strip.

mod app;
mod config;
mod controllers;
mod io;
mod models;
mod page;
mod ui;
mod util;

use anyhow::Result;
use app::FolioApp;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "folio")]
#[command(about = "Folio - single-page portfolio viewer")]
#[command(version)]
struct Cli {
    /// Portfolio content file (YAML or JSON)
    content: Option<PathBuf>,

    /// Page parameters file (YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write a starter content file to this path and exit
    #[arg(long)]
    init: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();

    if let Some(path) = cli.init {
        io::serialization::export_content(&models::content::PortfolioContent::starter(), &path)?;
        log::info!("Wrote starter content to {}", path.display());
        return Ok(());
    }

    let config = match cli.config {
        Some(ref path) => io::serialization::import_config(path)?,
        None => config::PageConfig::default(),
    };
    let content = cli.content;

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([360.0, 480.0])
            .with_title("Folio"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Folio",
        options,
        Box::new(move |cc| Ok(Box::new(FolioApp::new(cc, config, content)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
