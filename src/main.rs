mod app;
mod config;
mod gallery;
mod store;
mod theme;

use std::path::PathBuf;

use clap::Parser;

use crate::config::GalleryConfig;
use crate::theme::Theme;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Directory containing the `art/` folder.
    #[arg(long, default_value = ".")]
    asset_root: PathBuf,
    /// Where visited artworks and the theme preference are kept.
    #[arg(long)]
    data_dir: Option<PathBuf>,
    /// Start in this theme without touching the saved preference.
    #[arg(long, value_enum)]
    theme: Option<Theme>,
}

fn main() -> eframe::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = GalleryConfig {
        asset_root: args.asset_root,
        data_dir: args.data_dir,
        theme_override: args.theme,
    };
    log::info!("loading artwork from {}", config.asset_root.display());

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 820.0]),
        ..Default::default()
    };

    eframe::run_native(
        "galaxy-gallery",
        options,
        Box::new(move |cc| Ok(Box::new(app::GalleryApp::new(cc, config)))),
    )
}
