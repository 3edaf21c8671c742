mod app;
mod convert;
mod panels;
mod startup;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sinoscope", about = "Interactive Radon transform (sinogram) viewer")]
#[command(version)]
struct Cli {
    /// Input grayscale-convertible image file (PNG, JPEG, ...)
    image: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let controller = startup::prepare(&cli.image)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([700.0, 500.0])
            .with_title("Sinoscope"),
        ..Default::default()
    };

    eframe::run_native(
        "Sinoscope",
        options,
        Box::new(move |cc| {
            let app = app::SinoscopeApp::new(&cc.egui_ctx, controller)?;
            Ok(Box::new(app))
        }),
    )?;

    Ok(())
}
