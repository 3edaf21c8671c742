use std::path::Path;

use anyhow::{bail, Context, Result};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

use sinoscope_core::frame::Padding;
use sinoscope_core::io::load_image;
use sinoscope_core::preprocess::{pad_to_square, rescale};
use sinoscope_core::projection::{compute_sinogram_with_progress, AngleSet};
use sinoscope_core::view::{ViewController, ViewOptions};

const OPTIONS_FILE: &str = "sinoscope.toml";

/// Run the startup pipeline: load, optionally rescale, pad to square,
/// project over the full angle sweep. Any failure here is fatal and no UI
/// is started.
pub fn prepare(image_path: &Path) -> Result<ViewController> {
    let options = load_options()?;

    let frame = load_image(image_path)
        .with_context(|| format!("Failed to load {}", image_path.display()))?;
    let source_dims = (frame.width(), frame.height());

    let frame = match options.rescale {
        Some(factor) => {
            rescale(&frame, factor).with_context(|| format!("Failed to rescale by {factor}"))?
        }
        None => frame,
    };

    let (padded, padding) = pad_to_square(&frame);

    let angles = AngleSet::semicircle();
    if options.initial_angle >= angles.len() {
        bail!(
            "initial_angle {} out of range (angle count: {})",
            options.initial_angle,
            angles.len()
        );
    }

    let pb = ProgressBar::new(angles.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Projecting [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let sinogram = compute_sinogram_with_progress(&padded, &angles, || pb.inc(1))
        .context("Projection failed")?;
    pb.finish();

    print_summary(
        image_path,
        source_dims,
        &padding,
        padded.width(),
        sinogram.detector_count(),
    );

    Ok(ViewController::new(padded, sinogram, options))
}

/// Load display options from `sinoscope.toml` in the working directory.
/// A missing file means defaults; a malformed file is fatal.
fn load_options() -> Result<ViewOptions> {
    if !Path::new(OPTIONS_FILE).exists() {
        return Ok(ViewOptions::default());
    }
    let contents = std::fs::read_to_string(OPTIONS_FILE)
        .with_context(|| format!("Failed to read {OPTIONS_FILE}"))?;
    toml::from_str(&contents).with_context(|| format!("Invalid {OPTIONS_FILE}"))
}

fn print_summary(
    path: &Path,
    source_dims: (usize, usize),
    padding: &Padding,
    padded_side: usize,
    detector_count: usize,
) {
    let label = Style::new().dim();
    let value = Style::new().bold().white();
    let path_style = Style::new().underlined();

    println!();
    println!(
        "  {:<14}{}",
        label.apply_to("Input"),
        path_style.apply_to(path.display())
    );
    println!(
        "  {:<14}{}",
        label.apply_to("Source"),
        value.apply_to(format!("{}x{}", source_dims.0, source_dims.1))
    );
    if !padding.is_none() {
        println!(
            "  {:<14}{}",
            label.apply_to("Padding"),
            value.apply_to(format!(
                "top {} bottom {} left {} right {}",
                padding.top, padding.bottom, padding.left, padding.right
            ))
        );
    }
    println!(
        "  {:<14}{}",
        label.apply_to("Padded"),
        value.apply_to(format!("{padded_side}x{padded_side}"))
    );
    println!(
        "  {:<14}{}",
        label.apply_to("Detectors"),
        value.apply_to(detector_count)
    );
    println!();
}
