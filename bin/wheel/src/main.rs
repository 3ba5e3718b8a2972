//! Render a painter's color wheel as a strip of swatches, one per hue sample.

use std::path::PathBuf;

use anyhow::{ensure, Context};
use clap::Parser;
use image::{Rgba, RgbaImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use ryb::{wheel, Color, ColorBlindness, Component, MIN_WHEEL_STEP};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ryb-wheel")]
#[command(about = "Render the RYB color wheel to a PNG strip")]
struct Cli {
    /// Degrees between hue samples
    #[arg(long, default_value_t = 2.0)]
    step: Component,

    /// Saturation adjustment in -1..1
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    saturation: Component,

    /// Brightness adjustment in -1..1
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    brightness: Component,

    /// Color vision: 0 normal, 1 protanopia, 2 deuteranopia, 3 tritanopia,
    /// 4 achromatopsia
    #[arg(long, default_value_t = 0)]
    vision: u8,

    /// Width of a single swatch in pixels
    #[arg(long, default_value_t = 4)]
    swatch_width: u32,

    /// Height of the strip in pixels
    #[arg(long, default_value_t = 20)]
    height: u32,

    /// Output PNG file path
    #[arg(short, long, default_value = "wheel.png")]
    output: PathBuf,
}

/// Width of a strip of `samples` swatches, if every swatch offset fits the
/// signed coordinates used for drawing.
fn strip_width(samples: usize, swatch_width: u32) -> Option<u32> {
    let width = u32::try_from(samples).ok()?.checked_mul(swatch_width)?;
    i32::try_from(width).ok()?;
    Some(width)
}

/// Callers check the strip size with [`strip_width`] first.
fn render(colors: &[Color], swatch_width: u32, height: u32) -> RgbaImage {
    let mut img = RgbaImage::new(colors.len() as u32 * swatch_width, height);

    for (i, color) in colors.iter().enumerate() {
        let x = (i as u32 * swatch_width) as i32;
        draw_filled_rect_mut(
            &mut img,
            Rect::at(x, 0).of_size(swatch_width, height),
            Rgba(color.to_rgba8()),
        );
    }

    img
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ryb_wheel=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    ensure!(
        cli.step.is_finite() && cli.step >= MIN_WHEEL_STEP,
        "step must be at least {} degrees, got {}",
        MIN_WHEEL_STEP,
        cli.step
    );
    ensure!(
        cli.swatch_width > 0 && cli.height > 0,
        "swatches must be at least one pixel in size"
    );

    let vision = ColorBlindness::from_tag(cli.vision);
    if vision == ColorBlindness::Normal && cli.vision != 0 {
        tracing::warn!(tag = cli.vision, "Unknown color vision tag, using normal vision");
    }

    let colors: Vec<Color> = wheel(cli.step, cli.saturation, cli.brightness)
        .iter()
        .map(|c| c.simulate(vision))
        .collect();

    let width = strip_width(colors.len(), cli.swatch_width).with_context(|| {
        format!(
            "{} swatches of {} pixels do not fit in one image",
            colors.len(),
            cli.swatch_width
        )
    })?;

    tracing::debug!(
        step = cli.step,
        saturation = cli.saturation,
        brightness = cli.brightness,
        ?vision,
        width,
        "Sampled color wheel"
    );

    let img = render(&colors, cli.swatch_width, cli.height);
    img.save(&cli.output)
        .with_context(|| format!("could not write image to {}", cli.output.display()))?;

    tracing::info!(
        samples = colors.len(),
        path = %cli.output.display(),
        "Wrote color wheel"
    );

    Ok(())
}
