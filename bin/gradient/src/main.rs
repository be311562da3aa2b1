//! Paint the slider gradients of a color picker into an image, one row per
//! channel, with a marker at the channel's current value.

use std::path::PathBuf;

use color_eyre::eyre::{ensure, eyre, Result, WrapErr};
use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};
use structopt::StructOpt;
use swatch::{Action, Component, Components, Picker, Row};
use tracing::info;

#[derive(Debug, StructOpt)]
#[structopt(name = "swatch-gradient", about = "Paint the slider gradients of a color")]
struct Opts {
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u32,
    /// Starting color, any CSS rgb(), hex or basic named color.
    #[structopt(short, long, default_value = "black")]
    color: String,
    /// Invert the color before painting.
    #[structopt(long)]
    invert: bool,
    /// Complement the color before painting.
    #[structopt(long)]
    complement: bool,
    /// Replace the color with a random one before painting.
    #[structopt(long)]
    randomize: bool,
    /// Width of every row in pixels.
    #[structopt(long, default_value = "400")]
    width: u32,
    /// Height of every row in pixels.
    #[structopt(long, default_value = "24")]
    row_height: u32,
    /// Where to write the PNG.
    #[structopt(short, long, default_value = "out.png", parse(from_os_str))]
    output: PathBuf,
}

const MARKER_WIDTH: u32 = 3;

fn to_pixel(rgb: Components) -> Rgb<u8> {
    let Components(red, green, blue) = rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round());
    Rgb([red as u8, green as u8, blue as u8])
}

/// Height of an image holding `rows` rows of `row_height` pixels each.
///
/// Row offsets are passed to `imageproc` as `i32`, so the height is capped
/// there as well.
fn image_height(rows: usize, row_height: u32) -> Result<u32> {
    u32::try_from(rows)
        .ok()
        .and_then(|rows| rows.checked_mul(row_height))
        .filter(|&height| i32::try_from(height).is_ok())
        .ok_or_else(|| eyre!("{} rows of {} pixels do not fit in one image", rows, row_height))
}

/// `img` must be at least `(index + 1) * row_height` pixels high.
fn paint_row(img: &mut RgbImage, index: u32, row: &Row, row_height: u32) {
    let width = img.width();
    let top = index * row_height;

    for x in 0..width {
        let t = if width > 1 {
            x as Component / (width - 1) as Component
        } else {
            0.0
        };
        let pixel = to_pixel(row.gradient.at(t));
        for y in top..top + row_height {
            img.put_pixel(x, y, pixel);
        }
    }

    let center = (row.value.clamp(0.0, 1.0) * (width - 1) as Component).round() as i32;
    let left = (center - (MARKER_WIDTH / 2) as i32).max(0);
    draw_filled_rect_mut(
        img,
        Rect::at(left, top as i32).of_size(MARKER_WIDTH, row_height),
        Rgb([0, 0, 0]),
    );
    draw_filled_rect_mut(
        img,
        Rect::at(left + 1, top as i32 + 1).of_size(1, row_height.saturating_sub(2).max(1)),
        Rgb([255, 255, 255]),
    );
}

fn install_tracing(opts: &Opts) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let fmt_layer = fmt::layer().with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_env("SWATCH_LOG").unwrap_or_else(|_| {
        EnvFilter::new(match opts.verbose {
            0 => "swatch=warn,swatch_gradient=warn",
            1 => "swatch=info,swatch_gradient=info",
            2 => "swatch=debug,swatch_gradient=debug",
            _ => "swatch=trace,swatch_gradient=trace",
        })
    });

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
}

fn main() -> Result<()> {
    let opts = Opts::from_args();

    color_eyre::install()?;
    install_tracing(&opts)?;

    ensure!(opts.width > 0, "width must be at least one pixel");
    ensure!(opts.row_height > 0, "row height must be at least one pixel");

    let mut picker = Picker::new();
    picker
        .enter(&opts.color)
        .wrap_err_with(|| format!("invalid color `{}`", opts.color))?;

    if opts.randomize {
        picker.apply(Action::Randomize);
    }
    if opts.invert {
        picker.apply(Action::Invert);
    }
    if opts.complement {
        picker.apply(Action::Complement);
    }

    let rows = picker.rows();
    let mut img = RgbImage::new(opts.width, image_height(rows.len(), opts.row_height)?);

    println!("{}", picker.color());
    for (index, row) in rows.iter().enumerate() {
        paint_row(&mut img, index as u32, row, opts.row_height);
        println!("{:<4}{:<11}{:>7}", row.space, row.channel.name(), row.readout);
    }

    img.save(&opts.output)
        .wrap_err_with(|| format!("could not write {}", opts.output.display()))?;
    info!(path = %opts.output.display(), rows = rows.len(), "wrote gradients");

    Ok(())
}
