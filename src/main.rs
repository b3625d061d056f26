// Command-line inspector for the `pixel_entities` library: unpacks a packed ARGB
// value at a grid position, applies optional mutations and prints every view of
// the resulting pixel.

use anyhow::{bail, Context};
use clap::Parser;
use pixel_entities::{parse_packed_argb, Channel, Coordinate, PackedArgb, Pixel};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[command(name = "pixel_entities", version, about = "Inspect a packed ARGB pixel")]
struct Cli {
    /// Packed ARGB value: 0xAARRGGBB, #AARRGGBB or decimal (signed or unsigned)
    #[arg(value_parser = parse_packed_argb, allow_negative_numbers = true)]
    argb: PackedArgb,

    /// Column of the pixel
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    x: Coordinate,

    /// Row of the pixel
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    y: Coordinate,

    /// Replace the color with an opaque grey of this level
    #[arg(long, conflicts_with = "color", allow_negative_numbers = true)]
    grey: Option<Channel>,

    /// Replace the color with opaque r,g,b
    #[arg(long, value_parser = parse_rgb, allow_hyphen_values = true)]
    color: Option<[Channel; 3]>,

    /// Mark the pixel as visited
    #[arg(long)]
    visited: bool,
}

/// Parses `r,g,b` into three channels. Values are not range checked.
fn parse_rgb(text: &str) -> anyhow::Result<[Channel; 3]> {
    let channels = text
        .split(',')
        .map(|part| {
            part.trim()
                .parse::<Channel>()
                .with_context(|| format!("invalid channel {:?}", part))
        })
        .collect::<anyhow::Result<Vec<Channel>>>()?;
    let [r, g, b] = channels[..] else {
        bail!("expected r,g,b, got {} channels", channels.len());
    };
    Ok([r, g, b])
}

fn build_pixel(cli: &Cli) -> Pixel {
    let mut pixel = Pixel::from_packed(cli.argb, cli.x, cli.y);
    log::debug!("unpacked {:#010X} into {:?}", cli.argb, pixel);

    if let Some(level) = cli.grey {
        pixel.set_grey(level);
    }
    if let Some([r, g, b]) = cli.color {
        pixel.set_color(r, g, b);
    }
    pixel.set_visited_flag(cli.visited);
    pixel
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let pixel = build_pixel(&cli);

    let [a, r, g, b] = pixel.channels();
    let mut out = io::stdout().lock();
    writeln!(out, "{}", pixel)?;
    writeln!(out, "channels:  a={} r={} g={} b={}", a, r, g, b)?;
    writeln!(out, "intensity: {:.3}", pixel.intensity())?;
    writeln!(out, "packed:    {:#010X} ({})", pixel.packed_argb(), pixel.packed_argb())?;
    writeln!(out, "rgba8:     {:?}", pixel.to_rgba_bytes())?;

    Ok(())
}
