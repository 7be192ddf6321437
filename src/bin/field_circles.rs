use clap::Parser;
use log::*;
use std::time::Instant;

use huefield::basepoint::generate_quadrants;
use huefield::field::{circle_glyph, grid, paint_glyphs, GRID_SPACING};
use huefield::graphics;
use huefield::samples::report_compute;
use huefield::*;

/// A grid of circles whose radius grows with distance from the window center
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(i64).range(4..=16384))]
    width: i64,

    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(i64).range(4..=16384))]
    height: i64,

    /// Pixels between neighbouring grid points
    #[arg(long, default_value_t = GRID_SPACING)]
    spacing: usize,

    /// Seed for the basepoints; random when left out
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let canvas = CanvasSize::new(args.width, args.height);
    let mut source = match args.seed {
        Some(seed) => RandomCandidates::seeded(seed),
        None => RandomCandidates::from_entropy(),
    };
    let basepoints = generate_quadrants(&mut source, &PaletteParams::new(canvas))?;

    let started = Instant::now();
    let cells = grid(canvas, args.spacing)?;
    let painter = Painter::new(&basepoints, Frame::Centered, canvas);
    let mut samples = paint_glyphs(&cells, circle_glyph, &painter);

    let sentinel = DevicePoint::new(-1.0, -1.0);
    let normalized = samples.normalize(Frame::Centered, canvas, OutOfBounds::Sentinel(sentinel));
    report_compute(started.elapsed(), samples.len());
    if normalized.out_of_bounds > 0 {
        warn!(
            "{} points are out of bounds of the current window. They have been moved to {:?}. Please verify settings.",
            normalized.out_of_bounds, sentinel
        );
    }

    graphics::leggo(
        &samples,
        "Vector Field - Circle Drawing",
        (args.width as u32, args.height as u32),
    )
}
