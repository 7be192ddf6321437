use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::*;
use std::time::Instant;

use huefield::basepoint::generate_quadrants;
use huefield::field::paint_polyline;
use huefield::graphics;
use huefield::samples::report_compute;
use huefield::*;

/// Follow the field (x², y) from a starting point, drawing one arrow per step. Coordinates are
/// pixels from the window center.
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(i64).range(4..=16384))]
    width: i64,

    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(i64).range(4..=16384))]
    height: i64,

    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    start_x: i64,

    #[arg(long, default_value_t = 100, allow_negative_numbers = true)]
    start_y: i64,

    /// How many arrows to chain
    #[arg(long, default_value_t = 20)]
    lines: usize,

    /// Seed for the basepoints; random when left out
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let (half_w, half_h) = (args.width / 2, args.height / 2);
    if args.start_x.abs() > half_w || args.start_y.abs() > half_h {
        Args::command()
            .error(
                ErrorKind::ValueValidation,
                format!(
                    "the starting point must lie in [{}, {}] x [{}, {}]",
                    -half_w, half_w, -half_h, half_h
                ),
            )
            .exit();
    }

    let canvas = CanvasSize::new(args.width, args.height);
    let mut source = match args.seed {
        Some(seed) => RandomCandidates::seeded(seed),
        None => RandomCandidates::from_entropy(),
    };
    let basepoints = generate_quadrants(&mut source, &PaletteParams::new(canvas))?;

    let started = Instant::now();
    let painter = Painter::new(&basepoints, Frame::Centered, canvas);
    let mut samples = paint_polyline(
        ScreenPoint::new(args.start_x, args.start_y),
        args.lines,
        &painter,
    );
    samples.normalize(Frame::Centered, canvas, OutOfBounds::Keep);
    report_compute(started.elapsed(), samples.len());
    debug!("{} floats", samples.as_floats().len());

    graphics::leggo(
        &samples,
        "Vector Field - Polyline Drawing",
        (args.width as u32, args.height as u32),
    )
}
