use clap::{Parser, Subcommand};
use either::Either;
use log::*;
use std::time::Instant;

use huefield::basepoint::generate_quadrants;
use huefield::graphics;
use huefield::raster;
use huefield::samples::report_compute;
use huefield::*;

/// Draw a single line or circle, colored from four random basepoints. Coordinates are pixels
/// from the window corner.
#[derive(Debug, Parser)]
struct Args {
    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(i64).range(4..=16384))]
    width: i64,

    #[arg(long, default_value_t = 700, value_parser = clap::value_parser!(i64).range(4..=16384))]
    height: i64,

    /// Seed for the basepoints; random when left out
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    shape: Option<Shape>,
}

#[derive(Debug, Subcommand)]
enum Shape {
    #[command(allow_negative_numbers = true)]
    Line { x0: i64, y0: i64, x1: i64, y1: i64 },
    #[command(allow_negative_numbers = true)]
    Circle { x: i64, y: i64, radius: i64 },
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

    let shape = args.shape.unwrap_or(Shape::Circle {
        x: 300,
        y: 400,
        radius: 100,
    });
    info!("Drawing {:?}", shape);

    let started = Instant::now();
    let pixels = match shape {
        Shape::Line { x0, y0, x1, y1 } => Either::Left(raster::line(
            ScreenPoint::new(x0, y0),
            ScreenPoint::new(x1, y1),
        )),
        Shape::Circle { x, y, radius } => {
            Either::Right(raster::circle(ScreenPoint::new(x, y), radius))
        }
    };
    let mut samples = Samples::new();
    Painter::new(&basepoints, Frame::Origin, canvas).paint(pixels, &mut samples);
    samples.normalize(Frame::Origin, canvas, OutOfBounds::Keep);
    report_compute(started.elapsed(), samples.len());

    graphics::leggo(
        &samples,
        "Line Drawing",
        (args.width as u32, args.height as u32),
    )
}
