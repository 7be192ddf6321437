//! Vector-field glyphs built on the rasterizers. All coordinates here are in a centered frame.
use crate::color::Painter;
use crate::error::{Error, Result};
use crate::raster::{circle, line, CirclePixels};
use crate::samples::Samples;
use crate::{CanvasSize, ScreenPoint, ScreenSpace};
use euclid::Vector2D;
use log::*;
use rayon::prelude::*;

pub type ScreenVector = Vector2D<i64, ScreenSpace>;

/// The field vector is divided by this to get an arrow's length
pub const SCALING_FACTOR: i64 = 35;
/// Arrowhead barbs reach back this many pixels along the shaft
pub const ARROW_HEAD: f32 = 3.0;
pub const RADIUS_SCALE: f64 = 5.0;
pub const GRID_SPACING: usize = 50;
pub const CIRCLE_OFFSET: (i64, i64) = (20, 400);

/// One step of a polyline: a shaft from `start` to `end` plus a two-barbed head at `end`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arrow {
    pub start: ScreenPoint,
    pub end: ScreenPoint,
    pub step: ScreenVector,
}

impl Arrow {
    /// The field at (x, y) is (x², y)
    pub fn from_start(start: ScreenPoint) -> Self {
        let step = ScreenVector::new(start.x * start.x / SCALING_FACTOR, start.y / SCALING_FACTOR);
        Arrow {
            start,
            end: start + step,
            step,
        }
    }

    pub fn head(&self) -> [ScreenPoint; 2] {
        let (sx, sy) = (self.step.x, self.step.y);
        let length = ((sx * sx + sy * sy) as f64).sqrt() as f32;
        // A zero step gives NaN here, which truncates to a zero-size head
        let dx = (ARROW_HEAD * sx as f32 / length) as i64;
        let dy = (ARROW_HEAD * sy as f32 / length) as i64;
        let end = self.end;
        [
            ScreenPoint::new(end.x - dx - dy, end.y + dx - dy),
            ScreenPoint::new(end.x - dx + dy, end.y - dx - dy),
        ]
    }

    pub fn pixels(&self) -> impl Iterator<Item = ScreenPoint> {
        let [left, right] = self.head();
        line(self.start, self.end)
            .chain(line(self.end, left))
            .chain(line(self.end, right))
    }
}

/// Arrows chained head to tail, each one starting where the last one ended
#[derive(Clone, Debug)]
pub struct Polyline {
    next: ScreenPoint,
    remaining: usize,
    half: (i64, i64),
}

/// Up to `steps` arrows from `start`. Tracing stops early once a start point leaves the window:
/// x never decreases and |y| never shrinks along the field, so nothing after that point comes
/// back into view.
pub fn polyline(start: ScreenPoint, steps: usize, window: CanvasSize) -> Polyline {
    Polyline {
        next: start,
        remaining: steps,
        half: (window.width / 2, window.height / 2),
    }
}

impl Iterator for Polyline {
    type Item = Arrow;

    fn next(&mut self) -> Option<Arrow> {
        if self.remaining == 0 {
            return None;
        }
        if self.next.x.abs() > self.half.0 || self.next.y.abs() > self.half.1 {
            debug!(
                "polyline left the window at {:?} with {} arrows to go",
                self.next, self.remaining
            );
            self.remaining = 0;
            return None;
        }

        self.remaining -= 1;
        let arrow = Arrow::from_start(self.next);
        self.next = arrow.end;
        Some(arrow)
    }
}

/// A circle whose radius grows with distance from the origin
pub fn circle_glyph(at: ScreenPoint) -> CirclePixels {
    let radius = ((at.x * at.x + at.y * at.y) as f64).sqrt() / RADIUS_SCALE;
    circle(
        ScreenPoint::new(at.x + CIRCLE_OFFSET.0, at.y + CIRCLE_OFFSET.1),
        radius as i64,
    )
}

/// Grid points across a centered window, column by column
pub fn grid(window: CanvasSize, spacing: usize) -> Result<Vec<ScreenPoint>> {
    if spacing == 0 {
        return Err(Error::InvalidParams(String::from("grid spacing must be positive")));
    }
    let (half_w, half_h) = (window.width / 2, window.height / 2);
    Ok((-half_w..half_w)
        .step_by(spacing)
        .flat_map(|i| {
            (-half_h..half_h)
                .step_by(spacing)
                .map(move |j| ScreenPoint::new(i, j))
        })
        .collect())
}

pub fn paint_polyline(start: ScreenPoint, steps: usize, painter: &Painter) -> Samples {
    let mut samples = Samples::new();
    for arrow in polyline(start, steps, painter.canvas()) {
        painter.paint(arrow.pixels(), &mut samples);
    }
    samples
}

/// Rasterize and color one glyph per cell. Cells are painted in parallel and stitched back
/// together in cell order.
pub fn paint_glyphs<F, G>(cells: &[ScreenPoint], glyph: F, painter: &Painter) -> Samples
where
    F: Fn(ScreenPoint) -> G + Sync,
    G: IntoIterator<Item = ScreenPoint>,
{
    cells
        .par_iter()
        .map(|&cell| {
            let mut samples = Samples::new();
            painter.paint(glyph(cell), &mut samples);
            samples
        })
        .collect::<Vec<Samples>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basepoint::{generate_quadrants, PaletteParams, RandomCandidates};
    use crate::color::Frame;

    fn window() -> CanvasSize {
        CanvasSize::new(700, 700)
    }

    #[test]
    fn test_arrow_step() {
        let arrow = Arrow::from_start(ScreenPoint::new(10, 70));
        assert_eq!(arrow.step, ScreenVector::new(2, 2));
        assert_eq!(arrow.end, ScreenPoint::new(12, 72));

        // Division truncates towards zero
        let arrow = Arrow::from_start(ScreenPoint::new(-10, -70));
        assert_eq!(arrow.end, ScreenPoint::new(-8, -72));
    }

    #[test]
    fn test_arrow_head() {
        let arrow = Arrow {
            start: ScreenPoint::new(90, 100),
            end: ScreenPoint::new(100, 100),
            step: ScreenVector::new(10, 0),
        };
        assert_eq!(
            arrow.head(),
            [ScreenPoint::new(97, 103), ScreenPoint::new(97, 97)]
        );
    }

    #[test]
    fn test_zero_arrow() {
        let arrow = Arrow::from_start(ScreenPoint::new(0, 0));
        assert_eq!(arrow.head(), [ScreenPoint::new(0, 0); 2]);
        assert_eq!(arrow.pixels().count(), 3);
    }

    #[test]
    fn test_arrow_pixels() {
        let arrow = Arrow::from_start(ScreenPoint::new(20, 100));
        let pixels: Vec<ScreenPoint> = arrow.pixels().collect();
        let [left, right] = arrow.head();

        assert_eq!(pixels[0], arrow.start);
        assert!(pixels.contains(&arrow.end));
        assert_eq!(*pixels.last().unwrap(), right);
        assert!(pixels.contains(&left));
    }

    #[test]
    fn test_polyline_chains() {
        let arrows: Vec<Arrow> = polyline(ScreenPoint::new(5, 40), 4, window()).collect();
        assert_eq!(arrows.len(), 4);
        for pair in arrows.windows(2) {
            assert_eq!(pair[1].start, pair[0].end);
        }
    }

    #[test]
    fn test_polyline_stops_outside() {
        let arrows: Vec<Arrow> = polyline(ScreenPoint::new(300, 10), 5, window()).collect();
        assert_eq!(arrows.len(), 1);
        assert_eq!(arrows[0].end, ScreenPoint::new(300 + 90_000 / 35, 10));
    }

    #[test]
    fn test_circle_glyph() {
        let pixels: Vec<ScreenPoint> = circle_glyph(ScreenPoint::new(30, 40)).collect();
        assert_eq!(pixels[0], ScreenPoint::new(50, 450));
        assert!(pixels.contains(&ScreenPoint::new(60, 440)));
    }

    #[test]
    fn test_grid() {
        assert_eq!(
            grid(CanvasSize::new(100, 100), 50).unwrap(),
            vec![
                ScreenPoint::new(-50, -50),
                ScreenPoint::new(-50, 0),
                ScreenPoint::new(0, -50),
                ScreenPoint::new(0, 0),
            ]
        );
        assert_eq!(grid(window(), GRID_SPACING).unwrap().len(), 14 * 14);
        assert!(grid(window(), 0).is_err());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let params = PaletteParams::new(window());
        let basepoints = generate_quadrants(&mut RandomCandidates::seeded(3), &params).unwrap();
        let painter = Painter::new(&basepoints, Frame::Centered, window());
        let cells = grid(window(), GRID_SPACING).unwrap();

        let parallel = paint_glyphs(&cells, circle_glyph, &painter);

        let mut sequential = Samples::new();
        for &cell in &cells {
            painter.paint(circle_glyph(cell), &mut sequential);
        }
        assert_eq!(parallel, sequential);
    }
}
