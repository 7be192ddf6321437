use euclid::{Point2D, Size2D};

pub mod basepoint;
pub mod color;
pub mod error;
pub mod field;
pub mod graphics;
pub mod raster;
pub mod samples;

pub use basepoint::{Basepoint, PaletteParams, RandomCandidates, Region};
pub use color::{colorize, Frame, Painter};
pub use error::{Error, Result};
pub use samples::{OutOfBounds, Samples, Vertex};

/// This unit refers to the pixel frame a front end rasterizes in. Depending on the program, (0, 0)
/// is either a window corner or the window center; see `Frame`.
pub enum ScreenSpace {}

/// The frame basepoints live in: (0, 0) is the window corner and (W, H) the opposite one
pub enum CanvasSpace {}

/// Normalized device coordinates, -1..1 on both axes
pub enum DeviceSpace {}

pub type ScreenPoint = Point2D<i64, ScreenSpace>;
pub type CanvasPoint = Point2D<i64, CanvasSpace>;
pub type CanvasSize = Size2D<i64, CanvasSpace>;
pub type DevicePoint = Point2D<f32, DeviceSpace>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basepoint::generate_quadrants;

    #[test]
    fn test_line_pass() {
        let canvas = CanvasSize::new(700, 700);
        let basepoints =
            generate_quadrants(&mut RandomCandidates::seeded(11), &PaletteParams::new(canvas))
                .unwrap();
        let first = basepoints[0].position;
        let last = basepoints[3].position;

        // A diagonal through the first and last quadrants, starting on a basepoint
        let from = ScreenPoint::new(first.x, first.y);
        let to = ScreenPoint::new(last.x, last.y);
        let mut samples = Samples::new();
        Painter::new(&basepoints, Frame::Origin, canvas).paint(raster::line(from, to), &mut samples);

        let expected = (to.x - from.x).abs().max((to.y - from.y).abs()) as usize + 1;
        assert_eq!(samples.len(), expected);
        assert_eq!(samples.as_floats().len(), expected * 5);

        let start_color = color::normalized(basepoints[0].color);
        assert_eq!(
            samples.vertices()[0].color,
            [start_color.red, start_color.green, start_color.blue]
        );

        let report = samples.normalize(Frame::Origin, canvas, OutOfBounds::Keep);
        assert_eq!(report.out_of_bounds, 0);
        for vertex in samples.vertices() {
            assert!(vertex.position.iter().all(|v| (-1.0..=1.0).contains(v)));
            assert!(vertex.color.iter().all(|c| (0.0..=1.0).contains(c)));
        }
    }
}
