use crate::color::{normalized, Frame};
use crate::{CanvasSize, DevicePoint, ScreenPoint};
use bytemuck::{Pod, Zeroable};
use euclid::Point2D;
use log::*;
use palette::Srgb;
use std::time::Duration;

/// One colored point: x, y, r, g, b as five consecutive floats. Positions are raw screen pixels
/// until `Samples::normalize` runs, device coordinates after.
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
#[repr(C)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 3],
}

/// What to do with a point that lands outside -1..1 after normalization
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum OutOfBounds {
    #[default]
    Keep,
    /// Move the point here instead
    Sentinel(DevicePoint),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Normalized {
    /// Points replaced by the sentinel
    pub out_of_bounds: usize,
}

/// Append-only sequence of colored points, in the order they were rasterized
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Samples {
    vertices: Vec<Vertex>,
}

impl Samples {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pixel: ScreenPoint, color: Srgb<u8>) {
        let color = normalized(color);
        self.vertices.push(Vertex {
            position: [pixel.x as f32, pixel.y as f32],
            color: [color.red, color.green, color.blue],
        });
    }

    pub fn append(&mut self, other: &mut Samples) {
        self.vertices.append(&mut other.vertices);
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn as_floats(&self) -> &[f32] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Move every position from screen pixels into device space. This is a pass over the whole
    /// sequence and must only run once, after all points have been pushed.
    pub fn normalize(&mut self, frame: Frame, canvas: CanvasSize, policy: OutOfBounds) -> Normalized {
        let mut report = Normalized::default();
        for vertex in &mut self.vertices {
            let mut device = frame.to_device(
                Point2D::new(vertex.position[0], vertex.position[1]),
                canvas,
            );
            if let OutOfBounds::Sentinel(sentinel) = policy {
                let inside = |v: f32| (-1.0..=1.0).contains(&v);
                if !inside(device.x) || !inside(device.y) {
                    device = sentinel;
                    report.out_of_bounds += 1;
                }
            }
            vertex.position = [device.x, device.y];
        }
        report
    }
}

impl FromIterator<Samples> for Samples {
    fn from_iter<I: IntoIterator<Item = Samples>>(iter: I) -> Self {
        let mut all = Samples::new();
        for mut samples in iter {
            all.append(&mut samples);
        }
        all
    }
}

/// Log how long coloring took, overall and per point
pub fn report_compute(elapsed: Duration, points: usize) {
    let millis = elapsed.as_secs_f64() * 1000.0;
    info!("Render compute finished in {:.0} milliseconds.", millis);
    info!(
        "Points computed: {}. Time per point: {:.6} milliseconds.",
        points,
        millis / points.max(1) as f64
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(pixels: &[(i64, i64)]) -> Samples {
        let mut samples = Samples::new();
        for &(x, y) in pixels {
            samples.push(ScreenPoint::new(x, y), Srgb::new(255, 0, 255));
        }
        samples
    }

    #[test]
    fn test_quintuples() {
        let samples = samples(&[(3, 4), (5, 6)]);
        assert_eq!(
            samples.as_floats(),
            &[3.0, 4.0, 1.0, 0.0, 1.0, 5.0, 6.0, 1.0, 0.0, 1.0]
        );
    }

    #[test]
    fn test_normalize_origin() {
        let mut samples = samples(&[(0, 0), (350, 700), (1400, 0)]);
        let report = samples.normalize(Frame::Origin, CanvasSize::new(700, 700), OutOfBounds::Keep);

        assert_eq!(report.out_of_bounds, 0);
        let positions: Vec<[f32; 2]> = samples.vertices().iter().map(|v| v.position).collect();
        assert_eq!(positions, vec![[-1.0, -1.0], [0.0, 1.0], [3.0, -1.0]]);
    }

    #[test]
    fn test_normalize_sentinel() {
        let mut samples = samples(&[(350, -350), (351, 0), (0, -400)]);
        let report = samples.normalize(
            Frame::Centered,
            CanvasSize::new(700, 700),
            OutOfBounds::Sentinel(DevicePoint::new(-1.0, -1.0)),
        );

        assert_eq!(report.out_of_bounds, 2);
        let positions: Vec<[f32; 2]> = samples.vertices().iter().map(|v| v.position).collect();
        assert_eq!(positions, vec![[1.0, -1.0], [-1.0, -1.0], [-1.0, -1.0]]);
        // Colors are untouched
        assert!(samples.vertices().iter().all(|v| v.color == [1.0, 0.0, 1.0]));
    }

    #[test]
    fn test_collect_keeps_order() {
        let collected: Samples = vec![samples(&[(1, 1)]), samples(&[]), samples(&[(2, 2), (3, 3)])]
            .into_iter()
            .collect();
        assert_eq!(collected, samples(&[(1, 1), (2, 2), (3, 3)]));
    }
}
