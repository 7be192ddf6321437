//! Integer rasterizers. Each one is a lazy iterator over the pixels of its shape, in the order the
//! pixels are drawn.
use crate::ScreenPoint;

/// Digital differential line from `from` to `to`, both ends included
#[derive(Clone, Debug)]
pub struct LinePixels {
    current: ScreenPoint,
    step: (i64, i64),
    /// Whether x is the axis that advances on every pixel
    x_major: bool,
    decision: i64,
    inc1: i64,
    inc2: i64,
    remaining: i64,
    started: bool,
}

pub fn line(from: ScreenPoint, to: ScreenPoint) -> LinePixels {
    let delta_x = (to.x - from.x).abs();
    let delta_y = (to.y - from.y).abs();
    let step = (
        if to.x < from.x { -1 } else { 1 },
        if to.y < from.y { -1 } else { 1 },
    );

    let x_major = delta_x > delta_y;
    let (major, minor) = if x_major {
        (delta_x, delta_y)
    } else {
        (delta_y, delta_x)
    };

    LinePixels {
        current: from,
        step,
        x_major,
        decision: 2 * minor - major,
        inc1: 2 * (minor - major),
        inc2: 2 * minor,
        remaining: major,
        started: false,
    }
}

impl Iterator for LinePixels {
    type Item = ScreenPoint;

    fn next(&mut self) -> Option<ScreenPoint> {
        if !self.started {
            self.started = true;
            return Some(self.current);
        }
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let minor_step = self.decision >= 0;
        if minor_step {
            self.decision += self.inc1;
        } else {
            self.decision += self.inc2;
        }
        if self.x_major {
            self.current.x += self.step.0;
            if minor_step {
                self.current.y += self.step.1;
            }
        } else {
            self.current.y += self.step.1;
            if minor_step {
                self.current.x += self.step.0;
            }
        }
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.remaining as usize + if self.started { 0 } else { 1 };
        (left, Some(left))
    }
}

impl ExactSizeIterator for LinePixels {}

/// Midpoint circle. Every step yields the eight symmetric pixels of one octant position.
#[derive(Clone, Debug)]
pub struct CirclePixels {
    center: ScreenPoint,
    x: i64,
    y: i64,
    decision: i64,
    increment_east: i64,
    increment_southeast: i64,
    octant: usize,
}

pub fn circle(center: ScreenPoint, radius: i64) -> CirclePixels {
    CirclePixels {
        center,
        x: 0,
        y: radius,
        decision: 1 - radius,
        increment_east: 3,
        increment_southeast: 5 - 2 * radius,
        octant: 0,
    }
}

impl CirclePixels {
    fn advance(&mut self) {
        if self.decision < 0 {
            self.decision += self.increment_east;
            self.increment_east += 2;
            self.increment_southeast += 2;
        } else {
            self.decision += self.increment_southeast;
            self.increment_east += 2;
            self.increment_southeast += 4;
            self.y -= 1;
        }
        self.x += 1;
    }
}

impl Iterator for CirclePixels {
    type Item = ScreenPoint;

    fn next(&mut self) -> Option<ScreenPoint> {
        if self.y < self.x {
            return None;
        }

        let (x, y) = (self.x, self.y);
        let (dx, dy) = match self.octant {
            0 => (x, y),
            1 => (-x, y),
            2 => (x, -y),
            3 => (-x, -y),
            4 => (y, x),
            5 => (-y, x),
            6 => (y, -x),
            _ => (-y, -x),
        };

        self.octant += 1;
        if self.octant == 8 {
            self.octant = 0;
            self.advance();
        }
        Some(ScreenPoint::new(self.center.x + dx, self.center.y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(pixels: impl Iterator<Item = ScreenPoint>) -> Vec<(i64, i64)> {
        pixels.map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_line_x_major() {
        assert_eq!(
            points(line(ScreenPoint::new(0, 0), ScreenPoint::new(5, 2))),
            vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]
        );
    }

    #[test]
    fn test_line_y_major_backwards() {
        assert_eq!(
            points(line(ScreenPoint::new(2, 4), ScreenPoint::new(0, -1))),
            vec![(2, 4), (2, 3), (1, 2), (1, 1), (0, 0), (0, -1)]
        );
    }

    #[test]
    fn test_line_diagonal_and_point() {
        assert_eq!(
            points(line(ScreenPoint::new(0, 0), ScreenPoint::new(-3, 3))),
            vec![(0, 0), (-1, 1), (-2, 2), (-3, 3)]
        );
        assert_eq!(
            points(line(ScreenPoint::new(7, 7), ScreenPoint::new(7, 7))),
            vec![(7, 7)]
        );
    }

    #[test]
    fn test_line_ends_and_count() {
        let ends = [((0, 0), (40, -13)), ((-20, 9), (3, 100)), ((5, 5), (-60, 5))];
        for &((x0, y0), (x1, y1)) in &ends {
            let pixels = line(ScreenPoint::new(x0, y0), ScreenPoint::new(x1, y1));
            let expected = (x1 - x0).abs().max((y1 - y0).abs()) as usize + 1;
            assert_eq!(pixels.len(), expected);

            let drawn = points(pixels);
            assert_eq!(drawn.len(), expected);
            assert_eq!(drawn[0], (x0, y0));
            assert_eq!(*drawn.last().unwrap(), (x1, y1));
            for pair in drawn.windows(2) {
                assert!((pair[1].0 - pair[0].0).abs() <= 1);
                assert!((pair[1].1 - pair[0].1).abs() <= 1);
            }
        }
    }

    #[test]
    fn test_circle_first_step_order() {
        let drawn = points(circle(ScreenPoint::new(10, 20), 3).take(8));
        assert_eq!(
            drawn,
            vec![
                (10, 23),
                (10, 23),
                (10, 17),
                (10, 17),
                (13, 20),
                (7, 20),
                (13, 20),
                (7, 20)
            ]
        );
    }

    #[test]
    fn test_circle_on_radius() {
        let radius = 17;
        let drawn = points(circle(ScreenPoint::new(-5, 8), radius));
        assert_eq!(drawn.len() % 8, 0);
        for (x, y) in drawn {
            let r = (((x + 5).pow(2) + (y - 8).pow(2)) as f64).sqrt();
            assert!((r - radius as f64).abs() < 1.0, "({}, {}) is {} away", x, y, r);
        }
    }

    #[test]
    fn test_circle_zero_radius() {
        assert_eq!(points(circle(ScreenPoint::new(1, 1), 0)), vec![(1, 1); 8]);
    }
}
