use crate::basepoint::Basepoint;
use crate::samples::Samples;
use crate::{CanvasPoint, CanvasSize, DevicePoint, ScreenSpace, ScreenPoint};
use euclid::Point2D;
use palette::Srgb;

/// Where a front end puts (0, 0) on the screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Frame {
    /// (0, 0) is the window corner, the same place as on the canvas
    Origin,
    /// (0, 0) is the window center
    Centered,
}

impl Frame {
    pub fn to_canvas(self, pixel: ScreenPoint, canvas: CanvasSize) -> CanvasPoint {
        match self {
            Frame::Origin => CanvasPoint::new(pixel.x, pixel.y),
            Frame::Centered => {
                CanvasPoint::new(pixel.x + canvas.width / 2, pixel.y + canvas.height / 2)
            }
        }
    }

    /// Transform this point from screen pixels into -1..1 device space. Centered frames divide by
    /// the integer half of each side.
    pub fn to_device(self, pixel: Point2D<f32, ScreenSpace>, canvas: CanvasSize) -> DevicePoint {
        let (x, y) = (f64::from(pixel.x), f64::from(pixel.y));
        let (w, h) = (canvas.width, canvas.height);
        match self {
            Frame::Origin => DevicePoint::new(
                (2.0 * (x / w as f64) - 1.0) as f32,
                (2.0 * (y / h as f64) - 1.0) as f32,
            ),
            Frame::Centered => {
                DevicePoint::new((x / (w / 2) as f64) as f32, (y / (h / 2) as f64) as f32)
            }
        }
    }
}

/// Euclidean distance between two canvas pixels
pub fn distance(a: CanvasPoint, b: CanvasPoint) -> f64 {
    let dlength = a.x.abs_diff(b.x) as f64;
    let dwidth = a.y.abs_diff(b.y) as f64;
    (dlength * dlength + dwidth * dwidth).sqrt()
}

/// One channel's share of a basepoint's color, truncated to an integer. Never negative.
fn attenuate(channel: u8, falloff: f64) -> u32 {
    let share = (f64::from(channel) * falloff) as i64;
    share.max(0) as u32
}

/// Blend the color of a canvas pixel from every basepoint. Each basepoint contributes its color
/// scaled linearly from full at its own position down to nothing at its dropoff radius, and the
/// sum saturates at 255. A pixel sitting exactly on a basepoint takes that basepoint's color
/// outright.
pub fn colorize(pixel: CanvasPoint, basepoints: &[Basepoint]) -> Srgb<u8> {
    let mut sum = [0u32; 3];
    for basepoint in basepoints {
        let channels = [basepoint.color.red, basepoint.color.green, basepoint.color.blue];
        if basepoint.position == pixel {
            sum = channels.map(u32::from);
            break;
        }

        let falloff = 1.0 - (1.0 / basepoint.dropoff) * distance(pixel, basepoint.position);
        for (total, channel) in sum.iter_mut().zip(channels.iter()) {
            *total += attenuate(*channel, falloff);
        }
    }

    let [red, green, blue] = sum.map(|total| total.min(255) as u8);
    Srgb::new(red, green, blue)
}

pub fn normalized(color: Srgb<u8>) -> Srgb<f32> {
    color.into_format()
}

/// Colors the pixels of one rendering pass. The basepoints are borrowed for the whole pass and
/// never change underneath it.
#[derive(Clone, Copy, Debug)]
pub struct Painter<'a> {
    basepoints: &'a [Basepoint],
    frame: Frame,
    canvas: CanvasSize,
}

impl<'a> Painter<'a> {
    pub fn new(basepoints: &'a [Basepoint], frame: Frame, canvas: CanvasSize) -> Self {
        Painter {
            basepoints,
            frame,
            canvas,
        }
    }

    pub fn frame(&self) -> Frame {
        self.frame
    }

    pub fn canvas(&self) -> CanvasSize {
        self.canvas
    }

    pub fn colorize(&self, pixel: ScreenPoint) -> Srgb<u8> {
        colorize(self.frame.to_canvas(pixel, self.canvas), self.basepoints)
    }

    pub fn paint<I: IntoIterator<Item = ScreenPoint>>(&self, pixels: I, samples: &mut Samples) {
        for pixel in pixels {
            samples.push(pixel, self.colorize(pixel));
        }
    }
}
