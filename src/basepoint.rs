//! Basepoints are the randomly placed, randomly colored anchors that every other pixel takes its
//! color from. One set is generated per rendering pass, one basepoint per screen quadrant, and no
//! two basepoints in a set may have nearly the same color.
use crate::error::{Error, Result};
use crate::{CanvasPoint, CanvasSize};
use log::*;
use palette::Srgb;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::ops::{Range, RangeInclusive};

/// Two colors closer than this on every channel count as the same color
pub const SIMILARITY_THRESHOLD: i32 = 50;
pub const LENGTH_SPLIT: i64 = 4;
pub const WIDTH_SPLIT: i64 = 4;
pub const MIN_CHANNEL: u8 = 127;
pub const MAX_CHANNEL: u8 = 255;

/// With the default channel range and threshold almost every draw is accepted, so this is only
/// reached when the parameters make distinct colors impossible.
pub const MAX_ATTEMPTS: u32 = 100_000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Basepoint {
    pub position: CanvasPoint,
    pub color: Srgb<u8>,
    /// Distance at which this basepoint stops contributing any color
    pub dropoff: f64,
}

/// Half-open ranges to sample a basepoint position from. `length` is x, `width` is y.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub length: Range<i64>,
    pub width: Range<i64>,
}

impl Region {
    pub fn new(length: Range<i64>, width: Range<i64>) -> Self {
        Region { length, width }
    }

    pub fn contains(&self, point: CanvasPoint) -> bool {
        self.length.contains(&point.x) && self.width.contains(&point.y)
    }

    fn check(&self) -> Result<()> {
        for (axis, range) in &[("length", &self.length), ("width", &self.width)] {
            if range.is_empty() {
                return Err(Error::EmptyRange {
                    axis: *axis,
                    start: range.start as f64,
                    end: range.end as f64,
                });
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaletteParams {
    pub canvas: CanvasSize,
    pub similarity_threshold: i32,
    pub channels: RangeInclusive<u8>,
    pub length_split: i64,
    pub width_split: i64,
    pub max_attempts: u32,
}

impl PaletteParams {
    pub fn new(canvas: CanvasSize) -> Self {
        PaletteParams {
            canvas,
            similarity_threshold: SIMILARITY_THRESHOLD,
            channels: MIN_CHANNEL..=MAX_CHANNEL,
            length_split: LENGTH_SPLIT,
            width_split: WIDTH_SPLIT,
            max_attempts: MAX_ATTEMPTS,
        }
    }

    pub fn with_similarity_threshold(mut self, threshold: i32) -> Self {
        self.similarity_threshold = threshold;
        self
    }

    pub fn with_channels(mut self, channels: RangeInclusive<u8>) -> Self {
        self.channels = channels;
        self
    }

    pub fn with_splits(mut self, length_split: i64, width_split: i64) -> Self {
        self.length_split = length_split;
        self.width_split = width_split;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Dropoff radii run from three quarters of the longer canvas side up to the whole side. The
    /// lower bound is computed in integers.
    pub fn dropoff_range(&self) -> Range<f64> {
        let longest = self.canvas.width.max(self.canvas.height);
        (3 * longest / 4) as f64..longest as f64
    }

    /// The four corner regions: top left, top right, bottom left, bottom right.
    pub fn quadrants(&self) -> Result<[Region; 4]> {
        if self.length_split <= 0 || self.width_split <= 0 {
            return Err(Error::InvalidParams(format!(
                "splits must be positive, got {}x{}",
                self.length_split, self.width_split
            )));
        }
        let (w, h) = (self.canvas.width, self.canvas.height);
        if w < self.length_split || h < self.width_split {
            return Err(Error::CanvasTooSmall {
                width: w,
                height: h,
            });
        }

        let (lw, lh) = (w / self.length_split, h / self.width_split);
        Ok([
            Region::new(0..lw, 0..lh),
            Region::new(w - lw..w, 0..lh),
            Region::new(0..lw, h - lh..h),
            Region::new(w - lw..w, h - lh..h),
        ])
    }
}

/// Produces raw basepoint draws. Whether a draw is kept is decided by `generate`.
pub trait CandidateSource {
    fn candidate(&mut self, region: &Region, params: &PaletteParams) -> Result<Basepoint>;
}

/// Draws every basepoint field uniformly from its range
pub struct RandomCandidates<R> {
    rng: R,
}

impl<R: Rng> RandomCandidates<R> {
    pub fn new(rng: R) -> Self {
        RandomCandidates { rng }
    }
}

impl RandomCandidates<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> CandidateSource for RandomCandidates<R> {
    fn candidate(&mut self, region: &Region, params: &PaletteParams) -> Result<Basepoint> {
        region.check()?;
        if params.channels.is_empty() {
            return Err(Error::EmptyRange {
                axis: "channel",
                start: *params.channels.start() as f64,
                end: *params.channels.end() as f64,
            });
        }
        let dropoff = params.dropoff_range();
        if dropoff.is_empty() {
            return Err(Error::EmptyRange {
                axis: "dropoff",
                start: dropoff.start,
                end: dropoff.end,
            });
        }

        let length = self.rng.gen_range(region.length.clone());
        let width = self.rng.gen_range(region.width.clone());
        let red = self.rng.gen_range(params.channels.clone());
        let green = self.rng.gen_range(params.channels.clone());
        let blue = self.rng.gen_range(params.channels.clone());
        Ok(Basepoint {
            position: CanvasPoint::new(length, width),
            color: Srgb::new(red, green, blue),
            dropoff: self.rng.gen_range(dropoff),
        })
    }
}

/// True when every channel of `a` is strictly within `threshold` of `b`
pub fn too_similar(a: Srgb<u8>, b: Srgb<u8>, threshold: i32) -> bool {
    let close = |x: u8, y: u8| (i32::from(x) - i32::from(y)).abs() < threshold;
    close(a.red, b.red) && close(a.green, b.green) && close(a.blue, b.blue)
}

/// Draw a basepoint inside `region` whose color is distinct from everything in `existing`. A draw
/// that collides is thrown away whole, position and dropoff included, and drawn again.
pub fn generate<S: CandidateSource + ?Sized>(
    region: &Region,
    existing: &[Basepoint],
    source: &mut S,
    params: &PaletteParams,
) -> Result<Basepoint> {
    for attempt in 1..=params.max_attempts {
        let candidate = source.candidate(region, params)?;
        match existing
            .iter()
            .find(|accepted| too_similar(candidate.color, accepted.color, params.similarity_threshold))
        {
            Some(accepted) => trace!(
                "attempt {}: {:?} is too close to {:?}",
                attempt,
                candidate.color,
                accepted.color
            ),
            None => {
                debug!(
                    "basepoint at {:?} color {:?} dropoff {:.1} after {} attempt(s)",
                    candidate.position, candidate.color, candidate.dropoff, attempt
                );
                return Ok(candidate);
            }
        }
    }
    Err(Error::SimilarityExhausted {
        attempts: params.max_attempts,
    })
}

/// One basepoint per region, generated in order so each one is checked against all before it
pub fn generate_set<S: CandidateSource + ?Sized>(
    regions: &[Region],
    source: &mut S,
    params: &PaletteParams,
) -> Result<Vec<Basepoint>> {
    let mut basepoints = Vec::with_capacity(regions.len());
    for region in regions {
        let basepoint = generate(region, &basepoints, source, params)?;
        basepoints.push(basepoint);
    }
    Ok(basepoints)
}

pub fn generate_quadrants<S: CandidateSource + ?Sized>(
    source: &mut S,
    params: &PaletteParams,
) -> Result<Vec<Basepoint>> {
    generate_set(&params.quadrants()?, source, params)
}
