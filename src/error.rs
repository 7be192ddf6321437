use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    #[error("empty {axis} range {start}..{end}")]
    EmptyRange {
        axis: &'static str,
        start: f64,
        end: f64,
    },

    #[error("canvas {width}x{height} is too small to split into quadrants")]
    CanvasTooSmall { width: i64, height: i64 },

    #[error("no sufficiently distinct basepoint color after {attempts} attempts")]
    SimilarityExhausted { attempts: u32 },

    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

pub type Result<T> = std::result::Result<T, Error>;
