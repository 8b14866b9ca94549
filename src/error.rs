use std::path::PathBuf;

use thiserror::Error;

/// Raised while turning a triangle into edge lines.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GeometryError {
    #[error("vertical edge at x = {x}: slope is undefined")]
    VerticalEdge { x: f32 },
    #[error("degenerate triangle: vertices are collinear")]
    Degenerate,
}

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to encode {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("pixel buffer holds {actual} bytes, expected {expected}")]
    BufferSize { expected: usize, actual: usize },
}

impl CodecError {
    /// Stable numeric code, printed alongside the message by the driver.
    pub fn code(&self) -> u32 {
        match self {
            CodecError::Decode { .. } => 1,
            CodecError::Encode { .. } => 2,
            CodecError::BufferSize { .. } => 3,
        }
    }
}
