//! Single-triangle rasterizer.
//!
//! A triangle is turned into three edge lines plus the side of each line its
//! centroid falls on ([`edge::analyze`]). Every grid cell is then tested
//! against those three half-planes ([`membership::classify`]) and interior
//! cells are either labelled for an ASCII dump or alpha-blended into an RGBA
//! image ([`scan`]).

pub mod codec;
pub mod config;
pub mod console;
pub mod edge;
pub mod error;
pub mod geometry;
pub mod grid;
pub mod membership;
pub mod pixel;
pub mod point2d;
pub mod rectangle;
pub mod scan;
pub mod triangle;

pub use edge::{TriangleInfo, analyze};
pub use error::{CodecError, GeometryError};
pub use grid::{Grid, GridPoint};
pub use membership::{Membership, classify};
pub use pixel::{Pixel, blend};
pub use point2d::Point2D;
pub use triangle::Triangle2D;
