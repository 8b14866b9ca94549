use std::path::Path;

use image::{DynamicImage, ExtendedColorType, GenericImageView};
use log::{info, warn};

use crate::config::ImageConfig;
use crate::error::CodecError;
use crate::grid::Grid;
use crate::pixel::Pixel;

/// Loads any format `image` understands as RGBA8, top row first.
pub fn decode<P: AsRef<Path>>(path: P) -> Result<Grid<Pixel>, CodecError> {
    let path = path.as_ref();
    let img: DynamicImage =
        image::open(path).map_err(|source| CodecError::Decode { path: path.to_path_buf(), source })?;
    let (width, height) = img.dimensions();
    let rgba_img = img.to_rgba8();
    Grid::from_rgba(width, height, rgba_img.as_raw())
}

/// Writes the grid as RGBA8. The format follows the file extension.
pub fn encode<P: AsRef<Path>>(path: P, grid: &Grid<Pixel>) -> Result<(), CodecError> {
    let path = path.as_ref();
    image::save_buffer(path, grid.as_rgba(), grid.width(), grid.height(), ExtendedColorType::Rgba8)
        .map_err(|source| CodecError::Encode { path: path.to_path_buf(), source })
}

/// Decodes the configured background. A failed decode falls back to the
/// configured plain background when there is one, and is returned otherwise.
pub fn decode_or_fallback(image: &ImageConfig) -> Result<Grid<Pixel>, CodecError> {
    match decode(&image.background) {
        Ok(grid) => {
            info!("Imported {}", image.background.display());
            Ok(grid)
        }
        Err(err) => match image.fallback {
            Some(fallback) => {
                warn!(
                    "error {} occurred while importing: {err}; using a {}x{} {:?} background",
                    err.code(),
                    fallback.width,
                    fallback.height,
                    fallback.color
                );
                Ok(Grid::filled(fallback.width, fallback.height, fallback.color))
            }
            None => Err(err),
        },
    }
}
