//! Run configuration.
//!
//! Everything has a compiled-in default, so an empty JSON object (or no file
//! at all) renders the stock triangle over `Phoebe.png`. A file only needs to
//! name the fields it changes.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::pixel::Pixel;
use crate::point2d::Point2D;
use crate::scan::ScanRegion;
use crate::triangle::Triangle2D;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Vertices in pixel coordinates of the output grid.
    pub triangle: Triangle2D,
    pub output: OutputConfig,
    pub region: ScanRegion,
    /// Spread the scan over the rayon pool.
    pub parallel: bool,
    /// Pool size; the number of logical cores when unset.
    pub threads: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OutputConfig {
    /// Label grid printed as ASCII.
    Console { width: u32, height: u32 },
    /// Fill blended over a background image and written back out.
    Image(ImageConfig),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    pub background: PathBuf,
    pub output: PathBuf,
    pub fill: Pixel,
    /// Used when the background can't be decoded. `None` makes that fatal.
    pub fallback: Option<FallbackBackground>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackBackground {
    pub width: u32,
    pub height: u32,
    pub color: Pixel,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            triangle: Triangle2D::new(
                Point2D::new(1.02, 2.11),
                Point2D::new(240.28, 380.79),
                Point2D::new(610.63, 280.99),
            ),
            output: OutputConfig::Image(ImageConfig::default()),
            region: ScanRegion::Full,
            parallel: true,
            threads: None,
        }
    }
}

impl Default for ImageConfig {
    fn default() -> Self {
        ImageConfig {
            background: PathBuf::from("Phoebe.png"),
            output: PathBuf::from("triangle.png"),
            fill: Pixel::new(0, 0, 255, 100),
            fallback: Some(FallbackBackground { width: 640, height: 400, color: Pixel::new(0, 0, 0, 255) }),
        }
    }
}

impl RenderConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file)).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn threads(&self) -> usize {
        self.threads.unwrap_or_else(num_cpus::get).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config: RenderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, RenderConfig::default());
    }

    #[test]
    fn console_mode_with_partial_fields() {
        let json = r#"{
            "triangle": { "a": {"x": 1.02, "y": 2.11}, "b": {"x": 64.28, "y": 28.79}, "c": {"x": 51.63, "y": 38.99} },
            "output": { "mode": "console", "width": 70, "height": 40 },
            "region": "bounding_box",
            "threads": 2
        }"#;
        let config: RenderConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.output, OutputConfig::Console { width: 70, height: 40 });
        assert_eq!(config.region, ScanRegion::BoundingBox);
        assert_eq!(config.triangle.b, Point2D::new(64.28, 28.79));
        assert!(config.parallel);
        assert_eq!(config.threads(), 2);
    }

    #[test]
    fn image_mode_without_fallback() {
        let json = r#"{ "output": { "mode": "image", "background": "bg.png", "fallback": null,
                        "fill": {"red": 255, "green": 0, "blue": 0, "alpha": 128} } }"#;
        let config: RenderConfig = serde_json::from_str(json).unwrap();
        let OutputConfig::Image(image) = config.output else { panic!("expected image output") };
        assert_eq!(image.background, PathBuf::from("bg.png"));
        assert_eq!(image.output, PathBuf::from("triangle.png"));
        assert_eq!(image.fill, Pixel::new(255, 0, 0, 128));
        assert_eq!(image.fallback, None);
    }

    #[test]
    fn unknown_mode_is_rejected() {
        assert!(serde_json::from_str::<RenderConfig>(r#"{ "output": { "mode": "window" } }"#).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = RenderConfig::load("/nonexistent/trirasterizer.json").unwrap_err();
        assert!(err.to_string().contains("opening config"));
    }

    #[test]
    fn zero_threads_means_one() {
        let config = RenderConfig { threads: Some(0), ..RenderConfig::default() };
        assert_eq!(config.threads(), 1);
    }
}
