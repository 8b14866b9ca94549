// External crates
use anyhow::{Context, Result};
use log::{debug, info};

// STD library
use std::time::Instant;

// Internal imports
use trirasterizer::codec;
use trirasterizer::config::{ImageConfig, OutputConfig, RenderConfig};
use trirasterizer::console::{self, Label};
use trirasterizer::rectangle::BoundingBox;
use trirasterizer::scan::{BlendWriter, CellWriter, LabelWriter, par_scan, scan};
use trirasterizer::{Grid, TriangleInfo, analyze};

fn main() -> Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args_os().nth(1) {
        Some(path) => {
            info!("Loading config from {}", path.to_string_lossy());
            RenderConfig::load(&path)?
        }
        None => {
            info!("No config file given, using built-in defaults");
            RenderConfig::default()
        }
    };

    let threads = config.threads();
    rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build_global()
        .context("Failed to build rayon thread pool")?;
    info!("Thread pool: {threads} threads (parallel scan: {})", config.parallel);

    let triangle_info = analyze(config.triangle).context("Triangle can't be rasterized")?;
    info!("Triangle {:?}, centroid {:?}", triangle_info.triangle(), triangle_info.centroid());
    debug!("Edge lines {:?}, interior sides {:?}", triangle_info.lines(), triangle_info.orientations());
    let bbi = BoundingBox::of(triangle_info.triangle()).info();
    debug!("Bounding box {:?}: {}x{} ({} grid points)", bbi.bb, bbi.depth_x, bbi.depth_y, bbi.num_grid_points);

    match &config.output {
        OutputConfig::Console { width, height } => run_console(&config, &triangle_info, *width, *height),
        OutputConfig::Image(image) => run_image(&config, &triangle_info, image),
    }
}

fn paint<C: Send, W: CellWriter<C>>(config: &RenderConfig, grid: &mut Grid<C>, info: &TriangleInfo, writer: &W) -> usize {
    let start = Instant::now();
    let interior = if config.parallel {
        par_scan(grid, info, config.region, writer)
    } else {
        scan(grid, info, config.region, writer)
    };
    info!("Painted {interior} members in {:.2?} ({:?} region)", start.elapsed(), config.region);
    interior
}

fn run_console(config: &RenderConfig, info: &TriangleInfo, width: u32, height: u32) -> Result<()> {
    let mut grid: Grid<Label> = Grid::new(width, height);
    let interior = paint(config, &mut grid, info, &LabelWriter);
    print!("{}", console::render_ascii(&grid));
    println!("{}", console::summary(&grid, interior));
    Ok(())
}

fn run_image(config: &RenderConfig, info: &TriangleInfo, image: &ImageConfig) -> Result<()> {
    let load_start = Instant::now();
    let mut grid = codec::decode_or_fallback(image).context("No usable background and no fallback configured")?;
    info!("Background ready: {}x{} pixels in {:.2?}", grid.width(), grid.height(), load_start.elapsed());

    paint(config, &mut grid, info, &BlendWriter { fill: image.fill });

    let save_start = Instant::now();
    codec::encode(&image.output, &grid).with_context(|| format!("Saving {}", image.output.display()))?;
    info!("Saved {} in {:.2?}", image.output.display(), save_start.elapsed());
    Ok(())
}
