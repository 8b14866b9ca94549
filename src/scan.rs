use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::console::Label;
use crate::edge::TriangleInfo;
use crate::grid::{Grid, GridPoint};
use crate::membership::classify;
use crate::pixel::Pixel;
use crate::rectangle::{self, Rect};

/// What happens to a cell once it is classified interior.
pub trait CellWriter<C>: Sync {
    fn write(&self, cell: &mut C);
}

pub struct LabelWriter;

impl CellWriter<Label> for LabelWriter {
    fn write(&self, cell: &mut Label) {
        *cell = Label::Interior;
    }
}

pub struct BlendWriter {
    pub fill: Pixel,
}

impl CellWriter<Pixel> for BlendWriter {
    fn write(&self, cell: &mut Pixel) {
        cell.blend_over(self.fill);
    }
}

/// Cells visited by a scan. Cells outside the triangle's bounding box are
/// always exterior, so both regions give the same result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanRegion {
    #[default]
    Full,
    BoundingBox,
}

impl ScanRegion {
    pub fn resolve(self, info: &TriangleInfo, width: u32, height: u32) -> Option<Rect> {
        match self {
            ScanRegion::Full => (width > 0 && height > 0).then(|| Rect::full(width, height)),
            ScanRegion::BoundingBox => rectangle::BoundingBox::of(info.triangle()).clamp_to(width, height),
        }
    }
}

/// Classifies every cell in `region`, hands interior cells to `writer`, and
/// returns how many there were.
pub fn scan<C, W: CellWriter<C>>(grid: &mut Grid<C>, info: &TriangleInfo, region: ScanRegion, writer: &W) -> usize {
    let Some(rect) = region.resolve(info, grid.width(), grid.height()) else {
        debug!("{region:?} region is empty, nothing to scan");
        return 0;
    };
    debug!("serial scan over {rect:?}");

    let mut interior = 0;
    for gp in grid.points_in(rect) {
        if classify(gp.to_point(), info).is_interior() {
            writer.write(&mut grid.cells_mut()[gp.index]);
            interior += 1;
        }
    }
    interior
}

/// Same as [`scan`], with rows spread across the rayon pool. Each row is a
/// disjoint slice and reports its own count; the counts are summed at the end.
pub fn par_scan<C: Send, W: CellWriter<C>>(
    grid: &mut Grid<C>,
    info: &TriangleInfo,
    region: ScanRegion,
    writer: &W,
) -> usize {
    let Some(rect) = region.resolve(info, grid.width(), grid.height()) else {
        debug!("{region:?} region is empty, nothing to scan");
        return 0;
    };
    debug!("parallel scan over {rect:?} on {} threads", rayon::current_num_threads());

    let width = grid.width();
    grid.cells_mut()
        .par_chunks_mut(width as usize)
        .enumerate()
        .skip(rect.min_y as usize)
        .take(rect.height() as usize)
        .map(|(row, cells)| {
            let mut interior = 0;
            for column in rect.min_x..rect.max_x {
                let gp = GridPoint::at(column, row as u32, width);
                if classify(gp.to_point(), info).is_interior() {
                    // row slice starts at the row's first cell
                    writer.write(&mut cells[column as usize]);
                    interior += 1;
                }
            }
            interior
        })
        .sum()
}
