use bytemuck::cast_slice;

use crate::error::CodecError;
use crate::pixel::Pixel;
use crate::point2d::Point2D;
use crate::rectangle::Rect;

#[inline(always)]
fn flat_index(width: u32, x: u32, y: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// A cell position: `row` is y, `column` is x, `index` is the flat offset
/// `row * width + column` into the cell buffer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct GridPoint {
    pub row: u32,
    pub column: u32,
    pub index: usize,
}

impl GridPoint {
    #[inline(always)]
    pub fn at(column: u32, row: u32, width: u32) -> Self {
        GridPoint { row, column, index: flat_index(width, column, row) }
    }

    /// Grid coordinates are used directly as geometric coordinates.
    #[inline(always)]
    pub fn to_point(self) -> Point2D {
        Point2D { x: self.column as f32, y: self.row as f32 }
    }
}

/// Row-major `width x height` buffer of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<C> {
    width: u32,
    height: u32,
    cells: Vec<C>,
}

impl<C: Clone> Grid<C> {
    pub fn filled(width: u32, height: u32, value: C) -> Self {
        Self { width, height, cells: vec![value; width as usize * height as usize] }
    }
}

impl<C: Clone + Default> Grid<C> {
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, C::default())
    }
}

impl<C> Grid<C> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Flat index of column `x`, row `y`.
    #[inline(always)]
    pub fn index(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "cell ({x}, {y}) outside {}x{} grid",
            self.width,
            self.height
        );
        flat_index(self.width, x, y)
    }

    pub fn get(&self, x: u32, y: u32) -> &C {
        &self.cells[self.index(x, y)]
    }

    pub fn get_mut(&mut self, x: u32, y: u32) -> &mut C {
        let i = self.index(x, y);
        &mut self.cells[i]
    }

    pub fn cells(&self) -> &[C] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [C] {
        &mut self.cells
    }

    pub fn bounds(&self) -> Rect {
        Rect::full(self.width, self.height)
    }

    /// Every cell position exactly once, row by row, top to bottom.
    pub fn points(&self) -> impl Iterator<Item = GridPoint> + use<C> {
        self.points_in(self.bounds())
    }

    /// Cell positions inside `rect`, row by row. `rect` must lie within the grid.
    pub fn points_in(&self, rect: Rect) -> impl Iterator<Item = GridPoint> + use<C> {
        assert!(rect.max_x <= self.width && rect.max_y <= self.height, "{rect:?} exceeds grid");
        let width = self.width;
        (rect.min_y..rect.max_y)
            .flat_map(move |row| (rect.min_x..rect.max_x).map(move |column| GridPoint::at(column, row, width)))
    }

    /// Rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[C]> {
        let width = self.width as usize;
        (0..self.height as usize).map(move |y| &self.cells[y * width..(y + 1) * width])
    }
}

impl Grid<Pixel> {
    /// Wraps a flat RGBA8 buffer, `(y * width + x) * 4` bytes per pixel offset.
    pub fn from_rgba(width: u32, height: u32, rgba: &[u8]) -> Result<Self, CodecError> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(CodecError::BufferSize { expected, actual: rgba.len() });
        }
        Ok(Self { width, height, cells: cast_slice::<u8, Pixel>(rgba).to_vec() })
    }

    pub fn as_rgba(&self) -> &[u8] {
        cast_slice(&self.cells)
    }
}
