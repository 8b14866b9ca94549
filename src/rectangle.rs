use crate::triangle::Triangle2D;

/// Half-open cell span `[min, max)` on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub min_x: u32,
    pub min_y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

// helper methods
impl Rect {
    pub fn full(width: u32, height: u32) -> Self {
        Rect { min_x: 0, min_y: 0, max_x: width, max_y: height }
    }
    pub fn width(&self) -> u32 {
        self.max_x - self.min_x
    }
    pub fn height(&self) -> u32 {
        self.max_y - self.min_y
    }
}

/// Least integer box containing a triangle, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBoxInfo {
    pub bb: BoundingBox,
    pub depth_x: i32,
    pub depth_y: i32,
    pub num_grid_points: i64,
}

impl BoundingBox {
    pub fn of(t: &Triangle2D) -> Self {
        let [a, b, c] = t.vertices();
        BoundingBox {
            min_x: a.x.min(b.x).min(c.x).floor() as i32,
            min_y: a.y.min(b.y).min(c.y).floor() as i32,
            max_x: a.x.max(b.x).max(c.x).ceil() as i32,
            max_y: a.y.max(b.y).max(c.y).ceil() as i32,
        }
    }

    pub fn info(&self) -> BoundingBoxInfo {
        let depth_x = self.max_x - self.min_x;
        let depth_y = self.max_y - self.min_y;
        BoundingBoxInfo { bb: *self, depth_x, depth_y, num_grid_points: depth_x as i64 * depth_y as i64 }
    }

    /// Cells of a `width x height` grid covered by this box, or `None` when
    /// the box misses the grid entirely.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Rect> {
        let clamp = |min: i32, max: i32, dim: u32| -> Option<(u32, u32)> {
            let lo = (min as i64).max(0);
            let hi = (max as i64 + 1).min(dim as i64);
            (lo < hi).then_some((lo as u32, hi as u32))
        };
        let (min_x, max_x) = clamp(self.min_x, self.max_x, width)?;
        let (min_y, max_y) = clamp(self.min_y, self.max_y, height)?;
        Some(Rect { min_x, min_y, max_x, max_y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point2d::Point2D;

    fn sample() -> Triangle2D {
        Triangle2D::new(Point2D::new(1.02, 2.11), Point2D::new(64.28, 28.79), Point2D::new(51.63, 38.99))
    }

    #[test]
    fn box_rounds_outward() {
        let bb = BoundingBox::of(&sample());
        assert_eq!(bb, BoundingBox { min_x: 1, min_y: 2, max_x: 65, max_y: 39 });
        let info = bb.info();
        assert_eq!((info.depth_x, info.depth_y, info.num_grid_points), (64, 37, 64 * 37));
    }

    #[test]
    fn clamp_keeps_inner_box() {
        let rect = BoundingBox::of(&sample()).clamp_to(70, 40).unwrap();
        assert_eq!(rect, Rect { min_x: 1, min_y: 2, max_x: 66, max_y: 40 });
        assert_eq!((rect.width(), rect.height()), (65, 38));
    }

    #[test]
    fn clamp_cuts_to_grid_edges() {
        let bb = BoundingBox { min_x: -5, min_y: -3, max_x: 100, max_y: 8 };
        assert_eq!(bb.clamp_to(10, 6), Some(Rect::full(10, 6)));
    }

    #[test]
    fn box_outside_grid_is_none() {
        let bb = BoundingBox { min_x: 20, min_y: 0, max_x: 30, max_y: 4 };
        assert_eq!(bb.clamp_to(10, 10), None);
        let above = BoundingBox { min_x: 0, min_y: -9, max_x: 4, max_y: -1 };
        assert_eq!(above.clamp_to(10, 10), None);
    }
}
