use crate::error::GeometryError;
use crate::point2d::Point2D;

/// `y = m*x + b`. Never vertical: construction rejects equal x coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub m: f32,
    pub b: f32,
}

/// Side of a line a point falls on. `Above` includes the line itself.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Above,
    Below,
}

impl Line {
    #[inline(always)]
    pub fn y_at(&self, x: f32) -> f32 {
        self.m * x + self.b
    }

    #[inline(always)]
    pub fn orientation(&self, p: Point2D) -> Orientation {
        if p.y >= self.y_at(p.x) {
            Orientation::Above
        } else {
            Orientation::Below
        }
    }
}

pub fn line_through(p1: Point2D, p2: Point2D) -> Result<Line, GeometryError> {
    if p1.x == p2.x {
        return Err(GeometryError::VerticalEdge { x: p1.x });
    }
    let m = (p2.y - p1.y) / (p2.x - p1.x);
    Ok(Line { m, b: p2.y - m * p2.x })
}
