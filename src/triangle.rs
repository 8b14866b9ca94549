use serde::{Deserialize, Serialize};

use crate::point2d::{Point2D, perp, dot2};

/// Three vertices. Vertex order defines the edges `(a,b)`, `(b,c)`, `(c,a)`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle2D {
    pub a: Point2D,
    pub b: Point2D,
    pub c: Point2D,
}

impl Triangle2D {
    pub const fn new(a: Point2D, b: Point2D, c: Point2D) -> Self {
        Self { a, b, c }
    }

    pub fn vertices(&self) -> [Point2D; 3] {
        [self.a, self.b, self.c]
    }

    /// Edges in vertex order.
    pub fn edges(&self) -> [(Point2D, Point2D); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }
}

pub fn centroid(t: &Triangle2D) -> Point2D {
    (t.a + t.b + t.c) / 3.0
}

pub fn signed_triangle_area(t1: Point2D, t2: Point2D, p: Point2D) -> f32 {
    let ap = p - t1;
    let t1t2perp: Point2D = perp(t2 - t1);
    dot2(ap, t1t2perp) / 2.0
}
