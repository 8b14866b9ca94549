use crate::error::GeometryError;
use crate::geometry::{Line, Orientation, line_through};
use crate::point2d::{Point2D, dot2};
use crate::triangle::{Triangle2D, centroid, signed_triangle_area};

/// Relative rounding allowance for the degeneracy checks.
const DEGENERATE_TOLERANCE: f32 = 8.0 * f32::EPSILON;

/// A triangle prepared for membership tests.
///
/// `orientations[i]` is the side of `lines[i]` the centroid lies on, which is
/// the interior side of that edge. Built once by [`analyze`]; a changed
/// triangle needs a fresh `analyze` call rather than patching this value.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TriangleInfo {
    triangle: Triangle2D,
    centroid: Point2D,
    lines: [Line; 3],
    orientations: [Orientation; 3],
}

impl TriangleInfo {
    pub fn triangle(&self) -> &Triangle2D {
        &self.triangle
    }

    pub fn centroid(&self) -> Point2D {
        self.centroid
    }

    pub fn lines(&self) -> &[Line; 3] {
        &self.lines
    }

    pub fn orientations(&self) -> &[Orientation; 3] {
        &self.orientations
    }
}

pub fn analyze(t: Triangle2D) -> Result<TriangleInfo, GeometryError> {
    let [ab, bc, ca] = t.edges();
    let lines = [line_through(ab.0, ab.1)?, line_through(bc.0, bc.1)?, line_through(ca.0, ca.1)?];

    let centroid = centroid(&t);
    if is_degenerate(&t, &lines, centroid) {
        return Err(GeometryError::Degenerate);
    }

    let orientations = lines.map(|line| line.orientation(centroid));
    Ok(TriangleInfo { triangle: t, centroid, lines, orientations })
}

/// Collinear vertices give three near-identical lines with the centroid on
/// them, up to rounding. Both the area (against the longest edge) and the
/// centroid's vertical gap to each line (against the magnitudes that went into
/// `y_at`) must clear rounding noise.
fn is_degenerate(t: &Triangle2D, lines: &[Line; 3], c: Point2D) -> bool {
    let longest_sq = t
        .edges()
        .iter()
        .map(|&(p, q)| dot2(q - p, q - p))
        .fold(0.0_f32, f32::max);
    if signed_triangle_area(t.a, t.b, t.c).abs() <= DEGENERATE_TOLERANCE * longest_sq {
        return true;
    }
    lines.iter().any(|line| {
        let scale = c.y.abs() + (line.m * c.x).abs() + line.b.abs();
        (c.y - line.y_at(c.x)).abs() <= DEGENERATE_TOLERANCE * scale
    })
}
