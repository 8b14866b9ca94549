use crate::edge::TriangleInfo;
use crate::point2d::Point2D;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Membership {
    Interior,
    Exterior,
}

impl Membership {
    pub fn is_interior(self) -> bool {
        self == Membership::Interior
    }
}

/// Three half-plane test against the orientations recorded by `analyze`.
///
/// Uses the same `>=` rule as the reference orientations, so a point lying
/// exactly on an edge counts as being on that edge's upper side. A vertex is
/// therefore interior only when both of its edges have the interior above them.
#[inline(always)]
pub fn classify(p: Point2D, info: &TriangleInfo) -> Membership {
    let inside = info
        .lines()
        .iter()
        .zip(info.orientations())
        .all(|(line, &reference)| line.orientation(p) == reference);
    if inside { Membership::Interior } else { Membership::Exterior }
}
