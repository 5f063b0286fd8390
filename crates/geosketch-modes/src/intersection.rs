//! Self-intersection guard
//!
//! Works on geographic coordinates treated as planar `[x, y]` pairs. Only the
//! newest segment of a line is tested: every earlier segment was already
//! accepted, so the rest of the line is known not to self-intersect.

use geosketch_core::Position;

const TOLERANCE: f64 = 1e-12;

/// Tests two segments `a0-a1` and `b0-b1` for a crossing.
///
/// Parallel (including collinear) segments are reported as not intersecting.
/// The parallel test is relative to the segment lengths, so it holds at any
/// scale.
/// Contacts where both parameters sit at segment endpoints are ignored, so
/// segments that merely share a vertex do not count. Any other contact,
/// including one endpoint touching the interior of the other segment, does.
pub fn segments_intersect(a0: Position, a1: Position, b0: Position, b1: Position) -> bool {
    let da = [a1[0] - a0[0], a1[1] - a0[1]];
    let db = [b1[0] - b0[0], b1[1] - b0[1]];

    let cross = da[0] * db[1] - da[1] * db[0];
    let len_a = da[0].hypot(da[1]);
    let len_b = db[0].hypot(db[1]);
    if cross.abs() <= TOLERANCE * len_a * len_b {
        return false;
    }

    let dx = b0[0] - a0[0];
    let dy = b0[1] - a0[1];
    let t = (dx * db[1] - dy * db[0]) / cross;
    let u = (dx * da[1] - dy * da[0]) / cross;

    let eps = TOLERANCE;
    let within = |p: f64| p >= -eps && p <= 1.0 + eps;
    if !within(t) || !within(u) {
        return false;
    }

    let at_end = |p: f64| p < eps || p > 1.0 - eps;
    !(at_end(t) && at_end(u))
}

/// Returns `true` when the last segment of `coordinates` crosses any earlier
/// segment it is not adjacent to.
///
/// Lines with fewer than four vertices have no non-adjacent segment pair and
/// never self-intersect.
pub fn self_intersects(coordinates: &[Position]) -> bool {
    let n = coordinates.len();
    if n < 4 {
        return false;
    }

    let start = coordinates[n - 2];
    let end = coordinates[n - 1];

    // segment i runs from vertex i to i + 1; segment n - 3 shares `start`
    coordinates[..n - 2]
        .windows(2)
        .any(|segment| segments_intersect(segment[0], segment[1], start, end))
}
