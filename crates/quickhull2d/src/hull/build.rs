//! Work-stack Quickhull refinement.
//!
//! Purpose
//! - Drive the divide-and-conquer over the seed segment between the
//!   x-extremes: each frame keeps the candidates on one side of its segment,
//!   commits the endpoints when that side is empty, and otherwise splits on
//!   the farthest candidate.
//!
//! Why a work stack
//! - The refinement tree can reach depth O(n) on near-collinear inputs. An
//!   explicit LIFO of frames keeps that on the heap instead of the native
//!   stack. Frames are independent (each reclassifies the full input against
//!   its own segment), so processing order does not change the hull set.
//!
//! Code cross-refs: `predicates::{side_of, area_distance}`, `util::extremes_by_x`

use std::cmp::Ordering;

use crate::Point;

use super::predicates::{area_distance, side_of};
use super::types::{HullError, Side};
use super::util::extremes_by_x;

/// Pending refinement of one side of the segment `a -> b`.
struct Frame {
    a: Point,
    b: Point,
    side: Side,
}

/// Refinement state: candidate points, hull accumulator, pending frames.
struct HullBuilder<'a> {
    points: &'a [Point],
    hull: Vec<Point>,
    stack: Vec<Frame>,
}

impl<'a> HullBuilder<'a> {
    fn new(points: &'a [Point]) -> Self {
        Self {
            points,
            hull: Vec::new(),
            stack: Vec::new(),
        }
    }

    /// Process the `side` flank of the segment `a -> b` to exhaustion.
    fn refine(&mut self, a: Point, b: Point, side: Side) {
        self.stack.push(Frame { a, b, side });
        while let Some(Frame { a, b, side }) = self.stack.pop() {
            self.step(a, b, side);
        }
    }

    fn step(&mut self, a: Point, b: Point, side: Side) {
        // Candidates strictly on this side of `a -> b`; `OnLine` and
        // opposite-side points can never be hull vertices for this segment.
        // The filter runs over the full input every time: candidates are
        // reclassified against each new segment, never narrowed going down.
        //
        // `max_by` keeps the last maximal element in input order, which pins
        // the farthest-point tie-break under duplicate distances.
        let pivot = self
            .points
            .iter()
            .copied()
            .filter(|&p| side_of(a, b, p) == side)
            .max_by(|&p, &q| {
                area_distance(a, b, p)
                    .partial_cmp(&area_distance(a, b, q))
                    .unwrap_or(Ordering::Equal)
            });
        match pivot {
            // Exhausted flank: the segment endpoints are hull vertices.
            None => {
                self.commit(a);
                self.commit(b);
            }
            // Split into the two edges the pivot creates. The pivot itself is
            // `OnLine` for both child segments and drops out of their flanks.
            Some(pivot) => {
                self.stack.push(Frame {
                    a: pivot,
                    b: a,
                    side: side_of(pivot, a, b).opposite(),
                });
                self.stack.push(Frame {
                    a: pivot,
                    b: b,
                    side: side_of(pivot, b, a).opposite(),
                });
            }
        }
    }

    /// Idempotent insertion: branches meeting at a shared vertex collapse.
    fn commit(&mut self, p: Point) {
        if !self.hull.contains(&p) {
            self.hull.push(p);
        }
    }
}

/// Convex hull of `points` via Quickhull.
///
/// Returns the hull vertices as an unordered, duplicate-free subset of the
/// input; no polygon-traversal order is imposed. Inputs with fewer than 3
/// points are rejected with [`HullError::InsufficientPoints`].
///
/// Tie-breaks are input-order dependent: the x-extremes keep the first
/// occurrence, farthest-point selection keeps the last maximal candidate.
/// Reordering an input with exactly tied distances may therefore select a
/// different but equally valid vertex.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    let (lo, hi) = match extremes_by_x(points) {
        Some(extremes) if points.len() >= 3 => extremes,
        _ => return Err(HullError::InsufficientPoints(points.len())),
    };
    let mut builder = HullBuilder::new(points);
    builder.refine(lo, hi, Side::Left);
    builder.refine(lo, hi, Side::Right);
    Ok(builder.hull)
}
