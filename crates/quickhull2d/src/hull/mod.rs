//! Quickhull in 2D (strict sign predicates, input-order tie-breaks).
//!
//! Purpose
//! - Provide the hull refinement and its predicates with exact three-valued
//!   side classification and reproducible, input-order-dependent tie-breaks.
//!
//! Why strict sides
//! - Hull membership hinges on which side of a directed segment a point
//!   falls. Points exactly on the carrier line are never hull vertices
//!   relative to that segment, so the classification is three-valued rather
//!   than eps-banded, and collinear runs degenerate to their extremes.
//!
//! Code cross-refs: `build::HullBuilder`, `predicates::{side_of, area_distance}`,
//! `util::extremes_by_x`

pub mod rand;

mod build;
mod predicates;
mod types;
mod util;

pub use build::convex_hull;
pub use predicates::{area_distance, side_of};
pub use types::{HullError, Side};
pub use util::extremes_by_x;
