//! 2D convex hulls via Quickhull.
//!
//! The core is a divide-and-conquer refinement over the segment between the
//! x-extremes of the input: each step keeps the candidates on one side of a
//! directed segment, splits on the farthest one, and commits the segment
//! endpoints once a side runs dry. All predicates are exact sign tests on one
//! shared cross product.
//!
//! Modules
//! - [`hull`]: orientation predicates, extremes finder, refinement, and the
//!   `convex_hull` entry point.
//! - [`parse`]: raw `x y` coordinate text to validated points.

pub mod hull;
pub mod parse;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;

/// 2D point: an immutable coordinate pair with value equality.
pub type Point = Vec2<f64>;

pub use hull::{convex_hull, HullError, Side};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::rand::{
        draw_disc_cloud, draw_grid_cloud, draw_ring_cloud, CloudCfg, ReplayToken,
    };
    pub use crate::hull::{
        area_distance, convex_hull, extremes_by_x, side_of, HullError, Side,
    };
    pub use crate::parse::{parse_points, PointParseError};
    pub use crate::{Point, Vec2};
}
