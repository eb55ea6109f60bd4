//! Area of regular polygons from their vertex lists.
//!
//! The area is computed as `½ · perimeter · apothem`, where the apothem is the
//! distance from the vertex centroid to the midpoint of the first edge.
//!
//! Scope
//! - The formula is exact only for regular (equilateral, equiangular) convex
//!   polygons. Irregular input still yields a number; regularity is never
//!   enforced by the area routines. `Polygon::is_regular_eps` is an
//!   opt-in check for callers that want one.
//! - Everything is pure and synchronous; all functions are safe to call from
//!   any number of threads.
//!
//! Layout
//! - `measure`: distance, midpoint, centroid, perimeter, apothem.
//! - `polygon`: edge construction, `polygon_area`, validated `Polygon`.
//! - `sample`: exact and seeded-random regular polygon construction.

pub mod measure;
pub mod polygon;
pub mod sample;
mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use measure::{apothem, centroid, distance, midpoint, perimeter};
pub use nalgebra::Vector2 as Vec2;
pub use polygon::{edges, polygon_area, Polygon};
pub use types::{AreaError, Edge, GeomCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::measure::{apothem, centroid, distance, midpoint, perimeter};
    pub use crate::polygon::{edges, polygon_area, Polygon};
    pub use crate::sample::{
        draw_regular_polygon, regular_polygon, RegularCfg, RegularSample, ReplayToken,
        VertexCount,
    };
    pub use crate::types::{AreaError, Edge, GeomCfg};
    pub use nalgebra::Vector2 as Vec2;
}
