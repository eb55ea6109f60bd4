//! Basic 2D types, tolerances, and the shared error.
//!
//! - `Edge`: one boundary segment `a → b`, derived from a vertex list on demand.
//! - `GeomCfg`: centralizes epsilons for the regularity predicate.
//! - `AreaError`: precondition violations surfaced by the area routines.

use std::fmt;

use nalgebra::Vector2;

/// Geometry configuration (tolerances).
///
/// Both epsilons are relative to the polygon's mean side length / circumradius.
#[derive(Clone, Copy, Debug)]
pub struct GeomCfg {
    pub eps_len: f64,
    pub eps_radius: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_len: 1e-9,
            eps_radius: 1e-9,
        }
    }
}

/// Oriented boundary segment from `a` to `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
}

impl Edge {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self { a, b }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        crate::measure::distance(self.a, self.b)
    }
    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        crate::measure::midpoint(self.a, self.b)
    }
}

impl From<(Vector2<f64>, Vector2<f64>)> for Edge {
    #[inline]
    fn from((a, b): (Vector2<f64>, Vector2<f64>)) -> Self {
        Self { a, b }
    }
}

/// Errors surfaced when a vertex list cannot describe a polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AreaError {
    /// Fewer vertices than the operation needs.
    TooFewVertices { needed: usize, got: usize },
    /// A vertex has a NaN or infinite coordinate.
    NonFiniteVertex { index: usize },
    /// Vertices `first < second` coincide.
    DuplicateVertex { first: usize, second: usize },
    /// A sampler parameter is NaN or infinite.
    NonFiniteConfig { field: &'static str },
}

impl fmt::Display for AreaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { needed, got } => {
                write!(f, "need at least {needed} vertices, got {got}")
            }
            Self::NonFiniteVertex { index } => {
                write!(f, "vertex {index} has a non-finite coordinate")
            }
            Self::DuplicateVertex { first, second } => {
                write!(f, "vertices {first} and {second} coincide")
            }
            Self::NonFiniteConfig { field } => {
                write!(f, "config field `{field}` is not finite")
            }
        }
    }
}

impl std::error::Error for AreaError {}
