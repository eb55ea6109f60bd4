//! Scalar and point measurements the area formula is composed of.
//!
//! All functions are pure. Non-finite coordinates are not guarded against and
//! propagate through the arithmetic as NaN/Inf.

use nalgebra::Vector2;

use crate::types::{AreaError, Edge};

/// Euclidean distance `|a − b|`.
#[inline]
pub fn distance(a: Vector2<f64>, b: Vector2<f64>) -> f64 {
    (a - b).norm()
}

/// Componentwise mean of two points.
#[inline]
pub fn midpoint(a: Vector2<f64>, b: Vector2<f64>) -> Vector2<f64> {
    (a + b) / 2.0
}

/// Vertex centroid (not area-weighted). `None` for an empty slice.
pub fn centroid(vertices: &[Vector2<f64>]) -> Option<Vector2<f64>> {
    if vertices.is_empty() {
        return None;
    }
    let sum = vertices
        .iter()
        .fold(Vector2::zeros(), |acc: Vector2<f64>, v| acc + v);
    Some(sum / vertices.len() as f64)
}

/// Sum of edge lengths in input order. Empty input gives 0.
pub fn perimeter<I>(edges: I) -> f64
where
    I: IntoIterator,
    I::Item: Into<Edge>,
{
    edges.into_iter().map(|e| e.into().length()).sum()
}

/// Distance from the centroid to the midpoint of the first edge `(v0, v1)`.
///
/// Meaningful only for regular polygons, where every edge midpoint is at the
/// same distance from the centroid. Other inputs still return a number.
pub fn apothem(vertices: &[Vector2<f64>]) -> Result<f64, AreaError> {
    let (v0, v1) = match vertices {
        [v0, v1, ..] => (*v0, *v1),
        _ => {
            return Err(AreaError::TooFewVertices {
                needed: 2,
                got: vertices.len(),
            })
        }
    };
    let c = centroid(vertices).ok_or(AreaError::TooFewVertices { needed: 2, got: 0 })?;
    Ok(distance(midpoint(v0, v1), c))
}
