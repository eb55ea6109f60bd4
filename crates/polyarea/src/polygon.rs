//! Polygon area via `½ · perimeter · apothem`.
//!
//! Conventions
//! - A polygon is an ordered vertex list in winding order, treated cyclically:
//!   the closing edge `(v_{n-1}, v_0)` is implied, never stored.
//! - `polygon_area` does not check regularity. For irregular input the apothem
//!   (taken at the first edge) is not a property of the polygon and the result
//!   is not its area. This is kept as is; the shoelace formula would give a
//!   different number for such input.
//! - `Polygon` validates the cheap structural preconditions once, so its
//!   measurements are infallible.

use nalgebra::Vector2;

use crate::measure::{apothem, centroid, distance, perimeter};
use crate::types::{AreaError, Edge, GeomCfg};

/// Boundary edges `(v_i, v_{i+1})` followed by the closing edge `(v_{n-1}, v_0)`.
///
/// `n` vertices give `n` edges; a single vertex gives the degenerate edge
/// `(v_0, v_0)`; an empty slice gives nothing.
pub fn edges(vertices: &[Vector2<f64>]) -> impl Iterator<Item = Edge> + '_ {
    let closing = match vertices {
        [first, .., last] => Some(Edge::new(*last, *first)),
        [only] => Some(Edge::new(*only, *only)),
        [] => None,
    };
    vertices
        .windows(2)
        .map(|w| Edge::new(w[0], w[1]))
        .chain(closing)
}

/// Area of a regular polygon given its vertices in winding order.
///
/// Needs at least 2 vertices; with exactly 2 the computation runs and returns a
/// meaningless (zero) value. Regularity is assumed, not validated.
pub fn polygon_area(vertices: &[Vector2<f64>]) -> Result<f64, AreaError> {
    if vertices.len() < 2 {
        tracing::debug!(got = vertices.len(), "polygon_area: too few vertices");
        return Err(AreaError::TooFewVertices {
            needed: 2,
            got: vertices.len(),
        });
    }
    let p = perimeter(edges(vertices));
    let a = apothem(vertices)?;
    let area = 0.5 * a * p;
    tracing::trace!(n = vertices.len(), perimeter = p, apothem = a, area, "polygon_area");
    Ok(area)
}

/// Owned vertex list with at least 3 finite, pairwise distinct vertices.
///
/// Regularity is not part of the invariant; see [`Polygon::is_regular_eps`].
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vector2<f64>>,
}

impl Polygon {
    pub fn new(vertices: Vec<Vector2<f64>>) -> Result<Self, AreaError> {
        let n = vertices.len();
        if n < 3 {
            tracing::debug!(got = n, "Polygon: too few vertices");
            return Err(AreaError::TooFewVertices { needed: 3, got: n });
        }
        if let Some(index) = vertices
            .iter()
            .position(|v| !(v.x.is_finite() && v.y.is_finite()))
        {
            tracing::debug!(index, "Polygon: non-finite vertex");
            return Err(AreaError::NonFiniteVertex { index });
        }
        if let Some((first, second)) = first_repeat(&vertices) {
            tracing::debug!(first, second, "Polygon: repeated vertex");
            return Err(AreaError::DuplicateVertex { first, second });
        }
        Ok(Self { vertices })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        edges(&self.vertices)
    }

    pub fn perimeter(&self) -> f64 {
        perimeter(self.edges())
    }

    pub fn centroid(&self) -> Vector2<f64> {
        centroid(&self.vertices).unwrap_or_else(Vector2::zeros)
    }

    pub fn apothem(&self) -> f64 {
        apothem(&self.vertices).unwrap_or(0.0)
    }

    /// Same value as [`polygon_area`] on [`Self::vertices`].
    pub fn area(&self) -> f64 {
        polygon_area(&self.vertices).unwrap_or(0.0)
    }

    pub fn side_lengths(&self) -> Vec<f64> {
        self.edges().map(|e| e.length()).collect()
    }

    /// Largest distance from the vertex centroid to a vertex.
    pub fn circumradius(&self) -> f64 {
        let c = self.centroid();
        self.vertices
            .iter()
            .map(|v| distance(*v, c))
            .fold(0.0, f64::max)
    }

    /// Same polygon starting at vertex `k` (mod n), same winding.
    pub fn rotated(&self, k: usize) -> Self {
        let mut vertices = self.vertices.clone();
        let n = vertices.len();
        vertices.rotate_left(k % n);
        Self { vertices }
    }

    /// Equilateral and concyclic about the vertex centroid, within relative
    /// tolerances. Together with a simple winding order this means regular.
    pub fn is_regular_eps(&self, cfg: GeomCfg) -> bool {
        let sides = self.side_lengths();
        let mean_side = sides.iter().sum::<f64>() / sides.len() as f64;
        if !(mean_side > 0.0) {
            return false;
        }
        if sides
            .iter()
            .any(|s| (s - mean_side).abs() > cfg.eps_len * mean_side)
        {
            return false;
        }
        let c = self.centroid();
        let radii: Vec<f64> = self.vertices.iter().map(|v| distance(*v, c)).collect();
        let mean_radius = radii.iter().sum::<f64>() / radii.len() as f64;
        radii
            .iter()
            .all(|r| (r - mean_radius).abs() <= cfg.eps_radius * mean_radius)
    }
}

/// Lowest pair `(i, j)`, `i < j`, with `v_i == v_j`.
fn first_repeat(vertices: &[Vector2<f64>]) -> Option<(usize, usize)> {
    vertices.iter().enumerate().find_map(|(i, v)| {
        vertices[i + 1..]
            .iter()
            .position(|w| w == v)
            .map(|off| (i, i + 1 + off))
    })
}

impl TryFrom<Vec<Vector2<f64>>> for Polygon {
    type Error = AreaError;
    fn try_from(vertices: Vec<Vector2<f64>>) -> Result<Self, Self::Error> {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Vec<Vector2<f64>> {
        vec![
            vector![2.0, 2.0],
            vector![2.0, 4.0],
            vector![4.0, 4.0],
            vector![4.0, 2.0],
        ]
    }

    fn pentagon() -> Vec<Vector2<f64>> {
        vec![
            vector![5.0, 3.0],
            vector![3.0, 4.0],
            vector![4.0, 7.0],
            vector![6.0, 7.0],
            vector![7.0, 4.0],
        ]
    }

    #[test]
    fn edges_close_the_loop() {
        let sq = square();
        let es: Vec<Edge> = edges(&sq).collect();
        assert_eq!(es.len(), 4);
        assert_eq!(es[0], Edge::new(sq[0], sq[1]));
        assert_eq!(es[3], Edge::new(sq[3], sq[0]));
    }

    #[test]
    fn edges_degenerate_inputs() {
        let one = [vector![1.0, 2.0]];
        let es: Vec<Edge> = edges(&one).collect();
        assert_eq!(es, vec![Edge::new(one[0], one[0])]);
        assert_eq!(edges(&[]).count(), 0);
    }

    #[test]
    fn area_of_square() {
        let a = polygon_area(&square()).unwrap();
        assert!((a - 4.0).abs() < 1e-3);
    }

    #[test]
    fn area_of_pentagon() {
        let a = polygon_area(&pentagon()).unwrap();
        assert!((a - 11.535).abs() < 1e-3 * 11.535, "area {a}");
    }

    #[test]
    fn two_vertices_run_and_give_zero() {
        let a = polygon_area(&[vector![0.0, 0.0], vector![3.0, 4.0]]).unwrap();
        assert!(a.abs() < 1e-12);
    }

    #[test]
    fn too_few_vertices_is_error() {
        assert_eq!(
            polygon_area(&[vector![0.0, 0.0]]),
            Err(AreaError::TooFewVertices { needed: 2, got: 1 })
        );
        assert!(polygon_area(&[]).is_err());
    }

    #[test]
    fn nan_propagates_through_area() {
        let mut v = square();
        v[2].x = f64::NAN;
        assert!(polygon_area(&v).unwrap().is_nan());
    }

    #[test]
    fn validated_polygon_matches_free_function() {
        let p = Polygon::new(pentagon()).unwrap();
        assert_eq!(p.area(), polygon_area(&pentagon()).unwrap());
        assert_eq!(p.len(), 5);
        assert_eq!(p.side_lengths().len(), 5);
    }

    #[test]
    fn validation_rejects_bad_input() {
        assert_eq!(
            Polygon::new(vec![vector![0.0, 0.0], vector![1.0, 0.0]]),
            Err(AreaError::TooFewVertices { needed: 3, got: 2 })
        );
        assert_eq!(
            Polygon::new(vec![
                vector![0.0, 0.0],
                vector![1.0, f64::INFINITY],
                vector![0.0, 1.0],
            ]),
            Err(AreaError::NonFiniteVertex { index: 1 })
        );
        // closing pair counts
        assert_eq!(
            Polygon::try_from(vec![
                vector![0.0, 0.0],
                vector![1.0, 0.0],
                vector![0.0, 1.0],
                vector![0.0, 0.0],
            ]),
            Err(AreaError::DuplicateVertex { first: 0, second: 3 })
        );
    }

    #[test]
    fn repeats_are_found_anywhere_in_the_list() {
        // bow-tie through the repeated vertex (1, 1)
        let vs = vec![
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 0.0],
            vector![2.0, 2.0],
            vector![1.0, 1.0],
            vector![0.0, 2.0],
        ];
        assert_eq!(
            Polygon::new(vs),
            Err(AreaError::DuplicateVertex { first: 1, second: 4 })
        );
    }

    #[test]
    fn square_is_regular_pentagon_fixture_is_not() {
        let cfg = GeomCfg::default();
        let sq = Polygon::new(square()).unwrap();
        assert!(sq.is_regular_eps(cfg));
        assert!((sq.circumradius() - 2f64.sqrt()).abs() < 1e-12);
        let pe = Polygon::new(pentagon()).unwrap();
        assert!(!pe.is_regular_eps(cfg));
    }

    #[test]
    fn rotation_keeps_square_area() {
        let sq = Polygon::new(square()).unwrap();
        for k in 0..8 {
            let r = sq.rotated(k);
            assert_eq!(r.vertices()[0], square()[k % 4]);
            assert!((r.area() - sq.area()).abs() < 1e-12);
        }
    }

    #[test]
    fn rotation_wraps_modulo_len() {
        let sq = Polygon::new(square()).unwrap();
        assert_eq!(sq.rotated(4), sq);
        assert_eq!(sq.rotated(4 * 1000 + 1), sq.rotated(1));
        assert_eq!(sq.rotated(usize::MAX).vertices()[0], square()[usize::MAX % 4]);
    }
}
