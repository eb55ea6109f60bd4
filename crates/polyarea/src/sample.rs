//! Exact and random regular polygons (replayable draws).
//!
//! Purpose
//! - Produce vertex lists that satisfy the regularity assumption of
//!   `polygon_area`, for tests, benches, and callers that build polygons from
//!   a center and a circumradius.
//!
//! Model
//! - `n` vertices at angles `phase + 2πk/n`, counterclockwise, on the circle of
//!   radius `R` around `center`.
//! - Random draws pick `n`, `R`, `center`, and `phase` from a `RegularCfg`.
//!   Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::polygon::Polygon;
use crate::types::AreaError;

/// `n` vertices of the regular polygon with the given center and circumradius,
/// counterclockwise, the first one at angle `phase`.
pub fn regular_polygon(
    n: usize,
    center: Vector2<f64>,
    circumradius: f64,
    phase: f64,
) -> Vec<Vector2<f64>> {
    let delta = TAU / n as f64;
    (0..n)
        .map(|k| {
            let th = phase + k as f64 * delta;
            center + Vector2::new(th.cos(), th.sin()) * circumradius
        })
        .collect()
}

/// How many vertices a draw gets. Counts below 3 are raised to 3.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    /// Admissible counts after clamping; never empty.
    pub fn range(self) -> RangeInclusive<usize> {
        let (lo, hi) = match self {
            VertexCount::Fixed(n) => (n, n),
            VertexCount::Uniform { min, max } => (min, max),
        };
        let lo = lo.max(3);
        lo..=hi.max(lo)
    }
}

/// Random regular polygon configuration.
#[derive(Clone, Copy, Debug)]
pub struct RegularCfg {
    pub vertex_count: VertexCount,
    /// Circumradius range; the upper end is raised to the lower end if smaller.
    pub radius_min: f64,
    pub radius_max: f64,
    /// Center is drawn uniformly from `[-center_box, center_box]²`.
    pub center_box: f64,
    /// Random global phase in [0, 2π)? Otherwise the first vertex sits at angle 0.
    pub random_phase: bool,
}

impl Default for RegularCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Uniform { min: 3, max: 12 },
            radius_min: 0.5,
            radius_max: 2.0,
            center_box: 10.0,
            random_phase: true,
        }
    }
}

impl RegularCfg {
    fn check_finite(&self) -> Result<(), AreaError> {
        let fields = [
            ("radius_min", self.radius_min),
            ("radius_max", self.radius_max),
            ("center_box", self.center_box),
        ];
        match fields.iter().find(|(_, x)| !x.is_finite()) {
            Some(&(field, _)) => Err(AreaError::NonFiniteConfig { field }),
            None => Ok(()),
        }
    }
}

/// Tag folded into every regular-polygon seed so the same `(seed, index)` used
/// by another sampler gives an unrelated stream.
const REGULAR_STREAM: u64 = 0x7265_6775_6c61_7231;

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

fn splitmix64(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// `(seed, index)` address of one draw. Consecutive indices under one seed
/// form a reproducible stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// The following draw in the same stream.
    #[inline]
    pub fn next_index(self) -> Self {
        Self {
            index: self.index.wrapping_add(1),
            ..self
        }
    }

    fn rng(self) -> StdRng {
        let state = self
            .seed
            .wrapping_add(self.index.wrapping_add(1).wrapping_mul(GOLDEN_GAMMA));
        StdRng::seed_from_u64(splitmix64(splitmix64(state) ^ REGULAR_STREAM))
    }
}

/// One drawn polygon together with the parameters that produced it.
#[derive(Clone, Debug)]
pub struct RegularSample {
    pub polygon: Polygon,
    pub n: usize,
    pub center: Vector2<f64>,
    pub circumradius: f64,
    pub phase: f64,
    pub token: ReplayToken,
}

impl RegularSample {
    /// Closed form `½ n R² sin(2π/n)`.
    pub fn expected_area(&self) -> f64 {
        let n = self.n as f64;
        0.5 * n * self.circumradius * self.circumradius * (TAU / n).sin()
    }
}

/// Draw a random regular polygon. Equal tokens give equal samples.
///
/// Fails on a non-finite radius bound or center box
/// (`NonFiniteConfig`), and when a zero radius collapses the polygon
/// (`DuplicateVertex`).
pub fn draw_regular_polygon(
    cfg: RegularCfg,
    tok: ReplayToken,
) -> Result<RegularSample, AreaError> {
    if let Err(e) = cfg.check_finite() {
        tracing::debug!(error = %e, "draw_regular_polygon: rejected config");
        return Err(e);
    }
    let mut rng = tok.rng();
    let n = rng.gen_range(cfg.vertex_count.range());
    let r_lo = cfg.radius_min;
    let r_hi = cfg.radius_max.max(r_lo);
    let circumradius = if r_hi > r_lo {
        rng.gen_range(r_lo..r_hi)
    } else {
        r_lo
    };
    let b = cfg.center_box.abs();
    let center = if b > 0.0 {
        Vector2::new(rng.gen_range(-b..=b), rng.gen_range(-b..=b))
    } else {
        Vector2::zeros()
    };
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    let polygon = Polygon::new(regular_polygon(n, center, circumradius, phase))?;
    tracing::trace!(
        n,
        circumradius,
        phase,
        seed = tok.seed,
        index = tok.index,
        "draw_regular_polygon"
    );
    Ok(RegularSample {
        polygon,
        n,
        center,
        circumradius,
        phase,
        token: tok,
    })
}
