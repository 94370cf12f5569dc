//! Seeded 2-D value noise
//!
//! The obstacle field's only source of randomness. One `NoiseSeed` is created
//! per run and discarded with it; the noise function itself is pure, so any
//! consumer holding the seed can re-derive the exact same field.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::lerp;

/// Value-type seed for the noise field
///
/// Plain data on purpose: the run state stays serializable and comparable,
/// with no captured closures or hidden mutable context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoiseSeed(pub u64);

impl NoiseSeed {
    /// Derive a seed from shell-provided entropy (e.g. a timestamp)
    pub fn from_entropy(entropy: u64) -> Self {
        // One splitmix64 round so consecutive timestamps give unrelated fields
        let mut z = entropy.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        Self(z ^ (z >> 31))
    }
}

/// Deterministic noise value at an integer lattice point, in [-1, 1]
fn lattice(seed: NoiseSeed, xi: i64, yi: i64) -> f32 {
    let key = seed
        .0
        .wrapping_add((xi as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add((yi as u64).wrapping_mul(0xC2B2_AE3D_27D4_EB4F));
    let mut rng = Pcg32::seed_from_u64(key);
    rng.random_range(-1.0f32..=1.0)
}

/// Smoothstep fade for interpolation weights
#[inline]
fn fade(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Sample the noise field at (x, y), returning a value in [-1, 1]
///
/// Bilinear value noise: the four surrounding lattice corners are hashed with
/// the seed and blended with smoothstep weights. Deterministic for a fixed
/// seed, and continuous enough for single-point obstacle sampling.
pub fn noise2(seed: NoiseSeed, x: f32, y: f32) -> f32 {
    let xf = x.floor();
    let yf = y.floor();
    let xi = xf as i64;
    let yi = yf as i64;

    let tx = fade(x - xf);
    let ty = fade(y - yf);

    let c00 = lattice(seed, xi, yi);
    let c10 = lattice(seed, xi + 1, yi);
    let c01 = lattice(seed, xi, yi + 1);
    let c11 = lattice(seed, xi + 1, yi + 1);

    lerp(lerp(c00, c10, tx), lerp(c01, c11, tx), ty)
}
