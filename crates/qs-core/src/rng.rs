//! Deterministic uniform random sources and the draw budget.
//!
//! # Determinism strategy
//!
//! Every interval an engine samples comes from one [`UniformSource`] owned by
//! that engine.  The reference source is [`Lcg`], a linear congruential
//! generator
//!
//!   x = (a * x + c) mod m,   u = x / m
//!
//! whose sequence is fully determined by `(a, c, m, seed)`.  Two engines built
//! from equal `LcgConfig`s, equal stage configurations, and equal budgets
//! process bit-identical event sequences.
//!
//! Instead of a wall-clock timeout, runs are bounded by a [`DrawBudget`]: the
//! engine stops taking events once the number of draws reaches the limit, so
//! repeated runs always perform the same amount of work.

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::{Interval, QsError, QsResult};

/// Largest `f64` strictly below 1.
const BELOW_ONE: f64 = 1.0 - f64::EPSILON / 2.0;

// ── UniformSource ─────────────────────────────────────────────────────────────

/// A source of uniform variates in `[0, 1)`.
pub trait UniformSource {
    /// Next variate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;

    /// Variate in `[min, max)`: `min + (max - min) * u`.
    #[inline]
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        Interval::new(min, max).sample(self.next_uniform())
    }
}

impl<T: UniformSource + ?Sized> UniformSource for &mut T {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

// ── LcgConfig ─────────────────────────────────────────────────────────────────

/// Parameters of a linear congruential generator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LcgConfig {
    pub multiplier: u64,
    pub increment:  u64,
    pub modulus:    u64,
    pub seed:       u64,
}

impl LcgConfig {
    /// Park–Miller "minimal standard" parameters with seed 12345.
    pub const MINSTD: LcgConfig = LcgConfig {
        multiplier: 16_807,
        increment:  0,
        modulus:    2_147_483_647,
        seed:       12_345,
    };

    /// Same parameters, different seed.
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    pub fn validate(&self) -> QsResult<()> {
        if self.modulus == 0 {
            return Err(QsError::InvalidConfiguration(
                "LCG modulus must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn build(self) -> Lcg {
        Lcg::new(self)
    }
}

impl Default for LcgConfig {
    fn default() -> Self {
        Self::MINSTD
    }
}

// ── Lcg ───────────────────────────────────────────────────────────────────────

/// Linear congruential generator.  Invariant: `0 <= x < m`.
///
/// The product `a * x + c` is computed in `u128`, so the state update is exact
/// for any 64-bit parameter set.  Above `2^53` the quotient `x / m` can round
/// up to 1, so [`next_uniform`][UniformSource::next_uniform] clamps it to the
/// largest `f64` below 1.
#[derive(Clone, Debug)]
pub struct Lcg {
    a: u64,
    c: u64,
    m: u64,
    x: u64,
}

impl Lcg {
    /// `config.modulus` must be non-zero; see [`LcgConfig::validate`].
    pub fn new(config: LcgConfig) -> Self {
        Self {
            a: config.multiplier,
            c: config.increment,
            m: config.modulus,
            x: config.seed % config.modulus,
        }
    }

    /// Current internal state.
    #[inline]
    pub fn state(&self) -> u64 {
        self.x
    }

    #[inline]
    fn step(&mut self) -> u64 {
        let next = (self.a as u128 * self.x as u128 + self.c as u128) % self.m as u128;
        self.x = next as u64;
        self.x
    }
}

impl UniformSource for Lcg {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        let u = self.step() as f64 / self.m as f64;
        u.min(BELOW_ONE)
    }
}

/// Lets an `Lcg` drive `rand` distributions.  Bits are derived from the
/// uniform variate, so only the top `log2(m)` bits of each word carry entropy.
impl RngCore for Lcg {
    fn next_u32(&mut self) -> u32 {
        (self.next_uniform() * 4_294_967_296.0) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// General-purpose seeded source for runs that do not need the LCG reference
/// sequence.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }
}

impl UniformSource for SimRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }
}

// ── DrawBudget ────────────────────────────────────────────────────────────────

/// Cap on the number of random draws in one run.
///
/// Draws are never refused.  The engine only checks [`is_exhausted`] before
/// taking the next event, so a single event may push `used` past `limit`.
///
/// [`is_exhausted`]: DrawBudget::is_exhausted
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DrawBudget {
    limit: u64,
    used:  u64,
}

impl DrawBudget {
    pub fn new(limit: u64) -> Self {
        Self { limit, used: 0 }
    }

    /// Record one draw.
    #[inline]
    pub fn consume(&mut self) {
        self.used += 1;
    }

    #[inline]
    pub fn limit(&self) -> u64 {
        self.limit
    }

    #[inline]
    pub fn used(&self) -> u64 {
        self.used
    }

    #[inline]
    pub fn remaining(&self) -> u64 {
        self.limit.saturating_sub(self.used)
    }

    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}
