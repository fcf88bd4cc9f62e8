//! Precision defaults and approximation tuning.

/// Precision bound given to fractions that are not constructed with one.
pub const DEFAULT_MAX_BITS: u64 = 256;

/// Largest decimal exponent magnitude accepted by the parser. `10^exp` is
/// built exactly before the precision cap applies, so larger exponents are
/// rejected rather than allocated.
pub const MAX_DECIMAL_EXPONENT: u32 = 1_000_000;

/// Tuning for the iterative approximations in
/// [`transcendental`](crate::transcendental).
///
/// The plain methods ([`Fraction::sqrt`](crate::Fraction::sqrt) and
/// friends) use [`ApproxConfig::default`]; the `*_with` variants take a
/// config explicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApproxConfig {
    /// Extra bits of working precision beyond the requested result bound.
    pub guard_bits: u64,
    /// Maximum Newton-Raphson iterations for square roots.
    pub max_newton_iterations: usize,
    /// Maximum series terms for logarithms and exponentials.
    pub max_series_terms: usize,
}

impl Default for ApproxConfig {
    fn default() -> Self {
        Self {
            guard_bits: 32,
            max_newton_iterations: 100,
            max_series_terms: 10_000,
        }
    }
}

impl ApproxConfig {
    /// Sets the guard bits.
    #[must_use]
    pub fn with_guard_bits(mut self, guard_bits: u64) -> Self {
        self.guard_bits = guard_bits;
        self
    }

    /// Sets the Newton-Raphson iteration cap.
    #[must_use]
    pub fn with_max_newton_iterations(mut self, limit: usize) -> Self {
        self.max_newton_iterations = limit;
        self
    }

    /// Sets the series term cap.
    #[must_use]
    pub fn with_max_series_terms(mut self, limit: usize) -> Self {
        self.max_series_terms = limit;
        self
    }
}
