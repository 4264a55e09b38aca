//! Declared cost class for a validator, used by combinators to report a
//! conservative upper bound on their own cost (`max` of children).

/// Coarse cost classification a validator declares about itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub enum ValidationComplexity {
    /// O(1): comparisons, simple predicates.
    #[default]
    Constant,
    /// O(n) in the size of the input: length checks, regex scans.
    Linear,
    /// Anything that allocates unboundedly, hits a cache backend, or is
    /// otherwise not safe to call in a tight loop without `Cached`.
    Expensive,
}
