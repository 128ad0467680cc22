//! Array growth configuration.

use crate::error::ArrayError;

/// Growth policy for [`ArrayD`](crate::ArrayD).
///
/// Consulted only when an insert finds the array full. Explicit
/// `resize`/`reserve` requests allocate exactly what they ask for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Capacity of the first allocation made by a growing insert.
    ///
    /// Default: 4. Must be at least 1.
    pub min_capacity: usize,

    /// Capacity multiplier applied when an insert finds the array full.
    ///
    /// Default: 2. Must be at least 2 so that growth stays amortized O(1).
    pub growth_factor: usize,
}

impl ArrayConfig {
    /// Default first allocation, in elements.
    pub const DEFAULT_MIN_CAPACITY: usize = 4;

    /// Default capacity multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the default policy.
    pub fn new() -> Self {
        Self {
            min_capacity: Self::DEFAULT_MIN_CAPACITY,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Check that the policy grows geometrically.
    pub fn validate(&self) -> Result<(), ArrayError> {
        if self.min_capacity == 0 {
            return Err(ArrayError::InvalidArgument {
                reason: "min_capacity must be at least 1".into(),
            });
        }
        if self.growth_factor < 2 {
            return Err(ArrayError::InvalidArgument {
                reason: format!(
                    "growth_factor must be at least 2, got {}",
                    self.growth_factor
                ),
            });
        }
        Ok(())
    }

    /// Capacity to grow to when `required` slots are needed and `current`
    /// are allocated.
    ///
    /// Falls back to exact fit if the multiplication would overflow.
    pub fn next_capacity(&self, current: usize, required: usize) -> usize {
        let grown = current
            .checked_mul(self.growth_factor)
            .unwrap_or(required);
        grown.max(self.min_capacity).max(required)
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new()
    }
}
