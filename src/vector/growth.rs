//! Capacity growth schedule
//!
//! Capacities are always a power of the growth factor. Reallocation happens
//! only when an insertion would push the size past the current capacity, or
//! when the caller explicitly reserves more room.

use crate::error::{GrowError, Result};

/// Multiplier applied to the capacity on each growth step
pub const GROWTH_FACTOR: usize = 2;

/// Requested capacity of a freshly created container
pub const INITIAL_CAPACITY: usize = 8;

/// Smallest power of [`GROWTH_FACTOR`] that is `>= target`
pub fn new_capacity(target: usize) -> Result<usize> {
    capacity_with_factor(GROWTH_FACTOR, target)
}

fn capacity_with_factor(factor: usize, target: usize) -> Result<usize> {
    let mut capacity: usize = 1;
    while capacity < target {
        capacity = capacity
            .checked_mul(factor)
            .ok_or(GrowError::AllocationFailed { requested: target })?;
    }
    Ok(capacity)
}

/// Growth configuration bound to a container for its whole lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    factor: usize,
    initial_capacity: usize,
}

impl GrowthPolicy {
    /// Create a policy, rejecting factors below 2 and an empty initial capacity
    pub fn new(factor: usize, initial_capacity: usize) -> Result<Self> {
        if factor < 2 {
            return Err(GrowError::InvalidPolicy(format!(
                "growth factor must be at least 2, got {}",
                factor
            )));
        }
        if initial_capacity == 0 {
            return Err(GrowError::InvalidPolicy(
                "initial capacity must be at least 1".to_string(),
            ));
        }
        Ok(Self {
            factor,
            initial_capacity,
        })
    }

    pub fn factor(&self) -> usize {
        self.factor
    }

    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    /// Smallest power of this policy's factor that is `>= target`
    pub fn capacity_for(&self, target: usize) -> Result<usize> {
        capacity_with_factor(self.factor, target)
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        Self {
            factor: GROWTH_FACTOR,
            initial_capacity: INITIAL_CAPACITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_capacity_powers_of_two() {
        assert_eq!(new_capacity(0).unwrap(), 1);
        assert_eq!(new_capacity(1).unwrap(), 1);
        assert_eq!(new_capacity(2).unwrap(), 2);
        assert_eq!(new_capacity(3).unwrap(), 4);
        assert_eq!(new_capacity(8).unwrap(), 8);
        assert_eq!(new_capacity(9).unwrap(), 16);
        assert_eq!(new_capacity(1000).unwrap(), 1024);
    }

    #[test]
    fn test_new_capacity_overflow() {
        let result = new_capacity(usize::MAX);
        assert!(matches!(result, Err(GrowError::AllocationFailed { .. })));
    }

    #[test]
    fn test_policy_default() {
        let policy = GrowthPolicy::default();
        assert_eq!(policy.factor(), GROWTH_FACTOR);
        assert_eq!(policy.initial_capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn test_policy_custom_factor() {
        let policy = GrowthPolicy::new(3, 1).unwrap();
        assert_eq!(policy.capacity_for(1).unwrap(), 1);
        assert_eq!(policy.capacity_for(2).unwrap(), 3);
        assert_eq!(policy.capacity_for(10).unwrap(), 27);
    }

    #[test]
    fn test_policy_rejects_small_factor() {
        assert!(matches!(
            GrowthPolicy::new(1, 8),
            Err(GrowError::InvalidPolicy(_))
        ));
        assert!(matches!(
            GrowthPolicy::new(0, 8),
            Err(GrowError::InvalidPolicy(_))
        ));
    }

    #[test]
    fn test_policy_rejects_zero_initial() {
        assert!(matches!(
            GrowthPolicy::new(2, 0),
            Err(GrowError::InvalidPolicy(_))
        ));
    }
}
