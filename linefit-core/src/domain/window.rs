//! Target length window for emitted lines

use super::error::DomainError;
use rand::Rng;
use serde::Serialize;

/// Inclusive `[min, max]` character-count range a rendered line must satisfy.
///
/// Bounds are validated on construction: `min` must be positive and not
/// exceed `max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    min: usize,
    max: usize,
}

impl Window {
    /// Create a validated window
    pub fn new(min: usize, max: usize) -> Result<Self, DomainError> {
        let reason = if min == 0 {
            "minimum must be greater than 0"
        } else if min > max {
            "minimum must not exceed maximum"
        } else {
            return Ok(Self { min, max });
        };
        Err(DomainError::InvalidWindow { min, max, reason })
    }

    /// Create a window. Callers are expected to have validated the bounds.
    pub(crate) const fn new_unchecked(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Smallest accepted line length
    pub fn min(&self) -> usize {
        self.min
    }

    /// Largest accepted line length
    pub fn max(&self) -> usize {
        self.max
    }

    /// Whether `len` lies inside the window
    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }

    /// Draw a length uniformly from the window.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        rng.gen_range(self.min..=self.max)
    }
}

impl std::fmt::Display for Window {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}
