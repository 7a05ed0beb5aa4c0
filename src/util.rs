use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{self, Debug};
use std::ops::Add;

/// Result with boxed error as trait object.
pub type GenericResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[cfg(test)]
pub(crate) type TestResult = GenericResult<()>;

/// A path length that is either a natural number or infinite (no path).
///
/// Addition saturates to infinity, so `dist[u] + weight` can never overflow
/// during relaxation.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct NaturalOrInfinite(Option<u64>);

impl NaturalOrInfinite {
    pub fn infinity() -> Self {
        Self(None)
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_some()
    }

    /// The finite value, or `None` for infinity.
    pub fn finite(&self) -> Option<u64> {
        self.0
    }
}

impl Default for NaturalOrInfinite {
    fn default() -> Self {
        Self::infinity()
    }
}

impl From<u32> for NaturalOrInfinite {
    fn from(n: u32) -> Self {
        Self(Some(n.into()))
    }
}

impl From<u64> for NaturalOrInfinite {
    fn from(n: u64) -> Self {
        Self(Some(n))
    }
}

impl Add for NaturalOrInfinite {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        match (self.0, rhs.0) {
            (Some(a), Some(b)) => Self(a.checked_add(b)),
            _ => Self::infinity(),
        }
    }
}

impl Ord for NaturalOrInfinite {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl PartialOrd for NaturalOrInfinite {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Debug for NaturalOrInfinite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "∞"),
        }
    }
}
