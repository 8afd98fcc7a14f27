//! Qubit addressing

use crate::QuantumError;
use std::fmt;
use std::str::FromStr;

/// Index of a qubit wire inside a register
///
/// Qubit `k` corresponds to bit `k` of a basis-state index, so qubit 0 is the
/// least significant bit of the amplitude index.
///
/// # Example
/// ```
/// use qpuzzle_core::QubitId;
///
/// let q1: QubitId = "q1".parse().unwrap();
/// assert_eq!(q1, QubitId::new(1));
/// assert_eq!(q1.mask(), 0b10);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct QubitId(usize);

impl QubitId {
    /// Create a new qubit identifier
    #[inline]
    pub const fn new(id: usize) -> Self {
        Self(id)
    }

    /// The wire index
    #[inline]
    pub const fn index(&self) -> usize {
        self.0
    }

    /// Bit mask selecting this qubit in a basis-state index
    #[inline]
    pub const fn mask(&self) -> usize {
        1 << self.0
    }

    /// Check the index against a register size
    pub fn check(self, num_qubits: usize) -> Result<Self, QuantumError> {
        if self.0 < num_qubits {
            Ok(self)
        } else {
            Err(QuantumError::invalid_qubit(self.0, num_qubits))
        }
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl FromStr for QubitId {
    type Err = QuantumError;

    /// Accepts `3`, `q3` or `Q3`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix('q')
            .or_else(|| trimmed.strip_prefix('Q'))
            .unwrap_or(trimmed);
        digits
            .parse::<usize>()
            .map(Self::new)
            .map_err(|_| QuantumError::ValidationError(format!("'{}' is not a qubit index", s)))
    }
}

impl From<usize> for QubitId {
    #[inline]
    fn from(id: usize) -> Self {
        Self::new(id)
    }
}

impl From<QubitId> for usize {
    #[inline]
    fn from(qid: QubitId) -> Self {
        qid.index()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qubit_index_and_mask() {
        let q = QubitId::new(3);
        assert_eq!(q.index(), 3);
        assert_eq!(q.mask(), 8);
    }

    #[test]
    fn test_qubit_ordering() {
        assert!(QubitId::new(0) < QubitId::new(1));
        assert_ne!(QubitId::new(0), QubitId::new(2));
    }

    #[test]
    fn test_qubit_display() {
        assert_eq!(QubitId::new(5).to_string(), "q5");
    }

    #[test]
    fn test_qubit_parse() {
        assert_eq!("2".parse::<QubitId>().unwrap(), QubitId::new(2));
        assert_eq!("q0".parse::<QubitId>().unwrap(), QubitId::new(0));
        assert_eq!(" Q4 ".parse::<QubitId>().unwrap(), QubitId::new(4));
        assert!("qx".parse::<QubitId>().is_err());
        assert!("-1".parse::<QubitId>().is_err());
    }

    #[test]
    fn test_qubit_check() {
        assert!(QubitId::new(1).check(2).is_ok());
        let err = QubitId::new(2).check(2).unwrap_err();
        assert!(matches!(err, QuantumError::InvalidQubit(2, 2)));
    }

    #[test]
    fn test_usize_conversions() {
        let q: QubitId = 7.into();
        let i: usize = q.into();
        assert_eq!(i, 7);
    }
}
