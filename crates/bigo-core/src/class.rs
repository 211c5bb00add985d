//! Complexity class definitions
//!
//! Every reference function is tagged with a time class and a space class:
//! - Constant: work independent of n
//! - Logarithmic: work proportional to log n
//! - Linear: work proportional to n
//! - Quadratic: work proportional to n^2

use std::fmt;

/// Growth-rate class, ordered from slowest-growing to fastest
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComplexityClass {
    /// O(1)
    Constant,
    /// O(log n)
    Logarithmic,
    /// O(n)
    Linear,
    /// O(n^2)
    Quadratic,
}

impl ComplexityClass {
    /// All classes, slowest-growing first
    pub const ALL: [ComplexityClass; 4] = [
        ComplexityClass::Constant,
        ComplexityClass::Logarithmic,
        ComplexityClass::Linear,
        ComplexityClass::Quadratic,
    ];

    /// Big-O notation for this class
    pub fn notation(self) -> &'static str {
        match self {
            ComplexityClass::Constant => "O(1)",
            ComplexityClass::Logarithmic => "O(log n)",
            ComplexityClass::Linear => "O(n)",
            ComplexityClass::Quadratic => "O(n^2)",
        }
    }

    /// Reference growth curve evaluated at n
    pub fn scale(self, n: f64) -> f64 {
        match self {
            ComplexityClass::Constant => 1.0,
            ComplexityClass::Logarithmic => n.max(1.0).log2(),
            ComplexityClass::Linear => n,
            ComplexityClass::Quadratic => n * n,
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            ComplexityClass::Constant => "constant",
            ComplexityClass::Logarithmic => "logarithmic",
            ComplexityClass::Linear => "linear",
            ComplexityClass::Quadratic => "quadratic",
        }
    }
}

impl fmt::Display for ComplexityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.notation(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_follows_growth() {
        assert!(ComplexityClass::Constant < ComplexityClass::Logarithmic);
        assert!(ComplexityClass::Logarithmic < ComplexityClass::Linear);
        assert!(ComplexityClass::Linear < ComplexityClass::Quadratic);

        let n = 1024.0;
        let scaled: Vec<f64> = ComplexityClass::ALL.iter().map(|c| c.scale(n)).collect();
        assert!(scaled.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_scale_values() {
        assert_eq!(ComplexityClass::Constant.scale(1e9), 1.0);
        assert_eq!(ComplexityClass::Logarithmic.scale(8.0), 3.0);
        assert_eq!(ComplexityClass::Linear.scale(10.0), 10.0);
        assert_eq!(ComplexityClass::Quadratic.scale(10.0), 100.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(ComplexityClass::Quadratic.to_string(), "O(n^2) (quadratic)");
        assert_eq!(ComplexityClass::Constant.notation(), "O(1)");
    }
}
