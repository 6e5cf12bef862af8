//! Evaluators under test
//!
//! The harness never calls `ciede2000_core` directly. Generation and
//! comparison take any [`DeltaE`], so the same code checks the local
//! implementation, an instrumented one, or a deliberately broken one.

use ciede2000_core::Lab;

/// A ΔE2000 implementation
pub trait DeltaE {
    /// Difference from `source` to `target`
    fn delta_e(&self, source: Lab, target: Lab) -> f64;
}

impl<F> DeltaE for F
where
    F: Fn(Lab, Lab) -> f64,
{
    #[inline]
    fn delta_e(&self, source: Lab, target: Lab) -> f64 {
        self(source, target)
    }
}

/// The evaluator shipped by `ciede2000-core`
pub fn local() -> impl DeltaE + Sync + Copy {
    ciede2000_core::delta_e_2000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closures_are_evaluators() {
        let offset = |s: Lab, t: Lab| ciede2000_core::delta_e_2000(s, t) + 1.0;
        let lab = Lab::new(50.0, 10.0, 10.0);
        assert_eq!(offset.delta_e(lab, lab), 1.0);
    }

    #[test]
    fn test_local_matches_core() {
        let source = Lab::new(20.0979, -118.76, -72.5);
        let target = Lab::new(117.3548, 102.9, -25.5);
        assert_eq!(
            local().delta_e(source, target),
            ciede2000_core::delta_e_2000(source, target)
        );
    }
}
