//! Algebraic properties of the CIEDE2000 evaluator
//!
//! Identity, symmetry and non-negativity must hold for every finite input,
//! including lightness outside `[0, 100]`.

use ciede2000_core::{Lab, ciede_2000, delta_e_2000};
use proptest::prelude::*;

fn lab() -> impl Strategy<Value = Lab> {
    (0.0f64..=100.0, -128.0f64..=128.0, -128.0f64..=128.0)
        .prop_map(|(l, a, b)| Lab::new(l, a, b))
}

fn wide_lab() -> impl Strategy<Value = Lab> {
    (-50.0f64..=200.0, -500.0f64..=500.0, -500.0f64..=500.0)
        .prop_map(|(l, a, b)| Lab::new(l, a, b))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn identity_is_exactly_zero(x in wide_lab()) {
        prop_assert_eq!(delta_e_2000(x, x), 0.0);
    }

    #[test]
    fn symmetric_under_swap(x in lab(), y in lab()) {
        let forward = delta_e_2000(x, y);
        let backward = delta_e_2000(y, x);
        prop_assert!(
            (forward - backward).abs() <= 1e-12 * forward.max(1.0),
            "{} vs {}: {} != {}", x, y, forward, backward
        );
    }

    #[test]
    fn finite_and_non_negative(x in wide_lab(), y in wide_lab()) {
        let de = delta_e_2000(x, y);
        prop_assert!(de.is_finite(), "{} vs {} gave {}", x, y, de);
        prop_assert!(de >= 0.0);
    }

    #[test]
    fn distinct_colors_are_positive(x in lab(), dl in 0.001f64..10.0) {
        let y = Lab::new(x.l + dl, x.a, x.b);
        prop_assert!(delta_e_2000(x, y) > 0.0);
    }

    #[test]
    fn raw_coordinates_match_typed(x in lab(), y in lab()) {
        let raw = ciede_2000(x.l, x.a, x.b, y.l, y.a, y.b);
        prop_assert_eq!(raw.to_bits(), delta_e_2000(x, y).to_bits());
    }
}

#[test]
fn lightness_only_difference_ignores_chroma_terms() {
    // Same a*, b*: only the lightness component survives
    let source = Lab::new(94.201, -34.0861, -68.724);
    let target = Lab::new(97.78, -34.0861, -68.724);

    let l_bar: f64 = (94.201 + 97.78) / 2.0;
    let sq = (l_bar - 50.0) * (l_bar - 50.0);
    let expected = (97.78 - 94.201) / (1.0 + 0.015 * sq / (20.0 + sq).sqrt());

    assert!((delta_e_2000(source, target) - expected).abs() < 1e-12);
}
