//! CIEDE2000 color difference
//!
//! The evaluation order below is part of the contract: datasets produced by
//! other implementations are compared against this one with an absolute
//! tolerance of `1e-10`, so every intermediate value is computed the same way
//! they compute it (`hypot` for magnitudes, repeated multiplication for the
//! 7th powers, radians throughout, hue difference snapped to π).

use std::f64::consts::PI;

use crate::lab::Lab;

/// Lightness parametric factor
pub const K_L: f64 = 1.0;
/// Chroma parametric factor
pub const K_C: f64 = 1.0;
/// Hue parametric factor
pub const K_H: f64 = 1.0;

/// 25^7, the chroma pivot of the G and R_T terms
pub const POW_25_7: f64 = 6103515625.0;

/// Distance from π below which a hue difference is treated as exactly π
pub const HUE_SNAP: f64 = 1e-14;

#[inline(always)]
fn pow7(x: f64) -> f64 {
    x * x * x * x * x * x * x
}

/// Calculate CIEDE2000 color difference between two Lab colors
///
/// A difference of 1.0 is approximately the just-noticeable difference.
/// The result is symmetric in its arguments and exactly `0.0` for identical
/// colors. Non-finite inputs yield a non-finite result.
#[inline]
pub fn delta_e_2000(source: Lab, target: Lab) -> f64 {
    ciede_2000(source.l, source.a, source.b, target.l, target.a, target.b)
}

/// Calculate CIEDE2000 from six raw coordinates (`source` first)
pub fn ciede_2000(l_1: f64, a_1: f64, b_1: f64, l_2: f64, a_2: f64, b_2: f64) -> f64 {
    // G inflates a* for nearly neutral colors
    let g_bar = pow7((a_1.hypot(b_1) + a_2.hypot(b_2)) * 0.5);
    let g = 1.0 + 0.5 * (1.0 - (g_bar / (g_bar + POW_25_7)).sqrt());

    let c_1 = (a_1 * g).hypot(b_1);
    let c_2 = (a_2 * g).hypot(b_2);

    let mut h_1 = b_1.atan2(a_1 * g);
    let mut h_2 = b_2.atan2(a_2 * g);
    if h_1 < 0.0 {
        h_1 += 2.0 * PI;
    }
    if h_2 < 0.0 {
        h_2 += 2.0 * PI;
    }

    let mut h_abs = (h_2 - h_1).abs();
    if (PI - HUE_SNAP..=PI + HUE_SNAP).contains(&h_abs) {
        h_abs = PI;
    }

    // Mean hue and half difference, moved to the short side of the circle
    let mut h_mean = 0.5 * h_1 + 0.5 * h_2;
    let mut h_delta = (h_2 - h_1) * 0.5;
    if PI < h_abs {
        if 0.0 < h_delta {
            h_delta -= PI;
        } else {
            h_delta += PI;
        }
        h_mean += PI;
    }

    // Blue-region hue rotation
    let p = 36.0 * h_mean - 55.0 * PI;
    let c_bar = pow7((c_1 + c_2) * 0.5);
    let r_t = -2.0
        * (c_bar / (c_bar + POW_25_7)).sqrt()
        * (PI / 3.0 * (p * p / (-25.0 * PI * PI)).exp()).sin();

    let l_bar = (l_1 + l_2) * 0.5;
    let l_bar = (l_bar - 50.0) * (l_bar - 50.0);
    let l = (l_2 - l_1) / (K_L * (1.0 + 0.015 * l_bar / (20.0 + l_bar).sqrt()));

    let t = 1.0 + 0.24 * (2.0 * h_mean + PI * 0.5).sin()
        + 0.32 * (3.0 * h_mean + 8.0 * PI / 15.0).sin()
        - 0.17 * (h_mean + PI / 3.0).sin()
        - 0.20 * (4.0 * h_mean + 3.0 * PI / 20.0).sin();

    let c_sum = c_1 + c_2;
    let h = 2.0 * (c_1 * c_2).sqrt() * h_delta.sin() / (K_H * (1.0 + 0.0075 * c_sum * t));
    let c = (c_2 - c_1) / (K_C * (1.0 + 0.0225 * c_sum));

    (l * l + h * h + c * c + c * h * r_t).sqrt()
}
