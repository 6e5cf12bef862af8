//! CIELAB (L*a*b*) Color Space
//!
//! L*a*b* is a perceptually oriented color space where equal distances
//! correspond to roughly equal perceived color differences.
//!
//! - L*: Lightness (0 = black, 100 = white)
//! - a*: Green-red axis (negative = green, positive = red)
//! - b*: Blue-yellow axis (negative = blue, positive = yellow)
//!
//! Coordinates are never clamped: values outside the nominal ranges are
//! common in test vectors and the color difference stays well defined.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use crate::delta_e::delta_e_2000;
use crate::error::Error;

/// CIELAB color coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Lab {
    /// Lightness (nominally 0 to 100)
    pub l: f64,
    /// Green-red axis (typically -128 to 128)
    pub a: f64,
    /// Blue-yellow axis (typically -128 to 128)
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Create Lab from an array
    #[inline]
    pub const fn from_array(arr: [f64; 3]) -> Self {
        Self {
            l: arr[0],
            a: arr[1],
            b: arr[2],
        }
    }

    /// Convert to array
    #[inline]
    pub const fn to_array(&self) -> [f64; 3] {
        [self.l, self.a, self.b]
    }

    /// Get chroma (colorfulness)
    #[inline]
    pub fn chroma(&self) -> f64 {
        self.a.hypot(self.b)
    }

    /// Get hue angle in radians, in `[0, 2π)`
    #[inline]
    pub fn hue(&self) -> f64 {
        let h = self.b.atan2(self.a);
        if h < 0.0 { h + TAU } else { h }
    }

    /// Get hue angle in degrees, in `[0, 360)`
    #[inline]
    pub fn hue_degrees(&self) -> f64 {
        self.hue().to_degrees()
    }

    /// True when all three coordinates are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.l.is_finite() && self.a.is_finite() && self.b.is_finite()
    }

    /// CIEDE2000 difference from `self` (source) to `other` (target)
    #[inline]
    pub fn delta_e_2000(&self, other: &Self) -> f64 {
        delta_e_2000(*self, *other)
    }

    /// Check if approximately equal to another Lab color
    #[inline]
    pub fn approx_eq(&self, other: &Self, epsilon: f64) -> bool {
        (self.l - other.l).abs() < epsilon
            && (self.a - other.a).abs() < epsilon
            && (self.b - other.b).abs() < epsilon
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lab({:?}, {:?}, {:?})", self.l, self.a, self.b)
    }
}

/// Parses the `lab(L, a, b)` notation used by published sample lists.
impl FromStr for Lab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix("lab(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(|| Error::ParseLab(s.to_string()))?;

        let mut coords = [0.0; 3];
        let mut fields = inner.split(',');
        for coord in &mut coords {
            let field = fields.next().ok_or_else(|| Error::ParseLab(s.to_string()))?;
            *coord = field
                .trim()
                .parse()
                .map_err(|_| Error::ParseLab(s.to_string()))?;
        }
        if fields.next().is_some() {
            return Err(Error::ParseLab(s.to_string()));
        }

        Ok(Self::from_array(coords))
    }
}

impl From<[f64; 3]> for Lab {
    fn from(arr: [f64; 3]) -> Self {
        Self::from_array(arr)
    }
}

impl From<Lab> for [f64; 3] {
    fn from(lab: Lab) -> Self {
        lab.to_array()
    }
}
