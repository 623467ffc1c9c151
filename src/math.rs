//! Angle helpers for the almanac algorithm.

#![allow(clippy::many_single_char_names)]

#[cfg(not(feature = "std"))]
use libm;

/// The truncated π used by the reference algorithm.
///
/// The 1990 Almanac for Computers tables were produced with this constant
/// rather than a full-precision π. It is kept verbatim so results stay
/// numerically compatible with implementations validated against those
/// tables.
pub const PI: f64 = 3.141593;

/// Converts degrees to radians using the truncated [`PI`].
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Converts radians to degrees using the truncated [`PI`].
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians / (PI / 180.0)
}

/// Applies a single wraparound correction toward the range [0, 360).
///
/// This is deliberately **not** a modulo: one period is added or subtracted
/// at most once, matching the reference algorithm. Values more than one
/// period out of range come back only partially corrected (e.g. 800 becomes
/// 440, not 80). The algorithm never produces such values, and the quirk is
/// load-bearing for numerical compatibility.
pub fn adjust_to_360(degrees: f64) -> f64 {
    if degrees > 360.0 {
        degrees - 360.0
    } else if degrees < 0.0 {
        degrees + 360.0
    } else {
        degrees
    }
}

/// Single wraparound correction toward [0, 24), see [`adjust_to_360`].
pub fn adjust_to_24(hours: f64) -> f64 {
    if hours > 24.0 {
        hours - 24.0
    } else if hours < 0.0 {
        hours + 24.0
    } else {
        hours
    }
}

/// Computes sin(x) using the appropriate function for the compilation target.
#[inline]
pub fn sin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.sin();

    #[cfg(not(feature = "std"))]
    return libm::sin(x);
}

/// Computes cos(x) using the appropriate function for the compilation target.
#[inline]
pub fn cos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.cos();

    #[cfg(not(feature = "std"))]
    return libm::cos(x);
}

/// Computes tan(x) using the appropriate function for the compilation target.
#[inline]
pub fn tan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.tan();

    #[cfg(not(feature = "std"))]
    return libm::tan(x);
}

/// Computes asin(x) using the appropriate function for the compilation target.
#[inline]
pub fn asin(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.asin();

    #[cfg(not(feature = "std"))]
    return libm::asin(x);
}

/// Computes acos(x) using the appropriate function for the compilation target.
#[inline]
pub fn acos(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.acos();

    #[cfg(not(feature = "std"))]
    return libm::acos(x);
}

/// Computes atan(x) using the appropriate function for the compilation target.
#[inline]
pub fn atan(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.atan();

    #[cfg(not(feature = "std"))]
    return libm::atan(x);
}

/// Computes floor(x) using the appropriate function for the compilation target.
#[inline]
pub fn floor(x: f64) -> f64 {
    #[cfg(feature = "std")]
    return x.floor();

    #[cfg(not(feature = "std"))]
    return libm::floor(x);
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_degree_radian_conversion() {
        assert!((degrees_to_radians(180.0) - PI).abs() < EPSILON);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < EPSILON);
        assert!((degrees_to_radians(0.0)).abs() < EPSILON);

        assert!((radians_to_degrees(PI) - 180.0).abs() < EPSILON);
        assert!((radians_to_degrees(PI / 2.0) - 90.0).abs() < EPSILON);

        // Round trip through the truncated constant stays exact
        assert!((radians_to_degrees(degrees_to_radians(42.93)) - 42.93).abs() < EPSILON);
    }

    #[test]
    fn test_truncated_pi() {
        // Not the platform π; the difference is what keeps results
        // compatible with the reference tables.
        assert_eq!(PI, 3.141593);
        assert_ne!(PI, core::f64::consts::PI);
    }

    #[test]
    fn test_adjust_to_360() {
        assert_eq!(adjust_to_360(370.0), 10.0);
        assert_eq!(adjust_to_360(-10.0), 350.0);
        assert_eq!(adjust_to_360(0.0), 0.0);
        assert_eq!(adjust_to_360(359.9), 359.9);
        // 360.0 itself is left untouched (the reference uses a strict >)
        assert_eq!(adjust_to_360(360.0), 360.0);
    }

    #[test]
    fn test_adjust_to_360_is_single_step() {
        // One correction only: 800 - 360 = 440, not 80.
        assert_eq!(adjust_to_360(800.0), 440.0);
        assert_eq!(adjust_to_360(-400.0), -40.0);
    }

    #[test]
    fn test_adjust_to_24() {
        assert_eq!(adjust_to_24(25.0), 1.0);
        assert_eq!(adjust_to_24(-1.0), 23.0);
        assert_eq!(adjust_to_24(12.0), 12.0);
        assert_eq!(adjust_to_24(47.0), 23.0);
        // Single step here too
        assert_eq!(adjust_to_24(50.0), 26.0);
    }
}
