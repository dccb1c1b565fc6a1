// Math kernel for calx
// Every function here is total: domain edges map to a defined value instead of NaN or a panic.

use std::f64::consts::PI;

/// Returns `1.0`, `-1.0` or `0.0` depending on the sign of `a`.
pub fn sign(a: f64) -> f64 {
    if a > 0.0 {
        1.0
    } else if a < 0.0 {
        -1.0
    } else {
        0.0
    }
}

/// Division that yields `0.0` for a zero divisor.
pub fn safe_divide(a: f64, b: f64) -> f64 {
    if b != 0.0 {
        a / b
    } else {
        0.0
    }
}

/// Floating point remainder (sign follows the dividend), `0.0` for a zero divisor.
pub fn safe_modulo(a: f64, b: f64) -> f64 {
    if b != 0.0 {
        a % b
    } else {
        0.0
    }
}

/// Exponentiation that yields `0.0` for a negative base raised to a non-integer power.
pub fn safe_power(base: f64, exponent: f64) -> f64 {
    if base < 0.0 && exponent.fract() != 0.0 {
        return 0.0;
    }
    base.powf(exponent)
}

/// Logarithm of `a` in the given `base`.
///
/// Non-positive arguments or bases give `0.0`, and so does a base of one
/// (the change-of-base denominator vanishes).
pub fn safe_log(a: f64, base: f64) -> f64 {
    if a <= 0.0 || base <= 0.0 {
        return 0.0;
    }
    safe_divide(a.ln(), base.ln())
}

/// Square root with negative inputs clamped to zero.
pub fn safe_sqrt(a: f64) -> f64 {
    a.max(0.0).sqrt()
}

/// `1 / sqrt(a)`, or `0.0` when `a <= 0`.
pub fn safe_inverse_sqrt(a: f64) -> f64 {
    if a > 0.0 {
        1.0 / a.sqrt()
    } else {
        0.0
    }
}

pub fn safe_asin(a: f64) -> f64 {
    a.clamp(-1.0, 1.0).asin()
}

pub fn safe_acos(a: f64) -> f64 {
    a.clamp(-1.0, 1.0).acos()
}

/// The part of `a` above `floor(a)`; always in `[0, 1)`.
pub fn fraction(a: f64) -> f64 {
    a - a.floor()
}

/// Rounds half up: `floor(a + 0.5)`.
pub fn round(a: f64) -> f64 {
    (a + 0.5).floor()
}

/// Rounds toward zero.
pub fn trunc(a: f64) -> f64 {
    if a >= 0.0 {
        a.floor()
    } else {
        a.ceil()
    }
}

pub fn deg2rad(deg: f64) -> f64 {
    deg * (PI / 180.0)
}

pub fn rad2deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Snaps `a` down to the nearest multiple of `increment`.
pub fn snap(a: f64, increment: f64) -> f64 {
    safe_divide(a, increment).floor() * increment
}

/// Bounces `value` back and forth between `0` and `scale`.
pub fn pingpong(value: f64, scale: f64) -> f64 {
    if scale == 0.0 {
        return 0.0;
    }
    (fraction((value - scale) / (scale * 2.0)) * scale * 2.0 - scale).abs()
}

/// `1.0` when `a` and `b` are within `epsilon` of each other, `0.0` otherwise.
///
/// The tolerance never drops below machine epsilon.
pub fn compare(a: f64, b: f64, epsilon: f64) -> f64 {
    if a == b || (a - b).abs() <= epsilon.max(f64::EPSILON) {
        1.0
    } else {
        0.0
    }
}

/// Polynomial smooth minimum with blend radius `k`.
///
/// A zero radius degrades to the plain minimum.
pub fn smooth_min(a: f64, b: f64, k: f64) -> f64 {
    if k != 0.0 {
        let h = (k - (a - b).abs()).max(0.0) / k;
        a.min(b) - h * h * h * k * (1.0 / 6.0)
    } else {
        a.min(b)
    }
}

pub fn smooth_max(a: f64, b: f64, k: f64) -> f64 {
    -smooth_min(-a, -b, k)
}

/// Wraps `value` into the half-open range spanned by `min` and `max`.
///
/// An empty range collapses to `min`.
pub fn wrap(value: f64, max: f64, min: f64) -> f64 {
    let range = max - min;
    if range != 0.0 {
        value - range * ((value - min) / range).floor()
    } else {
        min
    }
}

pub fn less_than(a: f64, b: f64) -> f64 {
    if a < b {
        1.0
    } else {
        0.0
    }
}

pub fn greater_than(a: f64, b: f64) -> f64 {
    if a > b {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_division_by_zero_is_zero() {
        assert_eq!(safe_divide(5.0, 0.0), 0.0);
        assert_eq!(safe_divide(-5.0, 0.0), 0.0);
        assert_eq!(safe_divide(6.0, 3.0), 2.0);
        assert_eq!(safe_modulo(7.0, 0.0), 0.0);
        assert_eq!(safe_modulo(7.0, 4.0), 3.0);
        assert_eq!(safe_modulo(-7.0, 4.0), -3.0);
    }

    #[test]
    fn test_power_edge_cases() {
        assert_eq!(safe_power(-8.0, 0.5), 0.0);
        assert_eq!(safe_power(-2.0, 3.0), -8.0);
        assert_eq!(safe_power(2.0, 10.0), 1024.0);
        assert!((safe_power(4.0, 0.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_log_edge_cases() {
        assert_eq!(safe_log(0.0, 10.0), 0.0);
        assert_eq!(safe_log(-1.0, 10.0), 0.0);
        assert_eq!(safe_log(10.0, 0.0), 0.0);
        assert_eq!(safe_log(10.0, 1.0), 0.0);
        assert!((safe_log(100.0, 10.0) - 2.0).abs() < 1e-12);
        assert!((safe_log(10.0, std::f64::consts::E) - 2.302_585_093).abs() < 1e-9);
    }

    #[test]
    fn test_roots_clamp() {
        assert_eq!(safe_sqrt(-4.0), 0.0);
        assert_eq!(safe_sqrt(9.0), 3.0);
        assert_eq!(safe_inverse_sqrt(0.0), 0.0);
        assert_eq!(safe_inverse_sqrt(-1.0), 0.0);
        assert_eq!(safe_inverse_sqrt(4.0), 0.5);
    }

    #[test]
    fn test_inverse_trig_clamps_input() {
        assert!((safe_asin(2.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((safe_asin(-7.0) + std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!(safe_acos(3.0).abs() < 1e-12);
        assert!((safe_acos(-3.0) - PI).abs() < 1e-12);
    }

    #[test]
    fn test_rounding_family() {
        assert_eq!(round(2.5), 3.0);
        assert_eq!(round(-2.5), -2.0);
        assert_eq!(trunc(-2.7), -2.0);
        assert_eq!(trunc(2.7), 2.0);
        assert!((fraction(-0.25) - 0.75).abs() < 1e-12);
        assert_eq!(snap(7.0, 3.0), 6.0);
        assert_eq!(snap(7.0, 0.0), 0.0);
        assert_eq!(sign(-0.0), 0.0);
        assert_eq!(sign(-3.0), -1.0);
    }

    #[test]
    fn test_smooth_min_with_zero_radius_is_min() {
        assert_eq!(smooth_min(3.0, 5.0, 0.0), 3.0);
        assert_eq!(smooth_max(3.0, 5.0, 0.0), 5.0);
        // Inside the blend radius the result dips below the plain minimum.
        assert!(smooth_min(3.0, 3.5, 1.0) < 3.0);
        assert!(smooth_max(3.0, 3.5, 1.0) > 3.5);
    }

    #[test]
    fn test_wrap_and_pingpong() {
        assert_eq!(wrap(12.0, 10.0, 0.0), 2.0);
        assert_eq!(wrap(-1.0, 10.0, 0.0), 9.0);
        assert_eq!(wrap(4.0, 2.0, 2.0), 2.0);
        assert_eq!(pingpong(3.0, 2.0), 1.0);
        assert_eq!(pingpong(1.5, 0.0), 0.0);
    }

    #[test]
    fn test_compare_uses_epsilon_floor() {
        assert_eq!(compare(1.0, 1.0, 0.0), 1.0);
        assert_eq!(compare(1.0, 1.05, 0.1), 1.0);
        assert_eq!(compare(1.0, 1.5, 0.1), 0.0);
        assert_eq!(compare(1.0, 1.0 + f64::EPSILON / 2.0, -1.0), 1.0);
    }

    proptest! {
        #[test]
        fn prop_guarded_functions_are_total(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            prop_assert!(safe_divide(a, b).is_finite());
            prop_assert!(safe_modulo(a, b).is_finite());
            prop_assert!(safe_log(a, b).is_finite());
            prop_assert!(safe_sqrt(a).is_finite());
            prop_assert!(safe_inverse_sqrt(a).is_finite());
            prop_assert!(safe_asin(a).is_finite());
            prop_assert!(safe_acos(a).is_finite());
            prop_assert!(!safe_power(a.min(-1.0), 0.5).is_nan());
        }
    }
}
