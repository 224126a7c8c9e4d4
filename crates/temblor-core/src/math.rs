//! Mathematical utility functions for the tremolo core.
//!
//! Allocation-free, `no_std`-friendly helpers: the normalized tanh
//! waveshaper at the heart of the modulation algorithm, plus the level
//! conversions used for reporting.

use libm::{expf, logf, tanhf};

/// Lower clamp of the waveshaper saturation amount.
///
/// `tanh_shape` divides by `tanh(amount)`, which approaches 0 as the
/// amount does; the floor keeps the denominator well away from zero.
pub const SHAPE_MIN: f32 = 0.00001;

/// Upper clamp of the waveshaper saturation amount.
///
/// Beyond this the curve is numerically indistinguishable from a square
/// and large arguments only invite saturation artifacts.
pub const SHAPE_MAX: f32 = 100.0;

/// Normalized tanh waveshaper.
///
/// Maps `x` in `[-1, 1]` through `tanh(x * amount) / tanh(amount)`.
/// Dividing by `tanh(amount)` renormalizes the peaks so `x = ±1` still
/// maps to `±1`: small amounts leave the curve nearly linear, large
/// amounts push it toward a square. `amount` is clamped to
/// [`SHAPE_MIN`]..[`SHAPE_MAX`] internally, so the function is total.
///
/// # Example
/// ```rust
/// use temblor_core::tanh_shape;
///
/// // Peaks stay at +/-1 regardless of drive.
/// assert!((tanh_shape(1.0, 5.0) - 1.0).abs() < 1e-6);
/// // Zero in, zero out.
/// assert_eq!(tanh_shape(0.0, 5.0), 0.0);
/// ```
#[inline]
pub fn tanh_shape(x: f32, amount: f32) -> f32 {
    let amount = amount.clamp(SHAPE_MIN, SHAPE_MAX);
    tanhf(x * amount) / tanhf(amount)
}

/// Convert decibels to linear gain.
#[inline]
pub fn db_to_linear(db: f32) -> f32 {
    // 10^(dB/20) = e^(dB * ln(10)/20)
    const FACTOR: f32 = core::f32::consts::LN_10 / 20.0;
    expf(db * FACTOR)
}

/// Convert linear gain to decibels.
///
/// Input is floored at 1e-10 so silence reports a large negative number
/// instead of -inf.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    // 20 * log10(linear) = 20 * ln(linear) / ln(10)
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tanh_shape_is_odd_and_bounded() {
        for i in 0..=200 {
            let x = -1.0 + i as f32 * 0.01;
            for amount in [0.0, 0.5, 1.0, 5.0, 10.0, 100.0, 1000.0] {
                let y = tanh_shape(x, amount);
                assert!(y.is_finite());
                assert!(y.abs() <= 1.0 + 1e-5, "|{y}| > 1 at x={x} amount={amount}");
            }
        }
        assert!((tanh_shape(0.5, 3.0) + tanh_shape(-0.5, 3.0)).abs() < 1e-6);
    }

    #[test]
    fn tanh_shape_near_zero_amount_is_linear() {
        // As amount -> 0 the normalized curve approaches the identity.
        for x in [-1.0f32, -0.5, 0.25, 1.0] {
            let y = tanh_shape(x, 0.0);
            assert!((y - x).abs() < 1e-3, "expected ~{x}, got {y}");
        }
    }

    #[test]
    fn tanh_shape_large_amount_squares_up() {
        assert!(tanh_shape(0.1, 100.0) > 0.999);
        assert!(tanh_shape(-0.1, 100.0) < -0.999);
    }

    #[test]
    fn db_round_trip() {
        for db in [-60.0f32, -6.02, 0.0, 6.02, 12.0] {
            let back = linear_to_db(db_to_linear(db));
            assert!((back - db).abs() < 0.01);
        }
    }
}
