//! Float-safe step arithmetic.
//!
//! `0.3 % 0.1` is not `0` in binary floating point. Step checks instead
//! rescale value, base and step to integers using the largest decimal-place
//! count among them and take the remainder there.

/// Digits after the decimal point in the shortest round-trip form of `n`.
///
/// Non-finite numbers have no decimal places.
pub fn decimal_places(n: f64) -> usize {
    if !n.is_finite() {
        return 0;
    }
    let rendered = format!("{n}");
    rendered
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// True when `value` is reachable from `base` by whole multiples of `step`.
///
/// Non-finite inputs are never aligned.
///
/// ```
/// use shapeguard_kernel::is_step_aligned;
///
/// assert!(is_step_aligned(0.3, 0.0, 0.1));
/// assert!(is_step_aligned(0.7, 0.1, 0.2));
/// assert!(!is_step_aligned(50.5, 0.0, 1.0));
/// ```
pub fn is_step_aligned(value: f64, base: f64, step: f64) -> bool {
    if !(value.is_finite() && base.is_finite() && step.is_finite()) || step <= 0.0 {
        return false;
    }
    let decimals = decimal_places(value)
        .max(decimal_places(base))
        .max(decimal_places(step));
    let factor = 10f64.powi(i32::try_from(decimals).unwrap_or(i32::MAX));
    if !factor.is_finite() {
        return (value - base) % step == 0.0;
    }
    let offset = (value * factor).round() - (base * factor).round();
    let scaled_step = (step * factor).round();
    if scaled_step == 0.0 || !offset.is_finite() {
        return false;
    }
    offset % scaled_step == 0.0
}
