//! Point Snapper
//!
//! Maps an arbitrary extracted point value onto the nearest allowed point
//! denomination.

use qb_common::ALLOWED_POINTS;

/// Snap `value` to the nearest element of `options`
///
/// **Algorithm:**
/// 1. Empty `options`: return `value` unchanged
/// 2. Linear scan in the given order, replacing the best candidate only on a
///    strictly smaller absolute distance, so the earlier option wins ties
///
/// **Non-finite input** (non-empty `options`):
/// - `NaN` returns the first option
/// - `+inf` returns the largest option, `-inf` the smallest
///
/// Total: never fails, never allocates.
pub fn snap(value: f64, options: &[f64]) -> f64 {
    let Some((&first, rest)) = options.split_first() else {
        return value;
    };

    if value.is_nan() {
        return first;
    }

    if value.is_infinite() {
        let pick_larger = value > 0.0;
        return rest.iter().copied().fold(first, |best, option| {
            if (pick_larger && option > best) || (!pick_larger && option < best) {
                option
            } else {
                best
            }
        });
    }

    let mut best = first;
    let mut best_distance = (first - value).abs();
    for &option in rest {
        let distance = (option - value).abs();
        if distance < best_distance {
            best = option;
            best_distance = distance;
        }
    }
    best
}

/// Snap `value` onto [`ALLOWED_POINTS`]
pub fn snap_points(value: f64) -> u32 {
    let options = ALLOWED_POINTS.map(f64::from);
    let points = snap(value, &options) as u32;

    tracing::debug!(candidate = value, points, "Snapped point value");
    points
}
