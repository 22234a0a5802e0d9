//! Point denominations a quest may carry

/// The only point values a quest may be stored with, in ascending order.
///
/// Order matters: the snapper breaks distance ties in favour of the
/// earlier entry.
pub const ALLOWED_POINTS: [u32; 6] = [5, 10, 15, 20, 25, 50];

/// Points assigned when the extractor supplied no usable value
pub const DEFAULT_POINTS: u32 = 10;

/// Check whether `points` is one of [`ALLOWED_POINTS`]
pub fn is_allowed(points: u32) -> bool {
    ALLOWED_POINTS.contains(&points)
}
