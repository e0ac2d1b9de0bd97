use resample_image::{ImageView, Rgba16};

use super::grid::ScaleFactors;

/// Source index copied into destination index `dst` along one axis.
///
/// Picks the source pixel under the destination pixel center and clamps it to
/// `[min, max - 1]` so that rounding can never step past the last pixel.
#[inline]
pub(crate) fn nearest_source_index(dst: usize, scale: f64, min: i64, max: i64) -> i64 {
    let offset = (dst as f64 * scale + 0.5 * scale).floor() as i64;
    (min + offset).min(max - 1).max(min)
}

/// Kernel for nearest neighbor interpolation
///
/// Uses the same index rule as the sequential fast path, so sampling every
/// destination pixel through this kernel reproduces its output exactly.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `x` - The destination column.
/// * `y` - The destination row.
/// * `scale` - The scale factors between source and destination.
///
/// # Returns
///
/// The color of the source pixel under the center of destination pixel `(x, y)`.
pub(crate) fn nearest_neighbor_interpolation<V: ImageView + ?Sized>(
    image: &V,
    x: usize,
    y: usize,
    scale: &ScaleFactors,
) -> Rgba16 {
    let bounds = image.bounds();

    let sx = nearest_source_index(x, scale.x, bounds.min_x, bounds.max_x);
    let sy = nearest_source_index(y, scale.y, bounds.min_y, bounds.max_y);

    image.color_at(sx, sy)
}
