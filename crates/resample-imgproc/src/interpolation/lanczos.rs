use resample_image::{ImageView, Rgba16, CHANNELS};

use super::grid::ScaleFactors;
use super::kernel::{lanczos3, LANCZOS3_RADIUS};

/// Kernel for anti-aliased Lanczos-3 interpolation
///
/// Every source pixel within the (stretched) kernel window around `(u, v)`
/// contributes with the separable weight `L(dx / sx) * L(dy / sy)`, where
/// `sx` and `sy` are the kernel stretch of [`ScaleFactors::kernel_stretch`].
/// The weighted sum is normalized by the total weight. When no pixel of the
/// window falls inside the source the accumulated color stays zero and is
/// returned as is.
///
/// # Arguments
///
/// * `image` - The input image.
/// * `u` - The x coordinate of the pixel to interpolate, in source coordinates.
/// * `v` - The y coordinate of the pixel to interpolate, in source coordinates.
/// * `scale` - The scale factors between source and destination.
///
/// # Returns
///
/// The interpolated color, each channel clamped to `[0, 65535]`.
pub(crate) fn lanczos3_interpolation<V: ImageView + ?Sized>(
    image: &V,
    u: f64,
    v: f64,
    scale: &ScaleFactors,
) -> Rgba16 {
    let bounds = image.bounds();
    let (stretch_x, stretch_y) = scale.kernel_stretch();

    let support_x = LANCZOS3_RADIUS * stretch_x;
    let support_y = LANCZOS3_RADIUS * stretch_y;

    // restrict the window to the source so that no weight is spent outside it
    let x_min = ((u - support_x).ceil() as i64).max(bounds.min_x);
    let x_max = ((u + support_x).floor() as i64).min(bounds.max_x - 1);
    let y_min = ((v - support_y).ceil() as i64).max(bounds.min_y);
    let y_max = ((v + support_y).floor() as i64).min(bounds.max_y - 1);

    // the kernel is separable, the horizontal taps are shared by every row
    let weights_x = (x_min..=x_max)
        .map(|sx| lanczos3((u - sx as f64) / stretch_x))
        .collect::<Vec<_>>();

    let mut acc = [0.0f64; CHANNELS];
    let mut total_weight = 0.0f64;

    for sy in y_min..=y_max {
        let weight_y = lanczos3((v - sy as f64) / stretch_y);
        if weight_y == 0.0 {
            continue;
        }

        for (sx, &weight_x) in (x_min..=x_max).zip(weights_x.iter()) {
            let weight = weight_x * weight_y;
            if weight == 0.0 {
                continue;
            }

            let color = image.color_at(sx, sy);
            for (a, &c) in acc.iter_mut().zip(color.channels().iter()) {
                *a += c as f64 * weight;
            }
            total_weight += weight;
        }
    }

    if total_weight > 0.0 {
        acc.iter_mut().for_each(|a| *a /= total_weight);
    }

    // truncation after the clamp, NaN collapses to zero
    let channels = acc.map(|a| a.clamp(0.0, u16::MAX as f64) as u16);

    Rgba16::from(channels)
}
