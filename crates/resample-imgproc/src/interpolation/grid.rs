use resample_image::{Bounds, ImageSize};

/// Ratio between the source and the destination extents, per axis.
///
/// A factor above one means downscaling (several source pixels per
/// destination pixel), below one means upscaling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    /// `source_width / destination_width`
    pub x: f64,
    /// `source_height / destination_height`
    pub y: f64,
}

impl ScaleFactors {
    /// Compute the scale factors to resample `src` into `dst`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_imgproc::interpolation::ScaleFactors;
    ///
    /// let scale = ScaleFactors::new([100, 50].into(), [25, 100].into());
    ///
    /// assert_eq!(scale.x, 4.0);
    /// assert_eq!(scale.y, 0.5);
    /// ```
    pub fn new(src: ImageSize, dst: ImageSize) -> Self {
        Self {
            x: src.width as f64 / dst.width as f64,
            y: src.height as f64 / dst.height as f64,
        }
    }

    /// How much the kernel is widened on each axis.
    ///
    /// When downscaling the kernel is stretched by the scale factor so that it
    /// acts as a low-pass filter; when upscaling it keeps its natural width.
    pub fn kernel_stretch(&self) -> (f64, f64) {
        (self.x.max(1.0), self.y.max(1.0))
    }
}

/// Map a destination pixel to its sample point in source coordinates.
///
/// The mapping is center to center: the center of destination pixel `x`
/// lands at `(x + 0.5) * scale - 0.5` source pixels from the source origin.
///
/// # Arguments
///
/// * `x` - The destination column.
/// * `y` - The destination row.
/// * `bounds` - The bounds of the source image.
/// * `scale` - The scale factors between source and destination.
///
/// # Returns
///
/// The fractional `(x, y)` coordinate in the source image.
///
/// # Examples
///
/// ```
/// use resample_image::Bounds;
/// use resample_imgproc::interpolation::{map_to_source, ScaleFactors};
///
/// let bounds = Bounds::new(0, 0, 4, 4);
/// let scale = ScaleFactors { x: 2.0, y: 2.0 };
///
/// // the first destination pixel covers source pixels 0 and 1
/// assert_eq!(map_to_source(0, 0, &bounds, &scale), (0.5, 0.5));
/// ```
#[inline]
pub fn map_to_source(x: usize, y: usize, bounds: &Bounds, scale: &ScaleFactors) -> (f64, f64) {
    let u = (x as f64 + 0.5) * scale.x - 0.5 + bounds.min_x as f64;
    let v = (y as f64 + 0.5) * scale.y - 0.5 + bounds.min_y as f64;
    (u, v)
}
