use thiserror::Error;

use crate::interpolation::{nearest_source_index, InterpolationMode, Sampler, ScaleFactors};
use crate::parallel::{self, ExecutionStrategy, ParallelError};
use resample_image::{Image, ImageSize, ImageView, CHANNELS};

/// Errors returned by the validating [`resize`] entry point.
#[derive(Error, Debug, PartialEq)]
pub enum ResizeError {
    /// The requested size has no pixels.
    #[error("target size must be > 0, got {0}x{1}")]
    InvalidTargetSize(usize, usize),

    /// The source image has no pixels.
    #[error("source image is empty ({0}x{1})")]
    EmptySource(usize, usize),

    /// Error from the worker pool configuration.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}

/// Resize an image with nearest neighbor interpolation.
///
/// Every destination pixel copies the source pixel under its center, without
/// any blending. The work is done sequentially on the calling thread.
///
/// `new_size` and the source bounds must both be non-empty; use [`resize`]
/// to have them checked.
///
/// # Arguments
///
/// * `new_size` - The size of the resized image.
/// * `src` - The source image.
///
/// # Returns
///
/// A new 16-bit image of exactly `new_size`.
///
/// # Example
///
/// ```
/// use resample_image::{Image, ImageSize, ImageView, Rgba16};
/// use resample_imgproc::resize::resize_fast;
///
/// let image = Image::<u8>::from_size_color([4, 5].into(), Rgba16::WHITE);
///
/// let resized = resize_fast(ImageSize { width: 2, height: 3 }, &image);
///
/// assert_eq!(resized.size().width, 2);
/// assert_eq!(resized.size().height, 3);
/// assert_eq!(resized.color_at(1, 2), Rgba16::WHITE);
/// ```
pub fn resize_fast<V>(new_size: ImageSize, src: &V) -> Image<u16>
where
    V: ImageView + ?Sized,
{
    let bounds = src.bounds();
    let scale = ScaleFactors::new(bounds.size(), new_size);

    let mut dst = Image::from_size_val(new_size, 0u16);
    if new_size.width == 0 {
        return dst;
    }

    // the source column only depends on x, compute it once per resize
    let columns = (0..new_size.width)
        .map(|x| nearest_source_index(x, scale.x, bounds.min_x, bounds.max_x))
        .collect::<Vec<_>>();

    dst.as_slice_mut()
        .chunks_exact_mut(new_size.width * CHANNELS)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let sy = nearest_source_index(y, scale.y, bounds.min_y, bounds.max_y);
            dst_row
                .chunks_exact_mut(CHANNELS)
                .zip(columns.iter())
                .for_each(|(pixel, &sx)| src.color_at(sx, sy).write_pixel(pixel));
        });

    dst
}

/// Resize an image with anti-aliased Lanczos-3 interpolation.
///
/// The rows of the destination are sampled in parallel, one worker per
/// available hardware thread (at most one per row). When downscaling the
/// kernel is stretched by the scale factor so that fine detail is averaged
/// instead of aliased.
///
/// `new_size` and the source bounds must both be non-empty; use [`resize`]
/// to have them checked.
///
/// # Arguments
///
/// * `new_size` - The size of the resized image.
/// * `src` - The source image.
///
/// # Returns
///
/// A new 16-bit image of exactly `new_size`.
///
/// # Example
///
/// ```
/// use resample_image::{Image, ImageSize};
/// use resample_imgproc::resize::resize_quality;
///
/// let image = Image::<u8>::from_size_val([4, 5].into(), 0);
///
/// let resized = resize_quality(ImageSize { width: 2, height: 3 }, &image);
///
/// assert_eq!(resized.num_channels(), 4);
/// assert_eq!(resized.size().width, 2);
/// assert_eq!(resized.size().height, 3);
/// ```
pub fn resize_quality<V>(new_size: ImageSize, src: &V) -> Image<u16>
where
    V: ImageView + Sync + ?Sized,
{
    let num_workers = parallel::available_workers(new_size.height);
    match resample_rows(new_size, src, &InterpolationMode::Lanczos3, num_workers) {
        Ok(dst) => dst,
        Err(e) => {
            log::warn!("{e}, resampling on the calling thread");
            let scale = ScaleFactors::new(src.bounds().size(), new_size);
            let mut dst = Image::from_size_val(new_size, 0u16);
            parallel::iter_rows_sample(src, &mut dst, scale, &InterpolationMode::Lanczos3);
            dst
        }
    }
}

/// Resize an image with Lanczos-3 interpolation on a chosen number of workers.
///
/// The output is the same for every strategy.
///
/// # Errors
///
/// Returns an error if the strategy asks for zero workers or the thread pool
/// cannot be built.
pub fn resize_quality_with<V>(
    new_size: ImageSize,
    src: &V,
    strategy: ExecutionStrategy,
) -> Result<Image<u16>, ParallelError>
where
    V: ImageView + Sync + ?Sized,
{
    resize_with_sampler(new_size, src, &InterpolationMode::Lanczos3, strategy)
}

/// Resize an image running any sampler through the row worker pool.
///
/// With [`InterpolationMode::Nearest`] the output is identical to
/// [`resize_fast`].
///
/// # Arguments
///
/// * `new_size` - The size of the resized image.
/// * `src` - The source image.
/// * `sampler` - The interpolation used for every destination pixel.
/// * `strategy` - How many workers sample the rows.
///
/// # Errors
///
/// Returns an error if the strategy asks for zero workers or the thread pool
/// cannot be built.
pub fn resize_with_sampler<V, S>(
    new_size: ImageSize,
    src: &V,
    sampler: &S,
    strategy: ExecutionStrategy,
) -> Result<Image<u16>, ParallelError>
where
    V: ImageView + Sync + ?Sized,
    S: Sampler,
{
    let num_workers = strategy.num_workers(new_size.height)?;
    resample_rows(new_size, src, sampler, num_workers)
}

fn resample_rows<V, S>(
    new_size: ImageSize,
    src: &V,
    sampler: &S,
    num_workers: usize,
) -> Result<Image<u16>, ParallelError>
where
    V: ImageView + Sync + ?Sized,
    S: Sampler,
{
    let src_size = src.bounds().size();
    let scale = ScaleFactors::new(src_size, new_size);

    log::debug!(
        "resampling {src_size} -> {new_size}, scale ({:.3}, {:.3}), {num_workers} workers",
        scale.x,
        scale.y,
    );

    let mut dst = Image::from_size_val(new_size, 0u16);
    parallel::par_iter_rows_sample(src, &mut dst, scale, sampler, num_workers)?;

    Ok(dst)
}

/// Resize an image after checking the sizes involved.
///
/// This is the entry point for callers that take sizes from user input:
/// it rejects empty target sizes and empty sources, then runs
/// [`resize_fast`] for [`InterpolationMode::Nearest`] or [`resize_quality`]
/// for [`InterpolationMode::Lanczos3`].
///
/// # Errors
///
/// * [`ResizeError::InvalidTargetSize`] if `new_size` has a zero dimension.
/// * [`ResizeError::EmptySource`] if the source bounds have a zero dimension.
///
/// # Example
///
/// ```
/// use resample_image::{Image, ImageSize};
/// use resample_imgproc::interpolation::InterpolationMode;
/// use resample_imgproc::resize::{resize, ResizeError};
///
/// let image = Image::<u8>::from_size_val([8, 8].into(), 255);
///
/// let icon = resize(&image, [4, 4].into(), InterpolationMode::Lanczos3)?;
/// assert_eq!(icon.size(), ImageSize { width: 4, height: 4 });
///
/// let res = resize(&image, [0, 4].into(), InterpolationMode::Nearest);
/// assert_eq!(res, Err(ResizeError::InvalidTargetSize(0, 4)));
/// # Ok::<(), ResizeError>(())
/// ```
pub fn resize<V>(
    src: &V,
    new_size: ImageSize,
    interpolation: InterpolationMode,
) -> Result<Image<u16>, ResizeError>
where
    V: ImageView + Sync + ?Sized,
{
    resize_with(src, new_size, interpolation, ExecutionStrategy::Auto)
}

/// Same as [`resize`], with the worker pool of the Lanczos-3 path sized by `strategy`.
///
/// The nearest neighbor path always runs on the calling thread.
///
/// # Errors
///
/// * [`ResizeError::InvalidTargetSize`] if `new_size` has a zero dimension.
/// * [`ResizeError::EmptySource`] if the source bounds have a zero dimension.
/// * [`ResizeError::Parallel`] if the strategy asks for zero workers or the
///   thread pool cannot be built.
pub fn resize_with<V>(
    src: &V,
    new_size: ImageSize,
    interpolation: InterpolationMode,
    strategy: ExecutionStrategy,
) -> Result<Image<u16>, ResizeError>
where
    V: ImageView + Sync + ?Sized,
{
    if new_size.is_empty() {
        return Err(ResizeError::InvalidTargetSize(
            new_size.width,
            new_size.height,
        ));
    }

    let src_size = src.bounds().size();
    if src_size.is_empty() {
        return Err(ResizeError::EmptySource(src_size.width, src_size.height));
    }

    let dst = match interpolation {
        InterpolationMode::Nearest => resize_fast(new_size, src),
        InterpolationMode::Lanczos3 => resize_quality_with(new_size, src, strategy)?,
    };

    Ok(dst)
}
