use super::grid::{map_to_source, ScaleFactors};
use super::lanczos::lanczos3_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use resample_image::{ImageView, Rgba16};

/// Interpolation mode for the resize operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InterpolationMode {
    /// Nearest neighbor interpolation
    Nearest,
    /// Anti-aliased Lanczos-3 interpolation
    #[default]
    Lanczos3,
}

impl std::str::FromStr for InterpolationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" | "fast" => Ok(Self::Nearest),
            "lanczos3" | "lanczos" | "quality" => Ok(Self::Lanczos3),
            other => Err(format!(
                "unknown interpolation mode '{other}', expected 'nearest' or 'lanczos3'"
            )),
        }
    }
}

/// Computes the color of one destination pixel from the source image.
///
/// The row scheduler only talks to this trait, so it does not need to know
/// which kernel is in use. Each kernel maps the destination pixel to the
/// source itself.
pub trait Sampler: Send + Sync {
    /// Sample `image` for the destination pixel `(x, y)`.
    ///
    /// # Arguments
    ///
    /// * `image` - The source image.
    /// * `x` - The destination column.
    /// * `y` - The destination row.
    /// * `scale` - The scale factors between source and destination.
    fn sample<V: ImageView + ?Sized>(
        &self,
        image: &V,
        x: usize,
        y: usize,
        scale: &ScaleFactors,
    ) -> Rgba16;
}

impl Sampler for InterpolationMode {
    #[inline]
    fn sample<V: ImageView + ?Sized>(
        &self,
        image: &V,
        x: usize,
        y: usize,
        scale: &ScaleFactors,
    ) -> Rgba16 {
        match self {
            InterpolationMode::Nearest => nearest_neighbor_interpolation(image, x, y, scale),
            InterpolationMode::Lanczos3 => {
                let (u, v) = map_to_source(x, y, &image.bounds(), scale);
                lanczos3_interpolation(image, u, v, scale)
            }
        }
    }
}
