use crate::Bounds;

/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the pixel index is out of bounds.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the image has no pixels.
    #[error("Invalid image size ({0}x{1}), width and height must be > 0")]
    InvalidImageSize(usize, usize),

    /// Error when a region is not fully contained in the parent bounds.
    #[error("Region {0} is not contained in {1}")]
    RegionOutOfBounds(Bounds, Bounds),
}
