#![deny(missing_docs)]
//! Image types and traits for resampling RGBA pixel grids

/// image size and pixel bounds.
pub mod bounds;

/// 16-bit RGBA color type.
pub mod color;

/// Error types for the image module.
pub mod error;

/// image representation for resampling purposes.
pub mod image;

/// borrowed rectangular regions of an image.
pub mod view;

/// conversions from and to the `image` crate buffers.
#[cfg(feature = "image")]
pub mod interop;

pub use crate::bounds::{Bounds, ImageSize};
pub use crate::color::Rgba16;
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageView, CHANNELS};
pub use crate::view::SubImage;
