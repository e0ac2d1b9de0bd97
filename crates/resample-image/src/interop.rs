use crate::{Image, ImageDtype, ImageError, ImageSize, CHANNELS};
use ::image::{ImageBuffer, Pixel, Rgba};

/// An `image` crate RGBA buffer with channels of type `T`.
pub type RgbaBuffer<T> = ImageBuffer<Rgba<T>, Vec<T>>;

/// Build an image from an `image` crate RGBA buffer.
impl<T> From<&RgbaBuffer<T>> for Image<T>
where
    T: ImageDtype,
    Rgba<T>: Pixel<Subpixel = T>,
{
    fn from(buffer: &RgbaBuffer<T>) -> Self {
        let size = ImageSize {
            width: buffer.width() as usize,
            height: buffer.height() as usize,
        };

        // the raw container may hold more samples than the image covers
        let mut image = Image::from_size_val(size, T::default());
        image
            .as_slice_mut()
            .copy_from_slice(&buffer.as_raw()[..size.area() * CHANNELS]);
        image
    }
}

/// Convert an image into an `image` crate RGBA buffer, ready to be encoded.
///
/// The origin of the image is dropped: the buffer always starts at `(0, 0)`.
impl<T> TryFrom<Image<T>> for RgbaBuffer<T>
where
    T: ImageDtype,
    Rgba<T>: Pixel<Subpixel = T>,
{
    type Error = ImageError;

    fn try_from(image: Image<T>) -> Result<Self, Self::Error> {
        let (width, height) = (image.width(), image.height());
        let len = image.as_slice().len();

        ImageBuffer::from_raw(width as u32, height as u32, image.into_vec())
            .ok_or(ImageError::InvalidChannelShape(len, width * height * 4))
    }
}
