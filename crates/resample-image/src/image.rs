use crate::{Bounds, ImageError, ImageSize, Rgba16};

/// Number of interleaved channels of every image: red, green, blue and alpha.
pub const CHANNELS: usize = 4;

/// Trait for image data types.
///
/// Send and Sync are required to share a source image between workers.
pub trait ImageDtype: Copy + Default + Send + Sync + 'static {
    /// Widen the channel value to 16 bits.
    fn to_u16(self) -> u16;

    /// Narrow a 16-bit channel value to the image data type.
    fn from_u16(x: u16) -> Self;
}

impl ImageDtype for u8 {
    fn to_u16(self) -> u16 {
        // replicate the byte so that 0xff maps to 0xffff
        self as u16 * 257
    }

    fn from_u16(x: u16) -> Self {
        (x >> 8) as u8
    }
}

impl ImageDtype for u16 {
    fn to_u16(self) -> u16 {
        self
    }

    fn from_u16(x: u16) -> Self {
        x
    }
}

/// Read access to a rectangular grid of pixels.
///
/// This is the only capability the resamplers need from a source: the pixel
/// rectangle it covers and a color for each pixel inside it.
pub trait ImageView {
    /// The rectangle of valid pixel coordinates.
    fn bounds(&self) -> Bounds;

    /// The color at `(x, y)`.
    ///
    /// Coordinates outside [`ImageView::bounds`] return
    /// [`Rgba16::TRANSPARENT`].
    fn color_at(&self, x: i64, y: i64) -> Rgba16;
}

impl<V: ImageView + ?Sized> ImageView for &V {
    fn bounds(&self) -> Bounds {
        (**self).bounds()
    }

    fn color_at(&self, x: i64, y: i64) -> Rgba16 {
        (**self).color_at(x, y)
    }
}

/// Represents an RGBA image with pixel data.
///
/// The pixels are stored row-major and interleaved as `[r, g, b, a]`. The
/// storage depth is given by `T`; colors are always exchanged as [`Rgba16`].
#[derive(Clone, Debug, PartialEq)]
pub struct Image<T> {
    bounds: Bounds,
    data: Vec<T>,
}

impl<T: ImageDtype> Image<T> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The interleaved RGBA pixel data of the image.
    ///
    /// # Errors
    ///
    /// If the size has a zero dimension or the length of the pixel data does not
    /// match the image size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8>::new(
    ///    ImageSize {
    ///       width: 10,
    ///       height: 20,
    ///    },
    ///    vec![0u8; 10 * 20 * 4],
    /// ).unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 4);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.is_empty() {
            return Err(ImageError::InvalidImageSize(size.width, size.height));
        }

        if data.len() != size.area() * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.area() * CHANNELS,
            ));
        }

        Ok(Self {
            bounds: Bounds::from_size(size),
            data,
        })
    }

    /// Create a new image with every channel of every pixel set to `val`.
    pub fn from_size_val(size: ImageSize, val: T) -> Self {
        Self {
            bounds: Bounds::from_size(size),
            data: vec![val; size.area() * CHANNELS],
        }
    }

    /// Create a new image filled with a single color.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_image::{Image, ImageView, Rgba16};
    ///
    /// let red = Rgba16::new(65535, 0, 0, 65535);
    /// let image = Image::<u16>::from_size_color([2, 2].into(), red);
    ///
    /// assert_eq!(image.color_at(1, 1), red);
    /// ```
    pub fn from_size_color(size: ImageSize, color: Rgba16) -> Self {
        Self::from_fn(size, |_, _| color)
    }

    /// Create a new image computing every pixel from its `(x, y)` position.
    pub fn from_fn(size: ImageSize, mut f: impl FnMut(usize, usize) -> Rgba16) -> Self {
        let mut image = Self::from_size_val(size, T::default());
        if size.width == 0 {
            return image;
        }

        image
            .data
            .chunks_exact_mut(size.width * CHANNELS)
            .enumerate()
            .for_each(|(y, row)| {
                row.chunks_exact_mut(CHANNELS)
                    .enumerate()
                    .for_each(|(x, pixel)| f(x, y).write_pixel(pixel));
            });

        image
    }

    /// Move the image so that its top-left pixel is addressed as `(min_x, min_y)`.
    pub fn with_origin(mut self, min_x: i64, min_y: i64) -> Self {
        self.bounds = self.bounds.with_origin(min_x, min_y);
        self
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.bounds.size()
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.bounds.width()
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.bounds.height()
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// The raw interleaved pixel data.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The raw interleaved pixel data, mutable.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the image and return its raw pixel data.
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Set the pixel at column `x` and row `y`, counted from the top-left pixel.
    ///
    /// # Errors
    ///
    /// If the pixel is outside the image, an error is returned.
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgba16) -> Result<(), ImageError> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(ImageError::PixelIndexOutOfBounds(x, y, width, height));
        }

        let offset = (y * width + x) * CHANNELS;
        color.write_pixel(&mut self.data[offset..offset + CHANNELS]);

        Ok(())
    }

    /// Get the pixel at column `x` and row `y`, counted from the top-left pixel.
    ///
    /// # Errors
    ///
    /// If the pixel is outside the image, an error is returned.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Rgba16, ImageError> {
        let (width, height) = (self.width(), self.height());
        if x >= width || y >= height {
            return Err(ImageError::PixelIndexOutOfBounds(x, y, width, height));
        }

        let offset = (y * width + x) * CHANNELS;
        Ok(Rgba16::from_pixel(&self.data[offset..offset + CHANNELS]))
    }

    /// Convert the pixel data to a different storage depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_image::Image;
    ///
    /// let image = Image::<u8>::new([1, 1].into(), vec![0, 1, 128, 255]).unwrap();
    /// let image_u16 = image.cast::<u16>();
    ///
    /// assert_eq!(image_u16.as_slice(), &[0, 257, 32896, 65535]);
    /// ```
    pub fn cast<U: ImageDtype>(&self) -> Image<U> {
        Image {
            bounds: self.bounds,
            data: self
                .data
                .iter()
                .map(|&x| U::from_u16(x.to_u16()))
                .collect(),
        }
    }
}

impl<T: ImageDtype> ImageView for Image<T> {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn color_at(&self, x: i64, y: i64) -> Rgba16 {
        if !self.bounds.contains(x, y) {
            return Rgba16::TRANSPARENT;
        }

        let col = (x - self.bounds.min_x) as usize;
        let row = (y - self.bounds.min_y) as usize;
        let offset = (row * self.width() + col) * CHANNELS;

        Rgba16::from_pixel(&self.data[offset..offset + CHANNELS])
    }
}
