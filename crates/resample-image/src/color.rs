use crate::image::{ImageDtype, CHANNELS};

/// A non-alpha-premultiplied color with 16 bits per channel.
///
/// Every source image exposes its pixels through this type regardless of the
/// storage depth, and every resampled image is produced at this precision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba16 {
    /// Red channel.
    pub r: u16,
    /// Green channel.
    pub g: u16,
    /// Blue channel.
    pub b: u16,
    /// Alpha channel.
    pub a: u16,
}

impl Rgba16 {
    /// Fully transparent black, returned for pixels outside an image.
    pub const TRANSPARENT: Rgba16 = Rgba16::new(0, 0, 0, 0);

    /// Opaque black.
    pub const BLACK: Rgba16 = Rgba16::new(0, 0, 0, u16::MAX);

    /// Opaque white.
    pub const WHITE: Rgba16 = Rgba16::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX);

    /// Create a color from its four channels.
    pub const fn new(r: u16, g: u16, b: u16, a: u16) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit channels, widening each byte to 16 bits.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_image::Rgba16;
    ///
    /// let red = Rgba16::from_rgba8(255, 0, 0, 255);
    /// assert_eq!(red, Rgba16::new(65535, 0, 0, 65535));
    /// ```
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_pixel(&[r, g, b, a])
    }

    /// The channels in `[r, g, b, a]` order.
    pub fn channels(&self) -> [u16; CHANNELS] {
        [self.r, self.g, self.b, self.a]
    }

    /// Read a color from one RGBA pixel of any storage depth.
    #[inline]
    pub fn from_pixel<T: ImageDtype>(pixel: &[T]) -> Self {
        Self {
            r: pixel[0].to_u16(),
            g: pixel[1].to_u16(),
            b: pixel[2].to_u16(),
            a: pixel[3].to_u16(),
        }
    }

    /// Write the color into one RGBA pixel of any storage depth.
    #[inline]
    pub fn write_pixel<T: ImageDtype>(&self, pixel: &mut [T]) {
        for (dst, &c) in pixel.iter_mut().zip(self.channels().iter()) {
            *dst = T::from_u16(c);
        }
    }
}

impl From<[u16; CHANNELS]> for Rgba16 {
    fn from(c: [u16; CHANNELS]) -> Self {
        Self::new(c[0], c[1], c[2], c[3])
    }
}
