use crate::{Bounds, ImageError, ImageView, Rgba16};

/// A borrowed rectangular region of another image.
///
/// The region keeps the coordinates of its parent: a region starting at
/// `(2, 3)` reports bounds with `min_x == 2` and `min_y == 3`, and
/// `color_at(2, 3)` is the parent's pixel at `(2, 3)`. Pixels of the parent
/// outside the region are not visible through the view.
///
/// # Examples
///
/// ```
/// use resample_image::{Bounds, Image, ImageView, Rgba16, SubImage};
///
/// let image = Image::<u8>::from_fn([4, 4].into(), |x, y| {
///     Rgba16::new(x as u16, y as u16, 0, 65535)
/// });
///
/// let region = SubImage::new(&image, Bounds::new(1, 2, 2, 2)).unwrap();
///
/// assert_eq!(region.bounds().min_x, 1);
/// assert_eq!(region.color_at(1, 2), image.color_at(1, 2));
/// assert_eq!(region.color_at(0, 0), Rgba16::TRANSPARENT);
/// ```
#[derive(Debug)]
pub struct SubImage<'a, V: ?Sized> {
    parent: &'a V,
    bounds: Bounds,
}

impl<V: ?Sized> Clone for SubImage<'_, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<V: ?Sized> Copy for SubImage<'_, V> {}

impl<'a, V: ImageView + ?Sized> SubImage<'a, V> {
    /// Create a view of `bounds` inside `parent`.
    ///
    /// # Errors
    ///
    /// If `bounds` is not fully contained in the parent bounds, an error is returned.
    pub fn new(parent: &'a V, bounds: Bounds) -> Result<Self, ImageError> {
        let parent_bounds = parent.bounds();
        if !parent_bounds.contains_bounds(&bounds) {
            return Err(ImageError::RegionOutOfBounds(bounds, parent_bounds));
        }

        Ok(Self { parent, bounds })
    }

    /// The image the region was taken from.
    pub fn parent(&self) -> &'a V {
        self.parent
    }
}

impl<V: ImageView + ?Sized> ImageView for SubImage<'_, V> {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    fn color_at(&self, x: i64, y: i64) -> Rgba16 {
        if !self.bounds.contains(x, y) {
            return Rgba16::TRANSPARENT;
        }
        self.parent.color_at(x, y)
    }
}
