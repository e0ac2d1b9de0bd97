/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use resample_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl ImageSize {
    /// Number of pixels covered by the size.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Whether the size covers no pixel at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// The rectangle of pixel coordinates an image is addressable by.
///
/// The rectangle is half-open: a pixel `(x, y)` is inside when
/// `min_x <= x < max_x` and `min_y <= y < max_y`. The origin does not need to
/// be zero, e.g. for a region cropped out of a larger image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    /// Left-most column, inclusive.
    pub min_x: i64,
    /// Top-most row, inclusive.
    pub min_y: i64,
    /// Right-most column, exclusive.
    pub max_x: i64,
    /// Bottom-most row, exclusive.
    pub max_y: i64,
}

impl Bounds {
    /// Create the bounds from an origin and an extent.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_image::Bounds;
    ///
    /// let bounds = Bounds::new(2, 3, 4, 5);
    ///
    /// assert_eq!(bounds.max_x, 6);
    /// assert_eq!(bounds.max_y, 8);
    /// assert_eq!(bounds.width(), 4);
    /// assert_eq!(bounds.height(), 5);
    /// ```
    pub fn new(min_x: i64, min_y: i64, width: usize, height: usize) -> Self {
        Self {
            min_x,
            min_y,
            max_x: min_x + width as i64,
            max_y: min_y + height as i64,
        }
    }

    /// Create bounds anchored at the origin `(0, 0)`.
    pub fn from_size(size: ImageSize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Width of the bounds, `max_x - min_x`.
    pub fn width(&self) -> usize {
        (self.max_x - self.min_x).max(0) as usize
    }

    /// Height of the bounds, `max_y - min_y`.
    pub fn height(&self) -> usize {
        (self.max_y - self.min_y).max(0) as usize
    }

    /// The extent of the bounds.
    pub fn size(&self) -> ImageSize {
        ImageSize {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Whether the bounds contain no pixel.
    pub fn is_empty(&self) -> bool {
        self.size().is_empty()
    }

    /// Whether the pixel `(x, y)` lies inside the bounds.
    #[inline]
    pub fn contains(&self, x: i64, y: i64) -> bool {
        x >= self.min_x && x < self.max_x && y >= self.min_y && y < self.max_y
    }

    /// Whether `other` lies completely inside the bounds.
    pub fn contains_bounds(&self, other: &Bounds) -> bool {
        other.min_x >= self.min_x
            && other.min_y >= self.min_y
            && other.max_x <= self.max_x
            && other.max_y <= self.max_y
    }

    /// Shift the bounds so that its origin lands on `(min_x, min_y)`.
    pub fn with_origin(&self, min_x: i64, min_y: i64) -> Self {
        Self::new(min_x, min_y, self.width(), self.height())
    }
}

impl std::fmt::Display for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}, {})-({}, {})",
            self.min_x, self.min_y, self.max_x, self.max_y
        )
    }
}
