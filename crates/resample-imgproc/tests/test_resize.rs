use rand::{rngs::StdRng, Rng, SeedableRng};
use resample_image::{Bounds, Image, ImageSize, ImageView, Rgba16, SubImage};
use resample_imgproc::interpolation::InterpolationMode;
use resample_imgproc::parallel::ExecutionStrategy;
use resample_imgproc::resize::{
    resize, resize_fast, resize_quality, resize_quality_with, resize_with_sampler,
};

const RED: Rgba16 = Rgba16::new(u16::MAX, 0, 0, u16::MAX);

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_image(size: ImageSize, seed: u64) -> Image<u16> {
    let mut rng = StdRng::seed_from_u64(seed);
    Image::from_fn(size, |_, _| {
        Rgba16::new(rng.random(), rng.random(), rng.random(), rng.random())
    })
}

/// Integer hash noise, every channel spread over the full 16-bit range.
fn hash_noise(size: ImageSize) -> Image<u16> {
    let hash = |x: usize, y: usize, c: u32| -> u16 {
        let mut h = (x as u32).wrapping_mul(73856093)
            ^ (y as u32).wrapping_mul(19349663)
            ^ c.wrapping_mul(83492791);
        h ^= h >> 13;
        h = h.wrapping_mul(0x5bd1e995);
        h ^= h >> 15;
        h as u16
    };
    Image::from_fn(size, |x, y| {
        Rgba16::new(hash(x, y, 0), hash(x, y, 1), hash(x, y, 2), hash(x, y, 3))
    })
}

fn checkerboard(size: usize) -> Image<u8> {
    Image::from_fn([size, size].into(), |x, y| {
        if (x + y) % 2 == 0 {
            Rgba16::WHITE
        } else {
            Rgba16::BLACK
        }
    })
}

fn assert_close(a: Rgba16, b: Rgba16, tol: u16) {
    for (ca, cb) in a.channels().iter().zip(b.channels().iter()) {
        assert!(ca.abs_diff(*cb) <= tol, "{a:?} vs {b:?}");
    }
}

#[test]
fn test_output_has_requested_size() {
    init_logger();
    let image = random_image([17, 9].into(), 0);

    for (w, h) in [(1, 1), (17, 9), (3, 40), (50, 2), (8, 8)] {
        let size = ImageSize {
            width: w,
            height: h,
        };

        let fast = resize_fast(size, &image);
        assert_eq!(fast.bounds().size(), size);
        assert_eq!(fast.as_slice().len(), w * h * 4);

        let quality = resize_quality(size, &image);
        assert_eq!(quality.bounds().size(), size);
        assert_eq!(quality.as_slice().len(), w * h * 4);
    }
}

#[test]
fn test_identity_fast_resize_reproduces_source() {
    let image = random_image([23, 31].into(), 1);
    assert_eq!(resize_fast(image.size(), &image), image);

    // widened 8-bit sources come back at 16 bits with the same values
    let image_u8 = image.cast::<u8>();
    assert_eq!(resize_fast(image_u8.size(), &image_u8), image_u8.cast::<u16>());
}

#[test]
fn test_solid_red_downscale() {
    init_logger();
    let image = Image::<u8>::from_size_color([100, 100].into(), RED);

    let fast = resize_fast([50, 50].into(), &image);
    assert_eq!(fast.size(), [50, 50].into());
    assert!(fast.as_slice().chunks_exact(4).all(|px| px == RED.channels()));

    let quality = resize_quality([50, 50].into(), &image);
    assert_eq!(quality.size(), [50, 50].into());
    for y in 0..50 {
        for x in 0..50 {
            assert_close(quality.color_at(x, y), RED, 1);
        }
    }
}

#[test]
fn test_checkerboard_to_single_pixel() {
    let image = checkerboard(10);

    let quality = resize_quality([1, 1].into(), &image);
    let gray = quality.color_at(0, 0);
    // the weighted average of an equal number of black and white pixels
    assert!(gray.r.abs_diff(u16::MAX / 2) <= 2, "got {gray:?}");
    assert_eq!(gray.r, gray.g);
    assert_eq!(gray.g, gray.b);

    let fast = resize_fast([1, 1].into(), &image);
    let picked = fast.color_at(0, 0);
    assert!(picked == Rgba16::WHITE || picked == Rgba16::BLACK);
    assert_ne!(picked, gray);
}

#[test]
fn test_quality_channels_in_range() {
    // noise rings on both sides, the overshoot must saturate instead of wrapping
    let image = hash_noise([40, 40].into());
    let resized = resize_quality([97, 97].into(), &image);
    let samples = resized.as_slice();
    let saturated_low = samples.iter().filter(|&&v| v == 0).count();
    let saturated_high = samples.iter().filter(|&&v| v == u16::MAX).count();
    assert!(saturated_low > 10, "{saturated_low} samples clamped to 0");
    assert!(saturated_high > 10, "{saturated_high} samples clamped to 65535");

    // a hard edge upscaled overshoots on both sides and must saturate
    let edge = Image::<u16>::from_fn([8, 8].into(), |x, _| {
        if x < 4 {
            Rgba16::BLACK
        } else {
            Rgba16::WHITE
        }
    });
    let resized = resize_quality([64, 8].into(), &edge);
    let row: Vec<u16> = (0..64).map(|x| resized.color_at(x, 4).r).collect();
    assert_eq!(row.iter().copied().min(), Some(0));
    assert_eq!(row.iter().copied().max(), Some(u16::MAX));
}

#[test]
fn test_single_pixel_upscale_keeps_color() {
    let color = Rgba16::new(1000, 2000, 3000, 4000);
    let image = Image::<u16>::from_size_color([1, 1].into(), color);

    // only one source pixel is ever in the window, normalization must restore it
    let resized = resize_quality([50, 50].into(), &image);
    for y in 0..50 {
        for x in 0..50 {
            assert_close(resized.color_at(x, y), color, 1);
        }
    }
}

#[test]
fn test_nearest_pool_matches_fast_path_for_any_ratio() {
    for src_width in 1..=40 {
        let image = Image::<u16>::from_fn([src_width, 3].into(), |x, y| {
            Rgba16::new(x as u16, y as u16, 0, u16::MAX)
        });

        for dst_width in 1..=40 {
            let new_size = ImageSize {
                width: dst_width,
                height: 7,
            };
            let pooled = resize_with_sampler(
                new_size,
                &image,
                &InterpolationMode::Nearest,
                ExecutionStrategy::Fixed(2),
            )
            .unwrap();
            assert_eq!(
                pooled,
                resize_fast(new_size, &image),
                "{src_width} -> {dst_width} columns"
            );
        }
    }
}

#[test]
fn test_quality_is_deterministic_across_workers() {
    let image = random_image([64, 48].into(), 3);
    let new_size = ImageSize {
        width: 29,
        height: 19,
    };

    let reference = resize_quality_with(new_size, &image, ExecutionStrategy::Serial).unwrap();
    for strategy in [
        ExecutionStrategy::Fixed(2),
        ExecutionStrategy::Fixed(7),
        ExecutionStrategy::Fixed(19),
        ExecutionStrategy::Fixed(100),
        ExecutionStrategy::Auto,
    ] {
        let resized = resize_quality_with(new_size, &image, strategy).unwrap();
        assert_eq!(resized, reference, "{strategy:?}");
    }
}

#[test]
fn test_large_downscale() {
    init_logger();
    let image = Image::<u8>::from_fn([1000, 1000].into(), |x, y| {
        Rgba16::from_rgba8((x % 256) as u8, (y % 256) as u8, 128, 255)
    });

    let resized = resize_quality([10, 10].into(), &image);
    assert_eq!(resized.size(), [10, 10].into());

    // every pixel was written: the opaque source gives opaque output everywhere
    for y in 0..10 {
        for x in 0..10 {
            let color = resized.color_at(x, y);
            assert!(color.a >= u16::MAX - 1, "({x}, {y}) = {color:?}");
            assert!(color.b.abs_diff(128 * 257) <= 1);
        }
    }
}

#[test]
fn test_upscale_keeps_constant_image() {
    let color = Rgba16::new(1000, 20000, 40000, 50000);
    let image = Image::<u16>::from_size_color([3, 5].into(), color);

    let resized = resize_quality([30, 50].into(), &image);
    for y in 0..50 {
        for x in 0..30 {
            assert_close(resized.color_at(x, y), color, 1);
        }
    }
}

#[test]
fn test_resize_sub_image_with_origin() {
    // the left half is red, the right half is blue; only the right half is resized
    let image = Image::<u8>::from_fn([20, 10].into(), |x, _| {
        if x < 10 {
            RED
        } else {
            Rgba16::new(0, 0, u16::MAX, u16::MAX)
        }
    });
    let region = SubImage::new(&image, Bounds::new(10, 0, 10, 10)).unwrap();

    for mode in [InterpolationMode::Nearest, InterpolationMode::Lanczos3] {
        let resized = resize(&region, [5, 5].into(), mode).unwrap();
        for y in 0..5 {
            for x in 0..5 {
                let color = resized.color_at(x, y);
                assert_eq!(color.r, 0, "{mode:?} leaked red at ({x}, {y})");
                assert!(color.b >= u16::MAX - 1);
            }
        }
    }
}
