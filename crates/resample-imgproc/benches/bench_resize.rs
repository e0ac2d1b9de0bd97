use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use resample_image::{Image, ImageSize, Rgba16};
use resample_imgproc::{interpolation::InterpolationMode, parallel::ExecutionStrategy, resize};

fn gradient(width: usize, height: usize) -> Image<u8> {
    Image::from_fn([width, height].into(), |x, y| {
        Rgba16::from_rgba8((x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8, 255)
    })
}

fn bench_resize(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resize");

    for (width, height) in [(256, 224), (512, 448), (1024, 896)].iter() {
        group.throughput(criterion::Throughput::Elements((*width * *height) as u64));

        let parameter_string = format!("{}x{}", width, height);

        let image = gradient(*width, *height);
        let new_size = ImageSize {
            width: width / 4,
            height: height / 4,
        };

        group.bench_with_input(
            BenchmarkId::new("nearest", &parameter_string),
            &image,
            |b, i| b.iter(|| resize::resize_fast(black_box(new_size), black_box(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("lanczos3_serial", &parameter_string),
            &image,
            |b, i| {
                b.iter(|| {
                    resize::resize_quality_with(
                        black_box(new_size),
                        black_box(i),
                        ExecutionStrategy::Serial,
                    )
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("lanczos3_par", &parameter_string),
            &image,
            |b, i| b.iter(|| resize::resize_quality(black_box(new_size), black_box(i))),
        );

        group.bench_with_input(
            BenchmarkId::new("nearest_par", &parameter_string),
            &image,
            |b, i| {
                b.iter(|| {
                    resize::resize_with_sampler(
                        black_box(new_size),
                        black_box(i),
                        &InterpolationMode::Nearest,
                        ExecutionStrategy::Auto,
                    )
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_resize);
criterion_main!(benches);
