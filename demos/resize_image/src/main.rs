use argh::FromArgs;
use std::path::PathBuf;

use resample::image::{interop::RgbaBuffer, Image};
use resample::imgproc::{interpolation::InterpolationMode, parallel::ExecutionStrategy, resize};

#[derive(FromArgs)]
/// Resize an image and save it as PNG
struct Args {
    /// path to an input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path to the output PNG image
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// width of the output image
    #[argh(option, default = "64")]
    width: usize,

    /// height of the output image
    #[argh(option, default = "64")]
    height: usize,

    /// interpolation mode: nearest or lanczos3
    #[argh(option, default = "InterpolationMode::Lanczos3")]
    mode: InterpolationMode,

    /// number of worker threads for lanczos3, defaults to all cores
    #[argh(option)]
    threads: Option<usize>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // read the image and expose it with 16-bit channels
    let rgba = image::open(&args.input)?.to_rgba16();
    let src = Image::from(&rgba);
    log::info!("Loaded {} ({})", args.input.display(), src.size());

    let new_size = [args.width, args.height].into();

    let strategy = match args.threads {
        Some(n) => ExecutionStrategy::Fixed(n),
        None => ExecutionStrategy::Auto,
    };

    let resized = resize::resize_with(&src, new_size, args.mode, strategy)?;

    // encode as 8-bit RGBA
    let out = RgbaBuffer::<u8>::try_from(resized.cast::<u8>())?;
    out.save_with_format(&args.output, image::ImageFormat::Png)?;

    log::info!("Resized image saved to {}", args.output.display());

    Ok(())
}
