use crossbeam_channel::{Receiver, Sender};
use thiserror::Error;

use crate::interpolation::{Sampler, ScaleFactors};
use resample_image::{Image, ImageView, Rgba16, CHANNELS};

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how many workers process the rows of an image.
///
/// Whatever the strategy, the number of workers never exceeds the number of
/// rows to process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// One worker per available hardware thread.
    #[default]
    Auto,

    /// A single worker.
    ///
    /// Useful for debugging and as a reference to compare parallel runs against.
    Serial,

    /// Exactly `n` workers.
    Fixed(usize),
}

impl ExecutionStrategy {
    /// Number of workers to spawn for `rows` rows of work.
    ///
    /// # Errors
    ///
    /// Returns [`ParallelError::InvalidThreadCount`] for `Fixed(0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use resample_imgproc::parallel::ExecutionStrategy;
    ///
    /// assert_eq!(ExecutionStrategy::Fixed(8).num_workers(3), Ok(3));
    /// assert_eq!(ExecutionStrategy::Serial.num_workers(100), Ok(1));
    /// assert!(ExecutionStrategy::Fixed(0).num_workers(3).is_err());
    /// ```
    pub fn num_workers(&self, rows: usize) -> Result<usize, ParallelError> {
        match *self {
            ExecutionStrategy::Auto => Ok(available_workers(rows)),
            ExecutionStrategy::Serial => Ok(rows.min(1)),
            ExecutionStrategy::Fixed(n) => {
                if n == 0 {
                    return Err(ParallelError::InvalidThreadCount(n));
                }
                Ok(rows.min(n))
            }
        }
    }
}

/// Number of workers for `rows` rows: the available parallelism, capped by the row count.
pub fn available_workers(rows: usize) -> usize {
    let threads = match std::thread::available_parallelism() {
        Ok(n) => n.get(),
        Err(e) => {
            log::warn!("Failed to query available parallelism, using one worker: {e}");
            1
        }
    };
    rows.min(threads)
}

/// One destination row to sample.
#[derive(Debug, Clone, Copy)]
struct RowJob {
    row: usize,
    width: usize,
    scale: ScaleFactors,
}

/// The sampled colors of one destination row.
#[derive(Debug)]
struct RowResult {
    row: usize,
    pixels: Vec<Rgba16>,
}

/// Sample every destination row with `sampler` on the calling thread.
///
/// Produces the same output as [`par_iter_rows_sample`] for any worker count.
pub fn iter_rows_sample<V, S>(src: &V, dst: &mut Image<u16>, scale: ScaleFactors, sampler: &S)
where
    V: ImageView + ?Sized,
    S: Sampler,
{
    let width = dst.width();
    let stride = width * CHANNELS;
    if stride == 0 {
        return;
    }

    dst.as_slice_mut()
        .chunks_exact_mut(stride)
        .enumerate()
        .for_each(|(row, dst_row)| {
            let job = RowJob { row, width, scale };
            write_row(dst_row, &sample_row(src, sampler, &job));
        });
}

/// Sample every destination row with `sampler` on a pool of `num_workers` threads.
///
/// One job per row of `dst` is queued before the workers start; the workers
/// pull jobs from the shared queue and push the sampled rows to a result
/// queue. The calling thread is the only writer of `dst`: it drains the
/// results and copies each row to its index, so the output does not depend on
/// the order in which the workers finish. The function returns once every
/// worker has exited and every row has been written.
///
/// A single worker runs on the calling thread without building a pool.
///
/// # Arguments
///
/// * `src` - The source image, shared read-only by the workers.
/// * `dst` - The destination image, its size defines the rows and columns to sample.
/// * `scale` - The scale factors between source and destination.
/// * `sampler` - The interpolation used for every pixel.
/// * `num_workers` - The number of worker threads, capped by the number of rows.
///
/// # Errors
///
/// Returns [`ParallelError::BuildError`] if the thread pool cannot be built.
pub fn par_iter_rows_sample<V, S>(
    src: &V,
    dst: &mut Image<u16>,
    scale: ScaleFactors,
    sampler: &S,
    num_workers: usize,
) -> Result<(), ParallelError>
where
    V: ImageView + Sync + ?Sized,
    S: Sampler,
{
    let (width, height) = (dst.width(), dst.height());
    let num_workers = num_workers.min(height);
    match num_workers {
        0 => return Ok(()),
        1 => {
            iter_rows_sample(src, dst, scale, sampler);
            return Ok(());
        }
        _ => {}
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(num_workers)
        .build()
        .map_err(|e| ParallelError::BuildError(e.to_string()))?;

    // both queues can hold every row, so neither side ever blocks on a full queue
    let (job_tx, job_rx) = crossbeam_channel::bounded::<RowJob>(height);
    let (result_tx, result_rx) = crossbeam_channel::bounded::<RowResult>(height);

    // all rows are queued before any worker can see the queue closed; the
    // receiver is alive and has room for every row, so sending cannot fail
    for row in 0..height {
        let _ = job_tx.send(RowJob { row, width, scale });
    }
    drop(job_tx);

    let stride = width * CHANNELS;
    let dst_data = dst.as_slice_mut();

    // the scope body runs on the calling thread, the workers on the pool
    pool.in_place_scope(|s| {
        for worker_id in 0..num_workers {
            let jobs = job_rx.clone();
            let results = result_tx.clone();
            s.spawn(move |_| row_worker(worker_id, src, sampler, jobs, results));
        }

        // the result queue closes once the last worker drops its sender
        drop(result_tx);

        for result in result_rx.iter() {
            let dst_row = &mut dst_data[result.row * stride..(result.row + 1) * stride];
            write_row(dst_row, &result.pixels);
        }
    });

    Ok(())
}

fn sample_row<V, S>(src: &V, sampler: &S, job: &RowJob) -> Vec<Rgba16>
where
    V: ImageView + ?Sized,
    S: Sampler,
{
    (0..job.width)
        .map(|x| sampler.sample(src, x, job.row, &job.scale))
        .collect()
}

fn write_row(dst_row: &mut [u16], pixels: &[Rgba16]) {
    dst_row
        .chunks_exact_mut(CHANNELS)
        .zip(pixels.iter())
        .for_each(|(pixel, color)| color.write_pixel(pixel));
}

fn row_worker<V, S>(
    worker_id: usize,
    src: &V,
    sampler: &S,
    jobs: Receiver<RowJob>,
    results: Sender<RowResult>,
) where
    V: ImageView + ?Sized,
    S: Sampler,
{
    let mut processed = 0usize;

    for job in jobs.iter() {
        let pixels = sample_row(src, sampler, &job);
        // the aggregator drains until every sender is dropped, sending cannot fail
        let _ = results.send(RowResult {
            row: job.row,
            pixels,
        });
        processed += 1;
    }

    log::trace!("worker {worker_id} done after {processed} rows");
}
