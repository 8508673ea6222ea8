//! Parallel map over spatial blocks.

use ndarray::{Array3, ArrayView3, s};
use rayon::prelude::*;
use tracing::debug;

use crate::config::GridConfig;
use crate::error::GridError;
use crate::window::{Window, partition};

/// Applies `kernel` to every spatial block of `input` in parallel and
/// reassembles the results.
///
/// `input` has axes `(lead, row, col)` where `lead` is time or parameter. It
/// is cut into windows of `chunk_rows x chunk_cols` along the spatial axes
/// only, so each kernel call sees the whole leading axis. Each call must
/// return an `(out_len, window_rows, window_cols)` block, which is written
/// back at the window's position. The kernel never sees global coordinates.
///
/// Blocks run on a dedicated pool of `n_workers` threads when set, otherwise
/// on the global rayon pool. The result does not depend on the chunk size or
/// worker count.
///
/// # Errors
///
/// Returns [`GridError`] for an invalid config, a pool that cannot be built,
/// a kernel error, or a kernel block of the wrong shape.
///
/// # Example
///
/// ```
/// use eva_grid::{GridConfig, GridError, map_blocks};
/// use ndarray::{Array3, Axis};
///
/// let input = Array3::<f64>::ones((5, 4, 4));
/// let config = GridConfig::new().with_chunks(3, 3);
/// let sums = map_blocks(input.view(), 1, &config, |block| {
///     Ok::<_, GridError>(block.sum_axis(Axis(0)).insert_axis(Axis(0)))
/// })
/// .unwrap();
/// assert!(sums.iter().all(|&v| v == 5.0));
/// ```
#[tracing::instrument(skip_all, fields(shape = ?input.dim(), out_len = out_len))]
pub fn map_blocks<F, E>(
    input: ArrayView3<'_, f64>,
    out_len: usize,
    config: &GridConfig,
    kernel: F,
) -> Result<Array3<f64>, GridError>
where
    F: Fn(ArrayView3<'_, f64>) -> Result<Array3<f64>, E> + Sync,
    E: Send,
    GridError: From<E>,
{
    config.validate()?;

    let (_, n_rows, n_cols) = input.dim();
    let windows = partition(n_rows, n_cols, config.chunk_rows(), config.chunk_cols());
    debug!(n_windows = windows.len(), "dispatching blocks");

    let run = || {
        windows
            .par_iter()
            .map(|w| kernel(input.slice(s![.., w.rows(), w.cols()])).map(|out| (*w, out)))
            .collect::<Result<Vec<(Window, Array3<f64>)>, E>>()
    };
    let blocks = match config.n_workers() {
        Some(n) => rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()
            .map_err(|e| GridError::ThreadPool {
                reason: e.to_string(),
            })?
            .install(run),
        None => run(),
    }?;

    let mut out = Array3::from_elem((out_len, n_rows, n_cols), f64::NAN);
    for (w, block) in blocks {
        let expected = (out_len, w.n_rows(), w.n_cols());
        if block.dim() != expected {
            return Err(GridError::BlockShape {
                expected,
                got: block.dim(),
            });
        }
        out.slice_mut(s![.., w.rows(), w.cols()]).assign(&block);
    }
    Ok(out)
}
