//! Configuration for local block dispatch.

use crate::error::GridError;

/// How a grid is cut into spatial blocks and how many threads process them.
///
/// Blocks always span the full leading (time or parameter) axis; only the
/// row and column axes are chunked.
///
/// # Example
///
/// ```
/// use eva_grid::GridConfig;
///
/// let config = GridConfig::new().with_chunks(50, 50).with_n_workers(Some(4));
/// assert_eq!(config.chunk_rows(), 50);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    chunk_rows: usize,
    chunk_cols: usize,
    n_workers: Option<usize>,
}

impl GridConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: 25 x 25 spatial chunks, `n_workers = None` (the global rayon
    /// pool).
    pub fn new() -> Self {
        Self {
            chunk_rows: 25,
            chunk_cols: 25,
            n_workers: None,
        }
    }

    /// Sets the spatial chunk size.
    pub fn with_chunks(mut self, rows: usize, cols: usize) -> Self {
        self.chunk_rows = rows;
        self.chunk_cols = cols;
        self
    }

    /// Sets the number of worker threads. `None` uses the global pool.
    pub fn with_n_workers(mut self, n: Option<usize>) -> Self {
        self.n_workers = n;
        self
    }

    /// Rows per chunk.
    pub fn chunk_rows(&self) -> usize {
        self.chunk_rows
    }

    /// Columns per chunk.
    pub fn chunk_cols(&self) -> usize {
        self.chunk_cols
    }

    /// Worker thread count, if a dedicated pool is requested.
    pub fn n_workers(&self) -> Option<usize> {
        self.n_workers
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidConfig`] for a zero chunk size or a zero
    /// worker count.
    pub fn validate(&self) -> Result<(), GridError> {
        if self.chunk_rows == 0 || self.chunk_cols == 0 {
            return Err(GridError::InvalidConfig {
                reason: format!(
                    "chunk size must be positive, got {}x{}",
                    self.chunk_rows, self.chunk_cols
                ),
            });
        }
        if self.n_workers == Some(0) {
            return Err(GridError::InvalidConfig {
                reason: "n_workers must be positive".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self::new()
    }
}
