//! Local block-parallel dispatch of the fitting and inversion kernels.
//!
//! A full `(time | param, row, col)` array is cut into spatial windows that
//! keep the whole leading axis, each window is handed to a block kernel on a
//! rayon pool, and the outputs are written back at the same offsets.
//!
//! ```mermaid
//! graph LR
//!     A["(time, row, col)"] -->|"fit_grid"| B["(4, row, col) parameters"]
//!     B -->|"return_levels_grid"| C["(n_periods, row, col)"]
//!     B -->|"return_periods_grid"| D["(n_levels, row, col)"]
//!     A -->|"empirical_periods_grid"| E["(n_levels, row, col)"]
//! ```
//!
//! Because every kernel is a pure function of its block, the output is
//! identical for any chunk size and worker count.

mod config;
mod dispatch;
mod error;
mod ops;
mod window;

pub use config::GridConfig;
pub use dispatch::map_blocks;
pub use error::GridError;
pub use ops::{empirical_periods_grid, fit_grid, return_levels_grid, return_periods_grid};
pub use window::{Window, partition};
