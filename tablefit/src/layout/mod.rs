mod columns;
mod config;
mod widths;

pub use columns::{compute_column_widths, recompute};
pub use config::ColumnConfig;
pub use widths::{ColumnWidths, Fit};
