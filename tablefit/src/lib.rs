pub mod error;
pub mod layout;
pub mod node;
pub mod sizer;
pub mod text;

pub use error::ConfigError;
pub use layout::{compute_column_widths, recompute, ColumnConfig, ColumnWidths, Fit};
pub use node::{
    CellKind, CellNode, InlineNode, RowNode, SectionChild, SectionKind, SectionNode, TableChild,
    TableNode,
};
pub use sizer::ColumnSizer;
pub use text::{extract_text, extract_text_opt};
