mod inline;
mod table;

use std::sync::atomic::{AtomicU64, Ordering};

pub use inline::InlineNode;
pub use table::{
    CellKind, CellNode, RowNode, SectionChild, SectionKind, SectionNode, TableChild, TableNode,
};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

pub(crate) fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}
