use crate::layout::{compute_column_widths, ColumnConfig, ColumnWidths};
use crate::node::TableNode;

/// Holds the last published column widths for one rendered table.
///
/// Call [`ColumnSizer::update`] whenever the renderer is handed a table or
/// the viewport is resized. Widths are recomputed from scratch when the table
/// tree or the viewport width differs from the previous call, and kept as-is
/// otherwise. The most recent update always wins.
#[derive(Debug, Default)]
pub struct ColumnSizer {
    config: ColumnConfig,
    widths: ColumnWidths,
    /// Snapshot of the table and viewport width the current widths were
    /// computed from.
    source: Option<(TableNode, f32)>,
}

impl ColumnSizer {
    pub fn new(config: ColumnConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &ColumnConfig {
        &self.config
    }

    /// Replace the configuration. The next update recomputes.
    pub fn set_config(&mut self, config: ColumnConfig) {
        if config != self.config {
            self.config = config;
            self.invalidate();
        }
    }

    /// Force the next update to recompute.
    pub fn invalidate(&mut self) {
        self.source = None;
    }

    /// Recompute if `table` or `viewport_width` changed since the last call.
    /// Returns true if the widths were recomputed.
    pub fn update(&mut self, table: &TableNode, viewport_width: f32) -> bool {
        if self.is_current(table, viewport_width) {
            log::trace!("[sizer] {} unchanged at viewport {}", table.id, viewport_width);
            return false;
        }

        self.widths = compute_column_widths(table, viewport_width, &self.config);
        self.source = Some((table.clone(), viewport_width));
        true
    }

    /// Last published widths. Empty until the first update.
    pub fn widths(&self) -> &ColumnWidths {
        &self.widths
    }

    fn is_current(&self, table: &TableNode, viewport_width: f32) -> bool {
        match &self.source {
            Some((snapshot, viewport)) => {
                viewport.to_bits() == viewport_width.to_bits() && snapshot == table
            }
            None => false,
        }
    }
}
