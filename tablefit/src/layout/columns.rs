use super::{ColumnConfig, ColumnWidths, Fit};
use crate::node::TableNode;
use crate::text::estimate_text_width;

/// Compute a width for every column of `table` within `viewport_width`.
///
/// Each column is sized to its widest cell estimate, capped per column and
/// floored at `min_column_width`. If the result is narrower than the table
/// ceiling, all columns are scaled up proportionally to fill it. Otherwise
/// the measured widths are returned unchanged and the caller is expected to
/// let the table scroll horizontally.
///
/// A table without measurable rows yields an empty result.
pub fn compute_column_widths(
    table: &TableNode,
    viewport_width: f32,
    config: &ColumnConfig,
) -> ColumnWidths {
    let num_columns = table.column_count();
    if num_columns == 0 {
        log::debug!("[columns] {} has no rows, nothing to size", table.id);
        return ColumnWidths::empty();
    }

    let max_table_width = viewport_width * config.max_table_width_fraction;
    let max_col_width = config.max_column_width(max_table_width, num_columns);

    let content_widths = measure_columns(table, num_columns, max_col_width, config);

    // Floor every column, including ones no row reaches
    let adjusted: Vec<f32> = content_widths
        .iter()
        .map(|&width| width.max(config.min_column_width))
        .collect();
    let total: f32 = adjusted.iter().sum();

    let widths = if max_table_width.is_finite() && total > 0.0 && total < max_table_width {
        let ratio = max_table_width / total;
        let stretched = adjusted.into_iter().map(|width| width * ratio).collect();
        ColumnWidths::new(stretched, Fit::Stretched { ratio })
    } else {
        ColumnWidths::new(adjusted, Fit::Overflow)
    };

    log::debug!(
        "[columns] {}: {} columns, viewport={} max_table={} max_col={} content_total={} fit={:?}",
        table.id,
        num_columns,
        viewport_width,
        max_table_width,
        max_col_width,
        total,
        widths.fit()
    );

    widths
}

/// Pure recomputation entry point for callers reacting to a table or
/// viewport change. Identical to [`compute_column_widths`].
pub fn recompute(table: &TableNode, viewport_width: f32, config: &ColumnConfig) -> ColumnWidths {
    compute_column_widths(table, viewport_width, config)
}

/// Running maximum of clamped cell estimates per column.
fn measure_columns(
    table: &TableNode,
    num_columns: usize,
    max_col_width: f32,
    config: &ColumnConfig,
) -> Vec<f32> {
    let mut content_widths = vec![0.0f32; num_columns];

    for (row_index, row) in table.rows().enumerate() {
        for (col, cell) in row.cells.iter().enumerate() {
            let text = cell.plain_text();
            let estimated = estimate_text_width(&text, config);
            let limited = estimated.min(max_col_width);

            log::trace!(
                "[columns] cell ({row_index}, {col}) estimated={estimated} limited={limited}"
            );

            if limited > content_widths[col] {
                content_widths[col] = limited;
            }
        }
    }

    content_widths
}
