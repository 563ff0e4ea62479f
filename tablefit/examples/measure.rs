use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};
use tablefit::{CellNode, ColumnSizer, InlineNode, RowNode, SectionNode, TableNode};

fn main() -> std::io::Result<()> {
    // Set up file logging
    let log_file = File::create("measure.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let viewports: Vec<f32> = std::env::args()
        .skip(1)
        .filter_map(|arg| arg.parse().ok())
        .collect();
    let viewports = if viewports.is_empty() {
        vec![320.0, 400.0, 768.0, 1280.0]
    } else {
        viewports
    };

    let table = sample_table();
    let mut sizer = ColumnSizer::default();

    for viewport in viewports {
        sizer.update(&table, viewport);
        let widths = sizer.widths();
        let formatted: Vec<String> = widths.iter().map(|w| format!("{w:.1}")).collect();
        println!(
            "viewport {viewport:>6}: [{}] total={:.1} scroll={}",
            formatted.join(", "),
            widths.total(),
            widths.needs_horizontal_scroll()
        );
    }

    Ok(())
}

fn sample_table() -> TableNode {
    TableNode::new()
        .id("sample")
        .section(
            SectionNode::header().row(
                RowNode::new()
                    .cell(CellNode::header().text("Name"))
                    .cell(CellNode::header().text("说明"))
                    .cell(CellNode::header().text("Link")),
            ),
        )
        .section(
            SectionNode::body()
                .row(
                    RowNode::new()
                        .cell(CellNode::data().text("tablefit"))
                        .cell(CellNode::data().text("根据内容估算列宽"))
                        .cell(CellNode::data().child(InlineNode::element([
                            InlineNode::text("docs/"),
                            InlineNode::element([InlineNode::text("columns.md")]),
                        ]))),
                )
                .row(
                    RowNode::new()
                        .cell(CellNode::data().text("viewport"))
                        .cell(CellNode::data().text("Available horizontal space")),
                ),
        )
}
