use super::{generate_id, InlineNode};

/// Root of a table tree.
///
/// The tree is built by whatever parses the markup and is read-only input
/// for column sizing. The `id` is what [`crate::ColumnSizer`] uses to decide
/// whether it is looking at a different table than last time.
#[derive(Debug, Clone, PartialEq)]
pub struct TableNode {
    pub id: String,
    pub children: Vec<TableChild>,
}

/// A direct child of `<table>`.
#[derive(Debug, Clone, PartialEq)]
pub enum TableChild {
    Section(SectionNode),
    /// Anything that is not a row group: captions, colgroups, whitespace.
    Other(InlineNode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// `<thead>`
    Header,
    /// `<tbody>`
    Body,
    /// `<tfoot>`. Never measured.
    Footer,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SectionNode {
    pub kind: SectionKind,
    pub children: Vec<SectionChild>,
}

/// A direct child of a row group. Only rows take part in layout.
#[derive(Debug, Clone, PartialEq)]
pub enum SectionChild {
    Row(RowNode),
    Other(InlineNode),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowNode {
    pub cells: Vec<CellNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellKind {
    /// `<th>`
    Header,
    /// `<td>`
    #[default]
    Data,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellNode {
    pub kind: CellKind,
    pub children: Vec<InlineNode>,
}

impl Default for TableNode {
    fn default() -> Self {
        Self {
            id: generate_id("table"),
            children: Vec::new(),
        }
    }
}

impl TableNode {
    pub fn new() -> Self {
        Self::default()
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Children
    pub fn section(mut self, section: SectionNode) -> Self {
        self.children.push(TableChild::Section(section));
        self
    }

    pub fn sections(mut self, sections: impl IntoIterator<Item = SectionNode>) -> Self {
        self.children.extend(sections.into_iter().map(TableChild::Section));
        self
    }

    pub fn other(mut self, node: InlineNode) -> Self {
        self.children.push(TableChild::Other(node));
        self
    }

    /// Rows that take part in column sizing, in document order.
    ///
    /// Header rows come before or after body rows exactly as the sections
    /// appear. Footer sections and non-row children are skipped.
    pub fn rows(&self) -> impl Iterator<Item = &RowNode> {
        self.children
            .iter()
            .filter_map(|child| match child {
                TableChild::Section(section) if section.is_measured() => Some(section),
                _ => None,
            })
            .flat_map(|section| section.rows())
    }

    /// Length of the longest measured row.
    pub fn column_count(&self) -> usize {
        self.rows().map(|row| row.cells.len()).max().unwrap_or(0)
    }
}

impl SectionNode {
    pub fn new(kind: SectionKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn header() -> Self {
        Self::new(SectionKind::Header)
    }

    pub fn body() -> Self {
        Self::new(SectionKind::Body)
    }

    pub fn footer() -> Self {
        Self::new(SectionKind::Footer)
    }

    pub fn row(mut self, row: RowNode) -> Self {
        self.children.push(SectionChild::Row(row));
        self
    }

    pub fn rows_from(mut self, rows: impl IntoIterator<Item = RowNode>) -> Self {
        self.children.extend(rows.into_iter().map(SectionChild::Row));
        self
    }

    pub fn other(mut self, node: InlineNode) -> Self {
        self.children.push(SectionChild::Other(node));
        self
    }

    pub fn is_measured(&self) -> bool {
        matches!(self.kind, SectionKind::Header | SectionKind::Body)
    }

    pub fn rows(&self) -> impl Iterator<Item = &RowNode> {
        self.children.iter().filter_map(|child| match child {
            SectionChild::Row(row) => Some(row),
            SectionChild::Other(_) => None,
        })
    }
}

impl RowNode {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(mut self, cell: CellNode) -> Self {
        self.cells.push(cell);
        self
    }

    pub fn cells(mut self, cells: impl IntoIterator<Item = CellNode>) -> Self {
        self.cells.extend(cells);
        self
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl CellNode {
    pub fn new(kind: CellKind) -> Self {
        Self {
            kind,
            children: Vec::new(),
        }
    }

    pub fn header() -> Self {
        Self::new(CellKind::Header)
    }

    pub fn data() -> Self {
        Self::new(CellKind::Data)
    }

    /// Append a text leaf.
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(InlineNode::Text(content.into()))
    }

    pub fn child(mut self, child: InlineNode) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = InlineNode>) -> Self {
        self.children.extend(children);
        self
    }

    /// Plain text of everything inside the cell.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            crate::text::extract_text_into(child, &mut out);
        }
        out
    }
}
