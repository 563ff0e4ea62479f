/// How the final widths relate to the table width ceiling.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Fit {
    /// No measurable rows, nothing to size.
    #[default]
    Empty,
    /// Content was narrower than the ceiling and every column was scaled by
    /// `ratio` so the table fills it exactly.
    Stretched { ratio: f32 },
    /// Content reached the ceiling. Columns keep their measured widths and
    /// the table needs horizontal scrolling.
    Overflow,
}

/// Pixel width for each column, indexed by column position.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColumnWidths {
    widths: Vec<f32>,
    fit: Fit,
}

impl ColumnWidths {
    pub(crate) fn new(widths: Vec<f32>, fit: Fit) -> Self {
        Self { widths, fit }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Width for column `index`.
    ///
    /// `None` means the column has no explicit width and should be sized
    /// intrinsically by the renderer.
    pub fn width(&self, index: usize) -> Option<f32> {
        self.widths.get(index).copied()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.widths
    }

    pub fn iter(&self) -> impl Iterator<Item = f32> + '_ {
        self.widths.iter().copied()
    }

    pub fn total(&self) -> f32 {
        self.widths.iter().sum()
    }

    pub fn fit(&self) -> Fit {
        self.fit
    }

    /// Whether the table is wider than its ceiling and must scroll.
    pub fn needs_horizontal_scroll(&self) -> bool {
        self.fit == Fit::Overflow
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.widths
    }
}

impl std::ops::Index<usize> for ColumnWidths {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.widths[index]
    }
}
