/// Displayable content inside a table cell.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum InlineNode {
    /// A node with neither text nor children (images, line breaks).
    #[default]
    Void,
    Text(String),
    /// A container such as `<b>`, `<a>` or `<span>`.
    Element(Vec<InlineNode>),
}

impl InlineNode {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn element(children: impl IntoIterator<Item = InlineNode>) -> Self {
        Self::Element(children.into_iter().collect())
    }

    /// Append a child, turning a leaf into a container if needed.
    pub fn child(mut self, child: InlineNode) -> Self {
        match &mut self {
            Self::Element(children) => children.push(child),
            Self::Void => self = Self::Element(vec![child]),
            Self::Text(_) => {
                // Replace text with children
                self = Self::Element(vec![child]);
            }
        }
        self
    }

    pub fn children(&self) -> &[InlineNode] {
        match self {
            Self::Element(children) => children,
            Self::Void | Self::Text(_) => &[],
        }
    }
}

impl From<&str> for InlineNode {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for InlineNode {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}
