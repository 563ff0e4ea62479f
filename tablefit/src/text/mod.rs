use crate::layout::ColumnConfig;
use crate::node::InlineNode;

/// Flatten an inline subtree into its plain text, leaves in document order.
pub fn extract_text(node: &InlineNode) -> String {
    let mut out = String::new();
    extract_text_into(node, &mut out);
    out
}

/// Like [`extract_text`], treating a missing node as empty.
pub fn extract_text_opt(node: Option<&InlineNode>) -> String {
    node.map(extract_text).unwrap_or_default()
}

/// Append the plain text of `node` to `out`.
pub fn extract_text_into(node: &InlineNode, out: &mut String) {
    match node {
        InlineNode::Text(text) => out.push_str(text),
        InlineNode::Element(children) => {
            for child in children {
                extract_text_into(child, out);
            }
        }
        InlineNode::Void => {}
    }
}

/// CJK Unified Ideographs, U+4E00 through U+9FA5.
pub fn is_cjk(c: char) -> bool {
    ('\u{4E00}'..='\u{9FA5}').contains(&c)
}

/// Character count with CJK ideographs weighted separately from the rest.
///
/// Non-CJK characters are counted in UTF-16 code units, so anything outside
/// the Basic Multilingual Plane (most emoji) counts as two.
pub fn weighted_char_count(text: &str, config: &ColumnConfig) -> f32 {
    let mut cjk = 0usize;
    let mut other = 0usize;

    for ch in text.chars() {
        if is_cjk(ch) {
            cjk += 1;
        } else {
            other += ch.len_utf16();
        }
    }

    cjk as f32 * config.cjk_char_weight + other as f32 * config.other_char_weight
}

/// Estimated rendered width of `text` in pixels, before any clamping.
pub fn estimate_text_width(text: &str, config: &ColumnConfig) -> f32 {
    weighted_char_count(text, config) * config.char_width_px + config.padding_px
}
