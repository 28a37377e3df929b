//! Plain-text rendering of rich task descriptions.

/// Entities decoded by [`plain_text`].
const ENTITIES: [(&str, &str); 6] = [
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&nbsp;", " "),
    ("&amp;", "&"),
];

/// Converts rich-text markup to plain text.
///
/// Tags are dropped, block-level boundaries become spaces, common HTML
/// entities are decoded, and runs of whitespace collapse to one space.
#[must_use]
pub fn plain_text(markup: &str) -> String {
    let mut stripped = String::with_capacity(markup.len());
    let mut in_tag = false;
    for ch in markup.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => {
                in_tag = false;
                stripped.push(' ');
            }
            _ if in_tag => {}
            _ => stripped.push(ch),
        }
    }

    let decoded = ENTITIES
        .iter()
        .fold(stripped, |text, (entity, replacement)| {
            text.replace(entity, replacement)
        });

    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}
