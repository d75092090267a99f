//! Text utilities for building fixes against the original source
//!
//! All offsets are byte offsets into the unmodified source text.

/// Byte offset of the start of the line containing `offset`
pub fn line_start(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    source[..offset].rfind('\n').map_or(0, |i| i + 1)
}

/// Leading whitespace of the line containing `offset`
pub fn line_indent(source: &str, offset: usize) -> &str {
    let start = line_start(source, offset);
    let line = &source[start..];
    let end = line
        .find(|c: char| !matches!(c, ' ' | '\t'))
        .unwrap_or(line.len());
    &line[..end]
}

/// Column (in chars) of `offset` within its line
pub fn column(source: &str, offset: usize) -> usize {
    let offset = offset.min(source.len());
    source[line_start(source, offset)..offset].chars().count()
}

/// Number of leading whitespace chars of a line
fn indent_width(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

/// Re-indent a block of text under `prefix`, keeping each line's indentation
/// relative to `base_column`.
///
/// The first line is assumed to start at `base_column` (its leading text was cut
/// from the middle of a line). Blank lines are emitted empty.
pub fn reindent(text: &str, base_column: usize, prefix: &str) -> String {
    text.lines()
        .enumerate()
        .map(|(idx, line)| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return String::new();
            }
            let relative = if idx == 0 {
                0
            } else {
                indent_width(line).saturating_sub(base_column)
            };
            format!("{}{}{}", prefix, " ".repeat(relative), trimmed)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
