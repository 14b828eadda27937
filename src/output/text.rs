//! Plain-text export

use crate::crawler::PageResult;

/// Formats results as plain text
///
/// Each page becomes a block: the URL on its own line followed by the matched
/// lines. Blocks are separated by a blank line. No results yields an empty
/// string.
pub fn format_text(results: &[PageResult]) -> String {
    let mut out = String::new();

    for (i, result) in results.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&result.url);
        out.push('\n');
        out.push_str(&result.content);
        out.push('\n');
    }

    out
}
