//! Front-matter title extraction.
//!
//! Documents may start with a metadata block delimited by two lines of three
//! or more dashes:
//!
//! ```text
//! ---
//! title: Installing
//! ---
//! ```
//!
//! Only the `title` key is read. Missing blocks, YAML errors and non-scalar
//! titles all yield `None`; the caller decides the fallback.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::Value;

/// Number of bytes read from the start of a file when looking for front matter.
///
/// A block whose closing delimiter lies beyond this limit is not recognized.
pub const FRONT_MATTER_LIMIT: usize = 8 * 1024;

static FRONT_MATTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?ms)\A-{3,}[ \t]*\r?\n(.*?)^-{3,}[ \t]*\r?$").unwrap());

/// Return the raw YAML body of a leading front-matter block.
pub(crate) fn front_matter_block(text: &str) -> Option<&str> {
    FRONT_MATTER_RE
        .captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
}

/// Extract the `title` value from the front matter of a file prefix.
///
/// Invalid UTF-8 (including a multi-byte character cut by the read limit)
/// is replaced rather than rejected.
pub fn extract_title(head: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(head);
    let block = front_matter_block(&text)?;
    if block.trim().is_empty() {
        return None;
    }

    let data: Value = match serde_yaml::from_str(block) {
        Ok(data) => data,
        Err(e) => {
            tracing::debug!(error = %e, "Malformed front matter");
            return None;
        }
    };

    let title = match data.get("title")? {
        Value::String(s) => s.trim().to_owned(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };

    (!title.is_empty()).then_some(title)
}
