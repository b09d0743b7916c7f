//! Table-of-contents extraction for card previews.
//!
//! Independent of the mandatory-section check: this feeds the catalog
//! preview and in-card navigation, so it reports every heading, not just the
//! mandatory ones.

use once_cell::sync::Lazy;
use regex::Regex;

/// Headings with 1-3 leading markers; deeper headings are ignored.
static HEADING_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#{1,3}\s+(.+)$").expect("heading pattern is valid"));

/// Returns the heading titles of a markdown body in document order.
///
/// Lazy and restartable: call again on the same content to iterate afresh.
/// Titles are trimmed, duplicates preserved, depth not preserved. Total for
/// any input; non-heading lines are skipped.
pub fn table_of_contents(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .filter_map(|line| Some(HEADING_PATTERN.captures(line)?.get(1)?.as_str().trim()))
}
