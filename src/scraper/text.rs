// src/scraper/text.rs
//
// Text helpers shared by both extractors.

use scraper::ElementRef;

/// All text under `element`, each text node trimmed, empty ones dropped,
/// joined by a single space. This is the "flattened" text the regex rules
/// run against.
pub fn flat_text(element: &ElementRef) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Same as [`flat_text`] but joined without a separator; used for short
/// single-value elements such as table cells and labels.
pub fn compact_text(element: &ElementRef) -> String {
    element.text().map(str::trim).collect()
}

/// Length in characters, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Evaluates named `rules` in order and returns the first non-empty result.
pub fn first_match<C, F>(field: &str, ctx: &C, rules: &[(&'static str, F)]) -> Option<String>
where
    F: Fn(&C) -> Option<String>,
{
    rules.iter().find_map(|(name, rule)| {
        let value = rule(ctx).filter(|v| !v.is_empty())?;
        tracing::trace!(field, rule = *name, %value, "rule matched");
        Some(value)
    })
}
