/// Normalize a survey-tool label for matching: strip BOM and zero-width
/// characters, collapse runs of whitespace, drop terminal punctuation, and
/// lowercase. Export tools disagree on all four, catalog lookups should not.
pub(crate) fn normalize_label(value: &str) -> String {
    let cleaned = value.replace(['\u{feff}', '\u{200b}'], "");
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    collapsed
        .trim_end_matches(['.', '!', '?'])
        .to_ascii_lowercase()
}

#[cfg(test)]
pub(crate) fn normalize_for_tests(value: &str) -> String {
    normalize_label(value)
}
