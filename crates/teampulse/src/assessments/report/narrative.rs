use super::super::domain::Section;

/// Distills free-form prose from the drafting assistant into a handful of
/// section-relevant highlights.
///
/// Implementations do best-effort text processing only. They never validate
/// meaning, and their output is advisory.
pub trait InsightFilter: Send + Sync {
    fn highlights(&self, text: &str, section: Section) -> Vec<String>;
}

const MAX_HIGHLIGHTS: usize = 3;
const MIN_FRAGMENT_CHARS: usize = 20;
const MAX_CLAUSE_CHARS: usize = 120;
const MAX_HIGHLIGHT_CHARS: usize = 150;

/// Keyword-gated filter: keeps sentence fragments that mention the target
/// section's vocabulary, then trims them into short highlights.
#[derive(Debug, Default, Clone)]
pub struct KeywordInsightFilter;

impl InsightFilter for KeywordInsightFilter {
    fn highlights(&self, text: &str, section: Section) -> Vec<String> {
        let keywords = section_keywords(section);

        text.split(['.', '!', '?'])
            .map(str::trim)
            .filter(|fragment| fragment.chars().count() >= MIN_FRAGMENT_CHARS)
            .filter(|fragment| mentions_any(fragment, keywords))
            .take(MAX_HIGHLIGHTS)
            .filter_map(cleanup_fragment)
            .collect()
    }
}

/// Section vocabulary matched as lowercase substrings, so stems like
/// "collaborat" cover both "collaborate" and "collaboration".
pub(crate) fn section_keywords(section: Section) -> &'static [&'static str] {
    match section {
        Section::Ocean => &[
            "openness",
            "conscientious",
            "extravers",
            "introvers",
            "agreeable",
            "neurotic",
            "emotional",
            "personality",
            "trait",
            "curio",
            "organiz",
            "sociab",
            "resilien",
            "stress",
        ],
        Section::Culture => &[
            "culture",
            "hierarch",
            "power distance",
            "collaborat",
            "communicat",
            "team",
            "trust",
            "feedback",
            "adapt",
            "recogni",
            "transparen",
            "silo",
        ],
        Section::Values => &[
            "value",
            "innovat",
            "integrity",
            "customer",
            "growth",
            "learning",
            "purpose",
            "quality",
            "ethic",
            "mission",
        ],
    }
}

/// Verbose phrasings the drafting assistant leans on, replaced wholesale.
const SIMPLIFICATIONS: &[(&str, &str)] = &[
    ("it is important to note that ", ""),
    ("it's important to note that ", ""),
    ("it is worth noting that ", ""),
    ("in order to ", "to "),
    ("demonstrates a tendency to ", "tends to "),
    ("exhibits a preference for ", "prefers "),
    ("a significant degree of ", "strong "),
    ("individuals who ", "people who "),
    ("utilize ", "use "),
    ("leverage ", "use "),
    ("facilitate ", "support "),
];

fn mentions_any(fragment: &str, keywords: &[&str]) -> bool {
    let lowered = fragment.to_ascii_lowercase();
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

fn cleanup_fragment(fragment: &str) -> Option<String> {
    let stripped = strip_bullet_markers(fragment);

    let mut cleaned = if stripped.chars().count() > MAX_CLAUSE_CHARS {
        let clause = stripped.split(',').next().unwrap_or(stripped).trim();
        format!("{clause}.")
    } else {
        stripped.to_string()
    };

    for (verbose, plain) in SIMPLIFICATIONS {
        cleaned = replace_ignoring_case(&cleaned, verbose, plain);
    }

    let mut cleaned = cleaned.trim().to_string();
    if !cleaned.is_empty() && !cleaned.ends_with(['.', '!', '?']) {
        cleaned.push('.');
    }

    if cleaned.is_empty() || cleaned.chars().count() >= MAX_HIGHLIGHT_CHARS {
        return None;
    }

    Some(cleaned)
}

fn strip_bullet_markers(fragment: &str) -> &str {
    let mut rest = fragment.trim();
    loop {
        let next = rest
            .strip_prefix(['-', '*', '•', '–'])
            .or_else(|| numbered_prefix(rest));
        match next {
            Some(stripped) => rest = stripped.trim_start(),
            None => return rest,
        }
    }
}

fn numbered_prefix(fragment: &str) -> Option<&str> {
    let digits = fragment.trim_start_matches(|c: char| c.is_ascii_digit());
    if digits.len() < fragment.len() {
        digits.strip_prefix(')')
    } else {
        None
    }
}

/// Case-insensitive replacement over ASCII patterns. Offsets computed on
/// the ASCII-lowered copy stay valid in the original string.
fn replace_ignoring_case(haystack: &str, needle: &str, replacement: &str) -> String {
    let lowered = haystack.to_ascii_lowercase();
    let mut result = String::with_capacity(haystack.len());
    let mut cursor = 0;

    while let Some(offset) = lowered[cursor..].find(needle) {
        let start = cursor + offset;
        result.push_str(&haystack[cursor..start]);
        result.push_str(replacement);
        cursor = start + needle.len();
    }

    result.push_str(&haystack[cursor..]);
    result
}
