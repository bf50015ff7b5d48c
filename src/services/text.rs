//! Text analysis for raw address and driver lines

use once_cell::sync::Lazy;
use regex::Regex;

/// Length of a name in characters
#[inline]
pub fn name_length(name: &str) -> u64 {
    name.chars().count() as u64
}

static STREET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9_]+\s([A-Za-z0-9_\s]+)\s[A-Za-z0-9_]+,").unwrap());
static VOWEL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[aeiouAEIOU]").unwrap());
static CONSONANT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[b-df-hj-np-tv-zB-DF-HJ-NP-TV-Z]").unwrap());

/// Count ASCII vowels (a, e, i, o, u), case-insensitive
pub fn count_vowels(name: &str) -> u32 {
    VOWEL_RE.find_iter(name).count() as u32
}

/// Count ASCII consonants, case-insensitive; `y` counts as a consonant
pub fn count_consonants(name: &str) -> u32 {
    CONSONANT_RE.find_iter(name).count() as u32
}

/// Extract the street name from a formatted address line
///
/// Expected shape: `<number> <street name> <suffix>, <rest>`. The street name
/// is whatever lies between the first word and the last word before the first
/// comma. Returns `None` when the line does not have that shape.
///
/// ```
/// use courier_match::services::text::extract_street_name;
///
/// assert_eq!(extract_street_name("44 Fake Elm Dr, San Diego, CA"), Some("Fake Elm"));
/// assert_eq!(extract_street_name("no comma here"), None);
/// ```
pub fn extract_street_name(line: &str) -> Option<&str> {
    STREET_RE
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|street| street.as_str())
}
