use fancy_regex::Regex;
use std::sync::LazyLock;

/// Alphanumeric labels joined by single `.` or `-`, ending in an alphabetic TLD.
static DOMAIN_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]+([\-\.]{1}[a-zA-Z0-9]+)*\.[a-zA-Z]{2,}$").ok());

/// Returns true when `candidate` looks like a domain name.
///
/// Rejects protocol prefixes, paths, whitespace, leading or trailing separators
/// and doubled separators. Never panics.
pub fn is_valid_domain(candidate: &str) -> bool {
    match DOMAIN_PATTERN.as_ref() {
        Some(re) => re.is_match(candidate).unwrap_or(false),
        None => false,
    }
}
