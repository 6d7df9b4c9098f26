use crate::loader::{TldSet, normalize_line};

/// True when the domain ends with one of the loaded suffixes.
///
/// Plain suffix test on the normalized domain; the only label boundary is the
/// leading dot carried by each suffix.
pub fn is_valid_tld(domain: &str, tlds: &TldSet) -> bool {
    let clean = normalize_line(domain);
    tlds.iter().any(|tld| clean.ends_with(tld))
}
