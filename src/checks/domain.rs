use crate::loader::normalize_line;

use super::types::DomainIssue;

pub(crate) const MIN_LEN: usize = 4;
pub(crate) const MAX_LEN: usize = 253;
pub(crate) const MAX_LABEL_LEN: usize = 63;

/// Caractères acceptés. L'underscore n'est pas légal pour un hostname
/// public mais l'est pour une cible CNAME (`_dmarc.example.com`).
fn is_okay_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '.' | '-' | '_')
}

fn is_edge_char(c: char) -> bool {
    matches!(c, '-' | '_' | '.')
}

/// Whether `domain` is a syntactically acceptable CNAME target.
///
/// Lengths are counted in bytes. Stops at the first violated rule; use
/// [`check_domain`] to get all of them.
pub fn is_valid_domain(domain: &str) -> bool {
    let clean = normalize_line(domain);

    if clean.len() < MIN_LEN || clean.len() > MAX_LEN {
        return false;
    }
    if clean.starts_with(is_edge_char) || clean.ends_with(is_edge_char) {
        return false;
    }
    if !clean.contains('.') {
        return false;
    }
    if !clean.chars().all(is_okay_char) {
        return false;
    }
    clean
        .split('.')
        .all(|label| !label.is_empty() && label.len() <= MAX_LABEL_LEN)
}

/// Lists every syntax rule `domain` violates. Empty iff
/// [`is_valid_domain`] returns true.
pub fn check_domain(domain: &str) -> Vec<DomainIssue> {
    let clean = normalize_line(domain);
    let mut issues = Vec::new();

    if clean.len() < MIN_LEN || clean.len() > MAX_LEN {
        issues.push(DomainIssue::Length(clean.len()));
    }

    if let Some(c) = clean.chars().next().filter(|c| is_edge_char(*c)) {
        issues.push(DomainIssue::LeadingChar(c));
    }
    if let Some(c) = clean.chars().next_back().filter(|c| is_edge_char(*c)) {
        issues.push(DomainIssue::TrailingChar(c));
    }

    // au moins un point
    if !clean.contains('.') {
        issues.push(DomainIssue::NoDot);
    }

    // un seul signalement par caractère fautif
    let mut seen = Vec::new();
    for c in clean.chars().filter(|c| !is_okay_char(*c)) {
        if !seen.contains(&c) {
            seen.push(c);
            issues.push(DomainIssue::InvalidChar(c));
        }
    }

    let mut empty_reported = false;
    for label in clean.split('.') {
        if label.is_empty() {
            if !empty_reported {
                empty_reported = true;
                issues.push(DomainIssue::EmptyLabel);
            }
            continue;
        }
        if label.len() > MAX_LABEL_LEN {
            issues.push(DomainIssue::LabelTooLong {
                label: label.to_string(),
                len: label.len(),
            });
        }
    }

    issues
}
