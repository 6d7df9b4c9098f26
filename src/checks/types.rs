use std::fmt;

/// Outcome of both checks for one candidate domain.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainReport {
    pub domain: String,
    pub valid_tld: bool,
    pub valid_domain: bool,
    /// Syntax rules the domain violates, empty when `valid_domain`.
    pub reasons: Vec<String>,
}

/// One violated syntax rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainIssue {
    /// Total length outside 4..=253.
    Length(usize),
    LeadingChar(char),
    TrailingChar(char),
    NoDot,
    InvalidChar(char),
    EmptyLabel,
    LabelTooLong { label: String, len: usize },
}

impl fmt::Display for DomainIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length(len) => write!(f, "total length {len} invalid (4..=253)"),
            Self::LeadingChar(c) => write!(f, "cannot start with '{c}'"),
            Self::TrailingChar(c) => write!(f, "cannot end with '{c}'"),
            Self::NoDot => f.write_str("must contain at least one dot"),
            Self::InvalidChar(c) => write!(f, "invalid char '{}'", c.escape_debug()),
            Self::EmptyLabel => f.write_str("empty label"),
            Self::LabelTooLong { label, len } => write!(f, "label '{label}' length {len} > 63"),
        }
    }
}
