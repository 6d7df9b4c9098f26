mod domain;
mod tld;
mod types;

pub use domain::{check_domain, is_valid_domain};
pub use tld::is_valid_tld;
pub use types::{DomainIssue, DomainReport};

use crate::loader::TldSet;

/// Run both checks on one candidate. The reported domain is the string as
/// given; both checks normalize their own copy.
pub fn validate_domain(domain: &str, tlds: &TldSet) -> DomainReport {
    let reasons: Vec<String> = check_domain(domain)
        .iter()
        .map(ToString::to_string)
        .collect();

    DomainReport {
        domain: domain.to_string(),
        valid_tld: is_valid_tld(domain, tlds),
        valid_domain: reasons.is_empty(),
        reasons,
    }
}

/// [`validate_domain`] over every candidate, in input order.
pub fn validate_all<S: AsRef<str>>(domains: &[S], tlds: &TldSet) -> Vec<DomainReport> {
    domains
        .iter()
        .map(|d| validate_domain(d.as_ref(), tlds))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_valid_domain() {
        let tlds = TldSet::from_names(["COM"]);
        let r = validate_domain("example.com", &tlds);
        assert!(r.valid_tld);
        assert!(r.valid_domain, "{:?}", r.reasons);
        assert!(r.reasons.is_empty());
    }

    #[test]
    fn checks_are_independent() {
        let tlds = TldSet::from_names(["COM"]);
        let r = validate_domain("exa$mple.com", &tlds);
        assert!(r.valid_tld);
        assert!(!r.valid_domain);
        assert_eq!(r.reasons, ["invalid char '$'"]);

        let r = validate_domain("example.org", &tlds);
        assert!(!r.valid_tld);
        assert!(r.valid_domain);
    }

    #[test]
    fn keeps_input_order() {
        let tlds = TldSet::from_names(["net"]);
        let rows = validate_all(&["b.net", "", "a.net"], &tlds);
        let domains: Vec<&str> = rows.iter().map(|r| r.domain.as_str()).collect();
        assert_eq!(domains, ["b.net", "", "a.net"]);
        assert!(!rows[1].valid_domain);
    }
}
