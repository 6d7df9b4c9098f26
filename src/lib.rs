#![forbid(unsafe_code)]
//! tldcheck_lib — vérifie une liste de domaines contre la liste IANA des TLD
//! et contre les règles de syntaxe des labels DNS.

pub mod checks;
pub mod loader;
pub mod report;

pub use checks::{
    DomainIssue, DomainReport, check_domain, is_valid_domain, is_valid_tld, validate_all,
    validate_domain,
};
pub use loader::{
    LoadError, LoadOptions, TldSet, load_domains, load_domains_from_reader, load_tlds,
    load_tlds_from_reader,
};
pub use report::{render_human, write_human};

/// Default TLD list path, as published at
/// <https://data.iana.org/TLD/tlds-alpha-by-domain.txt>.
pub const DEFAULT_TLDS_PATH: &str = "tlds-alpha-by-domain.txt";
