use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;
use tldcheck_lib::{DEFAULT_TLDS_PATH, LoadOptions};

#[derive(Parser, Debug)]
#[command(
    name = "tldcheck-cli",
    about = "Check a list of domains against the IANA TLD list and DNS label syntax"
)]
pub struct Cli {
    /// enable debug logging (loaded entry counts)
    #[arg(long)]
    pub debug: bool,

    /// the path to the IANA TLD list
    #[arg(long, default_value = DEFAULT_TLDS_PATH)]
    pub tlds: PathBuf,

    /// the path to the list of domains (required unless --stdin)
    #[arg(long)]
    pub domains: Option<PathBuf>,

    /// lit les domaines depuis stdin (un par ligne) au lieu de --domains
    #[arg(long, conflicts_with = "domains")]
    pub stdin: bool,

    /// keep blank TLD lines as the suffix "." (matches trailing-dot domains)
    #[arg(long)]
    pub keep_blank_tlds: bool,

    /// append rejection reasons to invalid "Valid Domain?" lines (human format)
    #[arg(long)]
    pub reasons: bool,

    /// format: human|json|ndjson|csv
    #[arg(long, default_value = "human")]
    pub format: String,

    /// write report to file instead of stdout
    #[arg(long)]
    pub out: Option<PathBuf>,
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// `--domains`, or the empty path when absent: opening it fails like any
    /// other missing file.
    pub fn domains_path(&self) -> PathBuf {
        self.domains.clone().unwrap_or_default()
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions::default()
            .debug(self.debug)
            .keep_blank_tlds(self.keep_blank_tlds)
    }

    /// Reject an unknown `--format` before any file is read.
    pub fn check_format(&self) -> Result<()> {
        match self.format.as_str() {
            "human" | "json" | "ndjson" | "csv" => Ok(()),
            other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
        }
    }
}
