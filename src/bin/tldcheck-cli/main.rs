mod args;
mod logging;
mod output;

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use tldcheck_lib::{load_domains, load_domains_from_reader, load_tlds, validate_all};

use crate::args::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.debug);
    cli.check_format()?;

    let options = cli.load_options();

    let tlds = load_tlds(&cli.tlds, &options).context("loading TLD list")?;
    let domains = if cli.stdin {
        load_domains_from_reader(io::stdin().lock(), Path::new("<stdin>"), &options)
    } else {
        load_domains(cli.domains_path(), &options)
    }
    .context("loading domain list")?;

    // codes de sortie : 0 même si des domaines sont invalides, 1 fatal
    let rows = validate_all(&domains, &tlds);
    output::write_reports(&rows, &cli)
}
