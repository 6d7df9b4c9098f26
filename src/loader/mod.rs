//! Loaders for the TLD reference list and the candidate domain list.
//!
//! Both lists are line oriented. Every line is trimmed and lowercased; the
//! TLD loader additionally drops `#` comment lines and turns each name into a
//! dotted suffix (`COM` -> `.com`).

mod error;
mod types;

pub use error::LoadError;
pub use types::{LoadOptions, TldSet};

pub(crate) use types::normalize_line;

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use types::tld_suffix;

/// Load an IANA style TLD list (`tlds-alpha-by-domain.txt`).
///
/// ```text
/// # Version 2019012900, Last Updated Tue Jan 29 07:07:01 2019 UTC
/// AAA
/// AARP
/// ```
pub fn load_tlds(path: impl AsRef<Path>, options: &LoadOptions) -> Result<TldSet, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::open(path, e))?;
    load_tlds_from_reader(BufReader::new(file), path, options)
}

/// Same as [`load_tlds`] over an already opened reader. `origin` only names
/// the source in errors and logs.
pub fn load_tlds_from_reader<R: BufRead>(
    reader: R,
    origin: &Path,
    options: &LoadOptions,
) -> Result<TldSet, LoadError> {
    let mut suffixes = Vec::new();

    for_each_line(reader, origin, |lineno, line| {
        let tld = normalize_line(line);
        if tld.starts_with('#') {
            return;
        }
        if tld.is_empty() && !options.keep_blank_tlds {
            trace!(origin = %origin.display(), line = lineno, "skipping blank TLD line");
            return;
        }
        suffixes.push(tld_suffix(&tld));
    })?;

    if options.debug {
        debug!(origin = %origin.display(), count = suffixes.len(), "loaded TLDs");
    }

    Ok(TldSet::from_suffixes(suffixes))
}

/// Load the candidate domains, one per line. Blank lines are kept.
///
/// Bytes that are not valid UTF-8 come back as U+FFFD, so the report shows the
/// replacement character instead of the raw bytes. Such domains fail the
/// syntax check either way.
pub fn load_domains(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Vec<String>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| LoadError::open(path, e))?;
    load_domains_from_reader(BufReader::new(file), path, options)
}

pub fn load_domains_from_reader<R: BufRead>(
    reader: R,
    origin: &Path,
    options: &LoadOptions,
) -> Result<Vec<String>, LoadError> {
    let mut domains = Vec::new();

    for_each_line(reader, origin, |_, line| {
        domains.push(normalize_line(line));
    })?;

    if options.debug {
        debug!(origin = %origin.display(), count = domains.len(), "loaded domains");
    }

    Ok(domains)
}

/// Feed every line (1-based number, content without `\n`/`\r\n`) to `f`.
/// Invalid UTF-8 is replaced rather than rejected: a malformed line is still
/// a line.
fn for_each_line<R, F>(mut reader: R, origin: &Path, mut f: F) -> Result<(), LoadError>
where
    R: BufRead,
    F: FnMut(usize, &str),
{
    let mut buf = Vec::new();
    let mut lineno = 0;
    loop {
        buf.clear();
        let n = reader
            .read_until(b'\n', &mut buf)
            .map_err(|e| LoadError::read(origin, lineno + 1, e))?;
        if n == 0 {
            return Ok(());
        }
        lineno += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        f(lineno, &String::from_utf8_lossy(&buf));
    }
}
