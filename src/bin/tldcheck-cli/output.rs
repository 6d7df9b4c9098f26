use anyhow::{Context, Result, bail};
use std::io::Write;
use std::path::Path;

use crate::args::Cli;
use tldcheck_lib::{DomainReport, write_human};

pub fn write_reports(rows: &[DomainReport], cli: &Cli) -> Result<()> {
    let bytes = match cli.format.as_str() {
        "human" => to_human(rows, cli)?,
        "json" => to_json(rows)?,
        "ndjson" => to_ndjson(rows)?,
        "csv" => to_csv(rows)?,
        other => bail!("unknown --format '{other}', use: human|json|ndjson|csv"),
    };

    if let Some(path) = &cli.out {
        write_all_atomically(path, &bytes)?;
    } else {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&bytes)?;
        stdout.flush()?;
    }
    Ok(())
}

fn to_human(rows: &[DomainReport], cli: &Cli) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    write_human(&mut buf, rows, cli.reasons)?;
    Ok(buf)
}

#[cfg(feature = "with-serde")]
fn to_json(rows: &[DomainReport]) -> Result<Vec<u8>> {
    let mut buf = serde_json::to_vec_pretty(rows)?;
    buf.push(b'\n');
    Ok(buf)
}

#[cfg(not(feature = "with-serde"))]
fn to_json(_: &[DomainReport]) -> Result<Vec<u8>> {
    bail!("format=json requires the 'with-serde' feature")
}

#[cfg(feature = "with-serde")]
fn to_ndjson(rows: &[DomainReport]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    for row in rows {
        serde_json::to_writer(&mut buf, row)?;
        buf.push(b'\n');
    }
    Ok(buf)
}

#[cfg(not(feature = "with-serde"))]
fn to_ndjson(_: &[DomainReport]) -> Result<Vec<u8>> {
    bail!("format=ndjson requires the 'with-serde' feature")
}

#[cfg(feature = "with-csv")]
fn to_csv(rows: &[DomainReport]) -> Result<Vec<u8>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["domain", "valid_tld", "valid_domain", "reasons"])?;
    for row in rows {
        let reasons = row.reasons.join("|");
        wtr.write_record([
            row.domain.as_str(),
            bool_str(row.valid_tld),
            bool_str(row.valid_domain),
            reasons.as_str(),
        ])?;
    }
    Ok(wtr.into_inner()?)
}

#[cfg(not(feature = "with-csv"))]
fn to_csv(_: &[DomainReport]) -> Result<Vec<u8>> {
    bail!("format=csv requires the 'with-csv' feature")
}

#[cfg(feature = "with-csv")]
fn bool_str(b: bool) -> &'static str {
    if b { "true" } else { "false" }
}

fn write_all_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = Path::new(&tmp);

    let written = write_synced(tmp, bytes).and_then(|()| {
        std::fs::rename(tmp, path)
            .with_context(|| format!("rename {} -> {}", tmp.display(), path.display()))
    });
    if written.is_err() {
        // pas de .tmp orphelin
        let _ = std::fs::remove_file(tmp);
    }
    written
}

fn write_synced(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut f =
        std::fs::File::create(path).with_context(|| format!("create {}", path.display()))?;
    f.write_all(bytes)
        .with_context(|| format!("write {}", path.display()))?;
    f.sync_all()
        .with_context(|| format!("sync {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_replaces_target_and_leaves_no_tmp() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("report.txt");
        std::fs::write(&target, "old").unwrap();

        write_all_atomically(&target, b"new\n").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "new\n");
        assert!(!dir.path().join("report.txt.tmp").exists());
    }

    #[test]
    fn failed_rename_cleans_up_tmp() {
        let dir = tempfile::tempdir().unwrap();
        // un répertoire non vide ne peut pas être remplacé par un fichier
        let target = dir.path().join("occupied");
        std::fs::create_dir(&target).unwrap();
        std::fs::write(target.join("keep"), "x").unwrap();

        let err = write_all_atomically(&target, b"data").unwrap_err();

        assert!(format!("{err:#}").contains("rename"), "{err:#}");
        assert!(!dir.path().join("occupied.tmp").exists());
        assert!(target.join("keep").exists());
    }

    #[test]
    fn create_error_names_the_tmp_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("missing-dir").join("report.txt");

        let err = write_all_atomically(&target, b"data").unwrap_err();

        assert!(format!("{err:#}").contains("create"), "{err:#}");
        assert!(format!("{err:#}").contains("report.txt.tmp"), "{err:#}");
    }
}
