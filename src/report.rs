//! Human-readable report, two lines per domain:
//!
//! ```text
//! Valid TLD? true, example.com
//! Valid Domain? true, example.com
//! ```

use std::io::{self, Write};

use crate::checks::DomainReport;

/// Write the two report lines for every row, in order. With `with_reasons`,
/// failing `Valid Domain?` lines get ` :: reason; reason` appended.
pub fn write_human<W: Write>(
    out: &mut W,
    rows: &[DomainReport],
    with_reasons: bool,
) -> io::Result<()> {
    for row in rows {
        writeln!(out, "Valid TLD? {}, {}", row.valid_tld, row.domain)?;
        if with_reasons && !row.reasons.is_empty() {
            writeln!(
                out,
                "Valid Domain? {}, {} :: {}",
                row.valid_domain,
                row.domain,
                row.reasons.join("; ")
            )?;
        } else {
            writeln!(out, "Valid Domain? {}, {}", row.valid_domain, row.domain)?;
        }
    }
    Ok(())
}

/// [`write_human`] into a `String`.
pub fn render_human(rows: &[DomainReport], with_reasons: bool) -> String {
    let mut buf = Vec::new();
    // écrire dans un Vec ne peut pas échouer
    let _ = write_human(&mut buf, rows, with_reasons);
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::validate_all;
    use crate::loader::TldSet;

    #[test]
    fn two_lines_per_domain() {
        let tlds = TldSet::from_names(["COM"]);
        let rows = validate_all(&["example.com", "nodot", "bad$.org"], &tlds);
        insta::assert_snapshot!(render_human(&rows, false), @r"
        Valid TLD? true, example.com
        Valid Domain? true, example.com
        Valid TLD? false, nodot
        Valid Domain? false, nodot
        Valid TLD? false, bad$.org
        Valid Domain? false, bad$.org
        ");
    }

    #[test]
    fn blank_domain_keeps_trailing_separator() {
        let tlds = TldSet::from_names(["com"]);
        let rows = validate_all(&[""], &tlds);
        assert_eq!(
            render_human(&rows, false),
            "Valid TLD? false, \nValid Domain? false, \n"
        );
    }

    #[test]
    fn reasons_appended_on_request() {
        let tlds = TldSet::from_names(["org"]);
        let rows = validate_all(&["bad$.org", "good.org"], &tlds);
        let out = render_human(&rows, true);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "Valid Domain? false, bad$.org :: invalid char '$'");
        assert_eq!(lines[3], "Valid Domain? true, good.org");
    }

    #[test]
    fn no_rows_no_output() {
        assert_eq!(render_human(&[], false), "");
    }
}
