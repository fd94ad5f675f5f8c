//! Pipe-delimited account export.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use super::{Workshop, WorkshopError, WorkshopResult};

/// Field separator of an exported row.
pub const FIELD_SEPARATOR: char = '|';

impl Workshop {
    /// Writes one `NUMBER|AMOUNT|CURRENCY` line per account, in traversal
    /// order, and returns the number of rows written.
    pub fn write_accounts<W: Write>(&self, writer: W) -> io::Result<usize> {
        let mut writer = BufWriter::new(writer);
        let mut rows = 0;
        for account in self.accounts() {
            writeln!(
                writer,
                "{}{FIELD_SEPARATOR}{}{FIELD_SEPARATOR}{}",
                account.number, account.amount, account.currency
            )?;
            rows += 1;
        }
        writer.flush()?;
        Ok(rows)
    }

    /// Creates or truncates `path` and writes every account to it.
    ///
    /// A failure part way through leaves whatever was already written.
    ///
    /// # Errors
    ///
    /// Returns [`WorkshopError::Export`] on any I/O failure.
    pub fn export_accounts(&self, path: impl AsRef<Path>) -> WorkshopResult<usize> {
        let path = path.as_ref();
        let to_export_error = |source| WorkshopError::Export {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(to_export_error)?;
        let rows = self.write_accounts(file).map_err(to_export_error)?;

        info!(path = %path.display(), rows, "Accounts exported");
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn workshop() -> Workshop {
        Workshop::new()
    }

    #[rstest]
    fn test_write_accounts_rows(workshop: Workshop) {
        let mut buffer = Vec::new();
        let rows = workshop.write_accounts(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(rows, 35);
        assert_eq!(lines.len(), 35);
        assert_eq!(lines[0], "PL10001|1520.50|PLN");
        assert_eq!(lines[4], "PL10005|12000.00|USD");
        assert_eq!(lines[34], "PL10035|6400.00|PLN");
        assert!(text.ends_with('\n'));
    }

    #[rstest]
    fn test_rows_follow_traversal_order(workshop: Workshop) {
        let mut buffer = Vec::new();
        workshop.write_accounts(&mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        let exported: Vec<&str> = text
            .lines()
            .filter_map(|line| line.split(FIELD_SEPARATOR).next())
            .collect();
        let expected: Vec<&str> = workshop.accounts().map(|a| a.number.as_str()).collect();
        assert_eq!(exported, expected);
    }

    #[rstest]
    fn test_export_accounts_to_file(workshop: Workshop) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.txt");

        let rows = workshop.export_accounts(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(rows, 35);
        assert_eq!(content.lines().count(), 35);
        assert!(content.lines().all(|l| l.split('|').count() == 3));
    }

    #[rstest]
    fn test_export_truncates_existing_file(workshop: Workshop) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("accounts.txt");
        std::fs::write(&path, "stale\n".repeat(100)).unwrap();

        workshop.export_accounts(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale"));
    }

    #[rstest]
    fn test_export_into_missing_directory_fails(workshop: Workshop) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("accounts.txt");

        match workshop.export_accounts(&path) {
            Err(WorkshopError::Export { path: failed, source }) => {
                assert_eq!(failed, path);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected export error, got {other:?}"),
        }
    }
}
