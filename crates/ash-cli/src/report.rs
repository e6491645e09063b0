use crate::error::{CliError, Result};
use ash_core::engine::scanner::ScoreEntry;
use std::path::Path;

/// Writes the profile as a CSV report, one row per window.
///
/// The header row comes from the serde renames on [`ScoreEntry`] and matches
/// the original ASH report format column for column.
pub fn write_csv(path: &Path, entries: &[ScoreEntry]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).map_err(|e| CliError::Report {
        path: path.to_path_buf(),
        source: e,
    })?;

    for entry in entries {
        writer.serialize(entry).map_err(|e| CliError::Report {
            path: path.to_path_buf(),
            source: e,
        })?;
    }
    writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn entry(position: usize) -> ScoreEntry {
        ScoreEntry {
            position,
            sequence: "PEPTIDE".to_string(),
            ash_score: 0.25,
            antigenicity: 0.43,
            analog_sequence: "PEPTYDE".to_string(),
        }
    }

    #[test]
    fn write_csv_emits_the_original_header_row() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_csv(&path, &[entry(0)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next(),
            Some("index,sequence,ash_score,antigenicty,analog_sequence")
        );
        assert_eq!(lines.next(), Some("0,PEPTIDE,0.25,0.43,PEPTYDE"));
    }

    #[test]
    fn write_csv_formats_whole_number_scores_as_floats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let zero = ScoreEntry {
            position: 0,
            sequence: "PEPTIDE".to_string(),
            ash_score: 0.0,
            antigenicity: 0.0,
            analog_sequence: "PEPTIDE".to_string(),
        };
        write_csv(&path, &[zero]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().nth(1), Some("0,PEPTIDE,0.0,0.0,PEPTIDE"));
    }

    #[test]
    fn write_csv_writes_one_row_per_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_csv(&path, &[entry(0), entry(1), entry(2)]).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        // Header plus three data rows.
        assert_eq!(content.lines().count(), 4);
    }

    #[test]
    fn write_csv_with_no_entries_is_an_error_free_noop() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");
        write_csv(&path, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn write_csv_rejects_an_unwritable_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("report.csv");
        assert!(matches!(
            write_csv(&path, &[entry(0)]),
            Err(CliError::Report { .. })
        ));
    }
}
