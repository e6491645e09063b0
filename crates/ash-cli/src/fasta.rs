use crate::error::{CliError, Result};
use bio::io::fasta;
use std::path::Path;

/// Reads a protein FASTA file into a single header-free, newline-free
/// residue string.
///
/// Files with more than one record are concatenated in record order, and
/// residues are normalized to uppercase so that lowercase-masked input still
/// maps onto the scoring tables.
pub fn read_sequence(path: &Path) -> Result<String> {
    let reader = fasta::Reader::from_file(path).map_err(|e| CliError::FastaParsing {
        path: path.to_path_buf(),
        source: e.into(),
    })?;

    let mut sequence = String::new();
    for record in reader.records() {
        let record = record.map_err(|e| CliError::FastaParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })?;
        let residues =
            std::str::from_utf8(record.seq()).map_err(|e| CliError::FastaParsing {
                path: path.to_path_buf(),
                source: e.into(),
            })?;
        sequence.push_str(residues);
    }

    if sequence.is_empty() {
        return Err(CliError::EmptyFasta {
            path: path.to_path_buf(),
        });
    }

    Ok(sequence.to_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn write_fasta(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        write!(file, "{}", content).unwrap();
        path
    }

    #[test]
    fn read_sequence_strips_header_and_joins_lines() {
        let dir = tempdir().unwrap();
        let path = write_fasta(&dir, "single.fasta", ">sp|P12345| test protein\nPEPTIDE\nDERK\n");
        assert_eq!(read_sequence(&path).unwrap(), "PEPTIDEDERK");
    }

    #[test]
    fn read_sequence_concatenates_multiple_records() {
        let dir = tempdir().unwrap();
        let path = write_fasta(&dir, "multi.fasta", ">one\nPEPT\n>two\nIDE\n");
        assert_eq!(read_sequence(&path).unwrap(), "PEPTIDE");
    }

    #[test]
    fn read_sequence_uppercases_masked_residues() {
        let dir = tempdir().unwrap();
        let path = write_fasta(&dir, "masked.fasta", ">masked\npepTIDE\n");
        assert_eq!(read_sequence(&path).unwrap(), "PEPTIDE");
    }

    #[test]
    fn read_sequence_rejects_a_missing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent.fasta");
        assert!(matches!(
            read_sequence(&path),
            Err(CliError::FastaParsing { .. })
        ));
    }

    #[test]
    fn read_sequence_rejects_a_file_without_sequence_data() {
        let dir = tempdir().unwrap();
        let path = write_fasta(&dir, "empty.fasta", ">header only\n");
        assert!(matches!(read_sequence(&path), Err(CliError::EmptyFasta { .. })));
    }
}
