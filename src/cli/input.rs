//! Reading the pasted export from a file or standard input

use crate::constants::STDIN_PATH;
use crate::{Error, Result};
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Where the export text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl InputSource {
    /// Interpret the `--input` argument; absent or `-` means stdin
    pub fn from_arg(path: Option<&Path>) -> Self {
        match path {
            Some(path) if path != Path::new(STDIN_PATH) => InputSource::File(path.to_path_buf()),
            _ => InputSource::Stdin,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            InputSource::Stdin => "standard input".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Read the whole export into memory
pub fn read_input(source: &InputSource) -> Result<String> {
    match source {
        InputSource::Stdin => {
            let stdin = io::stdin();
            if stdin.is_terminal() {
                eprintln!("Paste the export, then press Ctrl-D:");
            }
            read_from(stdin.lock(), source)
        }
        InputSource::File(path) => {
            let file = std::fs::File::open(path).map_err(|e| {
                Error::io(format!("Failed to open input file: {}", path.display()), e)
            })?;
            read_from(file, source)
        }
    }
}

/// Read all bytes from a reader as text
///
/// Invalid UTF-8 sequences are replaced rather than rejected; a paste with a
/// stray byte should still yield the rows around it.
pub fn read_from<R: Read>(mut reader: R, source: &InputSource) -> Result<String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io(format!("Failed to read {}", source.describe()), e))?;

    debug!("Read {} bytes from {}", bytes.len(), source.describe());

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(error) => {
            warn!(
                "Input from {} is not valid UTF-8; invalid bytes were replaced",
                source.describe()
            );
            Ok(String::from_utf8_lossy(error.as_bytes()).into_owned())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_input_source_from_arg() {
        assert_eq!(InputSource::from_arg(None), InputSource::Stdin);
        assert_eq!(InputSource::from_arg(Some(Path::new("-"))), InputSource::Stdin);
        assert_eq!(
            InputSource::from_arg(Some(Path::new("jan.tsv"))),
            InputSource::File(PathBuf::from("jan.tsv"))
        );
    }

    #[test]
    fn test_read_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "FACEBOOK\n2024-01-01\t\t\t\t\t\t1000\t5\n").unwrap();

        let source = InputSource::File(file.path().to_path_buf());
        let text = read_input(&source).unwrap();

        assert!(text.starts_with("FACEBOOK\n"));
        assert_eq!(text.lines().count(), 2);
    }

    #[test]
    fn test_read_missing_file() {
        let source = InputSource::File(PathBuf::from("/nonexistent/export.tsv"));
        let error = read_input(&source).unwrap_err();

        assert!(matches!(error, Error::Io { .. }));
        assert!(error.to_string().contains("/nonexistent/export.tsv"));
    }

    #[test]
    fn test_read_invalid_utf8_is_lossy() {
        let bytes: &[u8] = b"FACEBOOK\n\xff\n2024-01-01";
        let text = read_from(bytes, &InputSource::Stdin).unwrap();

        assert!(text.starts_with("FACEBOOK\n"));
        assert!(text.ends_with("2024-01-01"));
        assert!(text.contains('\u{FFFD}'));
    }
}
