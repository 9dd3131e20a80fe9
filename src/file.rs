use std::fs;
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Path argument that means "read standard input"
pub const STDIN_PATH: &str = "-";

/// An input text loaded into memory
#[derive(Debug, Clone)]
pub struct SourceText {
    /// File path, or `<stdin>`
    pub origin: String,
    /// Text as valid UTF-8
    pub content: String,
    /// BLAKE3 hash of the content (hex-encoded)
    pub checksum: String,
}

/// Error types for reading input texts
#[derive(Debug, Error)]
pub enum FileError {
    #[error("File not found: {0}")]
    NotFound(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Invalid UTF-8 in {0}")]
    InvalidUtf8(String),
}

/// BLAKE3 checksum of a text, hex-encoded
pub fn checksum(content: &str) -> String {
    blake3::hash(content.as_bytes()).to_hex().to_string()
}

impl SourceText {
    pub fn from_bytes(origin: impl Into<String>, bytes: Vec<u8>) -> Result<Self, FileError> {
        let origin = origin.into();
        let content = String::from_utf8(bytes).map_err(|_| FileError::InvalidUtf8(origin.clone()))?;
        let checksum = checksum(&content);

        Ok(Self {
            origin,
            content,
            checksum,
        })
    }
}

/// Read a text file with UTF-8 validation
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<SourceText, FileError> {
    let path_ref = path.as_ref();

    if !path_ref.exists() {
        return Err(FileError::NotFound(path_ref.display().to_string()));
    }

    let bytes = fs::read(path_ref)?;
    SourceText::from_bytes(path_ref.display().to_string(), bytes)
}

/// Read from a reader, e.g. standard input
pub fn read_from<R: Read>(origin: &str, mut reader: R) -> Result<SourceText, FileError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    SourceText::from_bytes(origin, bytes)
}

/// Read a file, or standard input when `path` is `-`
pub fn read_source(path: &str) -> Result<SourceText, FileError> {
    if path == STDIN_PATH {
        read_from("<stdin>", io::stdin().lock())
    } else {
        read_file(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_read_file_valid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("original.txt");
        let content = "The cat sat\non the mat.";
        fs::write(&file_path, content).unwrap();

        let source = read_file(&file_path).unwrap();

        assert_eq!(source.content, content);
        assert_eq!(source.origin, file_path.display().to_string());
        assert_eq!(source.checksum, checksum(content));
        assert_eq!(source.checksum.len(), 64);
        assert!(source.checksum.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_read_file_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("binary.txt");
        fs::write(&file_path, [0xFFu8, 0xFE, 0xFD]).unwrap();

        match read_file(&file_path) {
            Err(FileError::InvalidUtf8(p)) => assert_eq!(p, file_path.display().to_string()),
            other => panic!("Expected FileError::InvalidUtf8, got {other:?}"),
        }
    }

    #[test]
    fn test_read_file_not_found() {
        let file_path = PathBuf::from("/nonexistent/path/that/does/not/exist.txt");

        match read_file(&file_path) {
            Err(FileError::NotFound(p)) => assert!(p.contains("nonexistent")),
            other => panic!("Expected FileError::NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_read_from_reader() {
        let source = read_from("<stdin>", "hello world".as_bytes()).unwrap();

        assert_eq!(source.origin, "<stdin>");
        assert_eq!(source.content, "hello world");
    }

    #[test]
    fn test_read_source_dispatches_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("rewritten.txt");
        fs::write(&file_path, "hi").unwrap();

        let source = read_source(file_path.to_str().unwrap()).unwrap();
        assert_eq!(source.content, "hi");
    }

    #[test]
    fn test_checksum_of_empty_text() {
        assert_eq!(
            checksum(""),
            "af1349b9f5f9a1a6a0404dea36dcc9499bcb25c9adc112b7cc9a93cae41f3262"
        );
    }
}
