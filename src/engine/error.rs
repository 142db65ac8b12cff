use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReaderError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("File is empty: {}", .0.display())]
    EmptyFile(PathBuf),

    #[error("Start line {line} is past the end of the document ({total} lines)")]
    StartLineOutOfRange { line: usize, total: usize },
}

pub type Result<T> = std::result::Result<T, ReaderError>;

/// Key that maps to no reading command. Never fatal: the session ignores it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Unrecognized key: {0:?}")]
    Unrecognized(char),
}

pub fn load_file_safe(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(ReaderError::EmptyFile(path.to_path_buf()));
    }

    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_error() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"  \n\t\n").unwrap();

        match load_file_safe(file.path()) {
            Err(ReaderError::EmptyFile(path)) => assert_eq!(path, file.path()),
            other => panic!("Expected EmptyFile error, got {:?}", other),
        }
    }

    #[test]
    fn test_nonexistent_file_error() {
        let result = load_file_safe("nonexistent_file_12345.txt");
        assert!(matches!(result, Err(ReaderError::Io(_))));
    }

    #[test]
    fn test_valid_file_loads() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();

        assert_eq!(load_file_safe(file.path()).unwrap(), "hello world");
    }

    #[test]
    fn test_unrecognized_key_message() {
        let err = InputError::Unrecognized('x');
        assert_eq!(err.to_string(), "Unrecognized key: 'x'");
    }
}
