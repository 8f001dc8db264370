//! I/O utility functions

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Sibling path used while writing `path`: `curve.json` -> `curve.json.tmp`
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write content to a file atomically using write-then-rename pattern.
///
/// The content is first written to a temporary file next to the target,
/// then renamed over it, so readers never observe a partial curve.
///
/// # Example
/// ```ignore
/// atomic_write(Path::new("curve.json"), &json)?;
/// ```
pub fn atomic_write(path: &Path, content: &str) -> io::Result<()> {
    let temp_path = temp_path(path);
    fs::write(&temp_path, content)?;
    fs::rename(&temp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_atomic_write() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curve.json");

        atomic_write(&path, "[]\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[]\n");

        // Temp file should not exist
        assert!(!dir.path().join("curve.json.tmp").exists());
    }

    #[test]
    fn test_atomic_write_overwrites() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("curve.json");

        atomic_write(&path, "first").unwrap();
        atomic_write(&path, "second").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "second");
    }

    #[test]
    fn test_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("curve.json");
        assert!(atomic_write(&path, "[]").is_err());
    }
}
