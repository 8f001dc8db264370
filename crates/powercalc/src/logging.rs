//! File logging under the data directory.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "powercalc.log";

/// Append-only log that is cut back to its most recent entries once it
/// grows past `limit`
struct LogFile {
    path: PathBuf,
    limit: u64,
    /// Bytes of recent output a trim keeps
    retain: u64,
}

impl LogFile {
    fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(LOG_FILE),
            limit: 5 * 1024 * 1024,
            retain: 1024 * 1024,
        }
    }

    /// Keep the last `retain` bytes, starting at a line boundary.
    /// Returns how many bytes were removed.
    fn trim(&self) -> io::Result<u64> {
        let len = match fs::metadata(&self.path) {
            Ok(meta) => meta.len(),
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e),
        };
        if len <= self.limit {
            return Ok(0);
        }

        let mut tail = Vec::new();
        let mut file = File::open(&self.path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(self.retain)))?;
        file.read_to_end(&mut tail)?;

        let start = tail.iter().position(|&b| b == b'\n').map_or(0, |i| i + 1);
        let kept = &tail[start..];
        let removed = len - kept.len() as u64;

        let mut file = File::create(&self.path)?;
        writeln!(file, "--- {removed} bytes of older entries removed ---")?;
        file.write_all(kept)?;
        Ok(removed)
    }

    fn open(&self) -> io::Result<File> {
        OpenOptions::new().create(true).append(true).open(&self.path)
    }
}

/// Send `tracing` output to `{data_dir}/powercalc.log`.
///
/// `RUST_LOG` overrides `level`, which otherwise applies to this crate while
/// the engine logs warnings only. The file is trimmed to its last 1 MB of
/// entries whenever it has grown past 5 MB.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log = LogFile::in_dir(data_dir);
    let trimmed = log.trim().unwrap_or_else(|e| {
        eprintln!("Warning: could not trim {}: {e}", log.path.display());
        0
    });

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("powercalc={level},powercalc_core=warn")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(log.open()?))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(path = %log.path.display(), "logging initialized");
    if trimmed > 0 {
        tracing::debug!(bytes = trimmed, "trimmed log file");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn small_log(dir: &Path) -> LogFile {
        LogFile {
            path: dir.join(LOG_FILE),
            limit: 500,
            retain: 25,
        }
    }

    #[test]
    fn test_small_log_is_left_alone() {
        let dir = tempdir().unwrap();
        let log = small_log(dir.path());
        fs::write(&log.path, "line one\nline two\n").unwrap();

        assert_eq!(log.trim().unwrap(), 0);
        assert_eq!(fs::read_to_string(&log.path).unwrap(), "line one\nline two\n");
    }

    #[test]
    fn test_trim_keeps_whole_recent_lines() {
        let dir = tempdir().unwrap();
        let log = small_log(dir.path());
        let content: String = (0..100).map(|i| format!("entry {i:03}\n")).collect();
        fs::write(&log.path, &content).unwrap();

        // Last 25 bytes hold a partial line followed by "entry 098" and "entry 099"
        assert_eq!(log.trim().unwrap(), 980);
        let trimmed = fs::read_to_string(&log.path).unwrap();
        let mut lines = trimmed.lines();
        assert_eq!(lines.next(), Some("--- 980 bytes of older entries removed ---"));
        assert_eq!(lines.collect::<Vec<_>>(), vec!["entry 098", "entry 099"]);
    }

    #[test]
    fn test_missing_log_is_not_an_error() {
        let dir = tempdir().unwrap();
        assert_eq!(LogFile::in_dir(dir.path()).trim().unwrap(), 0);
    }

    #[test]
    fn test_open_appends() {
        let dir = tempdir().unwrap();
        let log = small_log(dir.path());
        fs::write(&log.path, "first\n").unwrap();
        log.open().unwrap().write_all(b"second\n").unwrap();
        assert_eq!(fs::read_to_string(&log.path).unwrap(), "first\nsecond\n");
    }
}
