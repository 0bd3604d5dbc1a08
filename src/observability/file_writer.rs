//! Size-rotated append-only file.
//!
//! Trace batches are appended one JSON document per line. Before a write that
//! would push the file past its size limit, the file is shifted into numbered
//! backups (`name.1` is the newest) and a fresh file is started, so disk usage
//! stays bounded at roughly `max_bytes * (max_backups + 1)`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;

/// Size limit of the live file (5 MB).
pub const DEFAULT_MAX_BYTES: u64 = 5 * 1024 * 1024;

/// Rotated files kept next to the live file.
pub const DEFAULT_MAX_BACKUPS: usize = 2;

/// Append-only line writer with numbered backups.
///
/// The file handle is opened lazily on first write and guarded by a `Mutex`,
/// since span exporters must be `Sync`.
pub struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    handle: Mutex<Option<File>>,
}

impl RotatingFile {
    /// Creates a writer for `path` with explicit limits.
    pub const fn new(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            path,
            max_bytes,
            max_backups,
            handle: Mutex::new(None),
        }
    }

    /// Creates a writer with [`DEFAULT_MAX_BYTES`] and [`DEFAULT_MAX_BACKUPS`].
    pub const fn with_defaults(path: PathBuf) -> Self {
        Self::new(path, DEFAULT_MAX_BYTES, DEFAULT_MAX_BACKUPS)
    }

    /// Appends `line` plus a newline, rotating first if it would not fit.
    ///
    /// # Errors
    ///
    /// Returns I/O errors from rotation, opening, writing or flushing, and an
    /// error if the lock was poisoned by a panicking writer.
    pub fn write_line(&self, line: &str) -> io::Result<()> {
        let mut handle = self
            .handle
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("writer lock poisoned: {e}")))?;

        let incoming = line.len() as u64 + 1;
        let current = fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0);
        if current > 0 && current + incoming > self.max_bytes {
            *handle = None;
            self.rotate()?;
        }

        if handle.is_none() {
            *handle = Some(OpenOptions::new().create(true).append(true).open(&self.path)?);
        }
        let Some(file) = handle.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "trace file unavailable"));
        };

        writeln!(file, "{line}")?;
        file.flush()
    }

    /// Shifts `name.N` to `name.N+1`, dropping the oldest, then moves the live
    /// file to `name.1`.
    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return match fs::remove_file(&self.path) {
                Err(e) if e.kind() != io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            };
        }

        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }

        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }

        if self.path.exists() {
            fs::rename(&self.path, self.backup_path(1))?;
        }
        Ok(())
    }

    /// `path` with `.n` appended to the file name.
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.path)
            .field("max_bytes", &self.max_bytes)
            .field("max_backups", &self.max_backups)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap_or_default()
    }

    #[test]
    fn lines_are_appended_until_the_limit() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("trace.json"), 1024, 2);

        writer.write_line("{\"a\":1}").unwrap();
        writer.write_line("{\"b\":2}").unwrap();

        assert_eq!(read(&writer.path), "{\"a\":1}\n{\"b\":2}\n");
        assert!(!writer.backup_path(1).exists());
    }

    #[test]
    fn rotation_keeps_a_bounded_number_of_backups() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("trace.json"), 16, 2);

        for line in ["line-0001", "line-0002", "line-0003", "line-0004"] {
            writer.write_line(line).unwrap();
        }

        assert_eq!(read(&writer.path), "line-0004\n");
        assert_eq!(read(&writer.backup_path(1)), "line-0003\n");
        assert_eq!(read(&writer.backup_path(2)), "line-0002\n");
        assert!(!writer.backup_path(3).exists());
    }

    #[test]
    fn zero_backups_truncates_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let writer = RotatingFile::new(dir.path().join("trace.json"), 16, 0);

        writer.write_line("line-0001").unwrap();
        writer.write_line("line-0002").unwrap();

        assert_eq!(read(&writer.path), "line-0002\n");
        assert!(!writer.backup_path(1).exists());
    }
}
