//! Append-mode file destination

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use super::traits::{Destination, DestinationKind};
use crate::error::{LogError, LogResult};
use crate::level::LevelFilter;

/// A destination that appends lines to a file
///
/// The file is opened once, in append mode, and held open until the
/// destination is dropped.
pub struct FileDestination {
    path: PathBuf,
    file: Mutex<File>,
    threshold: LevelFilter,
}

impl FileDestination {
    /// Open (creating if needed) `path` for appending
    pub fn open(path: impl AsRef<Path>, threshold: impl Into<LevelFilter>) -> LogResult<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| LogError::file_open(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            file: Mutex::new(file),
            threshold: threshold.into(),
        })
    }

    /// Path of the underlying file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Destination for FileDestination {
    fn kind(&self) -> DestinationKind {
        DestinationKind::File
    }

    fn threshold(&self) -> LevelFilter {
        self.threshold
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut file = self.file.lock();
        writeln!(file, "{}", line)?;
        file.flush()
    }

    fn flush(&self) -> io::Result<()> {
        self.file.lock().flush()
    }
}

impl std::fmt::Debug for FileDestination {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileDestination")
            .field("path", &self.path)
            .field("threshold", &self.threshold)
            .finish()
    }
}
