// Standard library
use std::env;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

// Project imports
use crate::settings::constants::DEFAULT_LOG_FILE_NAME;

/// Append-only log file shared by the whole process.
#[derive(Debug)]
pub struct LogSink {
    file: File,
}

impl LogSink {
    /// Opens `path` for appending, creating it if needed.
    pub fn open(path: &Path) -> io::Result<Self> {
        let file: File = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self { file })
    }

    /// Writer handed to the tracing subscriber.
    pub fn into_writer(self) -> Mutex<File> {
        Mutex::new(self.file)
    }
}

/// `nsrestart.log` next to the executable, or in the working directory when
/// the executable location is unknown.
pub fn default_log_path() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_LOG_FILE_NAME)
}
