use std::fmt::Display;
use std::fs::{self, File};
use std::io::{self, Write};
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process;

use parking_lot::Mutex;

use crate::format::{format_line, stringify};
use crate::model::error::LogError;
use crate::model::level::Level;

const LOG_SUFFIX: &str = ".log";
const BASE_DIR: &str = ".jelly";

struct Sink {
    file: File,
    last_error: Option<io::Error>,
}

/// A single log file, shared by reference between any number of threads.
pub struct Logger {
    path: PathBuf,
    name: String,
    sink: Mutex<Sink>,
}

impl Logger {
    /// Creates (truncating) `~/.jelly/<log_name>`, appending `.log` to the
    /// name when it does not already contain it.
    pub fn new(log_name: &str) -> Result<Self, LogError> {
        // Checked before the home directory is resolved.
        if log_name.is_empty() {
            return Err(LogError::EmptyName);
        }

        let home = dirs::home_dir().ok_or(LogError::UserResolution)?;
        Self::in_dir(home.join(BASE_DIR), log_name)
    }

    /// Same as [`Logger::new`] but rooted at `base` instead of `~/.jelly`.
    pub fn in_dir(base: impl AsRef<Path>, log_name: &str) -> Result<Self, LogError> {
        if log_name.is_empty() {
            return Err(LogError::EmptyName);
        }

        let base = base.as_ref();
        let name = normalize_name(log_name);

        if !base.is_dir() {
            fs::create_dir_all(base).map_err(|source| LogError::DirCreate {
                path: base.to_path_buf(),
                source,
            })?;
        }

        let path = base.join(&name);
        let file = File::create(&path).map_err(|source| LogError::FileCreate {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), "log file created");

        Ok(Logger::from_file(path, name, file))
    }

    fn from_file(path: PathBuf, name: String, file: File) -> Self {
        Logger {
            path,
            name,
            sink: Mutex::new(Sink {
                file,
                last_error: None,
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Information users need to know about.
    #[track_caller]
    pub fn info(&self, values: &[&dyn Display]) {
        self.write(Level::Info, Location::caller(), values);
    }

    /// Information a developer needs to know about.
    #[track_caller]
    pub fn debug(&self, values: &[&dyn Display]) {
        self.write(Level::Debug, Location::caller(), values);
    }

    /// Writes a `DIE` line, then exits the process with status 1.
    #[track_caller]
    pub fn die(&self, values: &[&dyn Display]) -> ! {
        self.write(Level::Die, Location::caller(), values);
        process::exit(1)
    }

    /// Returns and clears the most recent write failure, if any.
    pub fn take_write_error(&self) -> Option<io::Error> {
        self.sink.lock().last_error.take()
    }

    fn write(&self, level: Level, caller: &Location<'_>, values: &[&dyn Display]) {
        let mut sink = self.sink.lock();
        let line = format_line(chrono::Utc::now(), caller, level, &stringify(values));

        if let Err(err) = sink.file.write_all(line.as_bytes()) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to write log line");
            sink.last_error = Some(err);
        }
    }
}

fn normalize_name(log_name: &str) -> String {
    if log_name.contains(LOG_SUFFIX) {
        log_name.to_string()
    } else {
        format!("{}{}", log_name, LOG_SUFFIX)
    }
}
