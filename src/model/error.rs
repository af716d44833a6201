use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LogError {
    #[error("jelly: log name provided is empty")]
    EmptyName,

    #[error("jelly: could not resolve the current user's home directory")]
    UserResolution,

    #[error("jelly: could not create log directory {}: {source}", path.display())]
    DirCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("jelly: could not create log file {}: {source}", path.display())]
    FileCreate {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
