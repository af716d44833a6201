//! A no frills file logger.
//!
//! ```no_run
//! let log = jelly::Logger::new("app")?;
//!
//! jelly::info!(log, "hello", "world", 42, true);
//! jelly::debug!(log, "cruel", "world", 66.6, false);
//! # Ok::<(), jelly::LogError>(())
//! ```
//!
//! Lines land in `~/.jelly/app.log` as
//! `2024/01/02 03:04:05 main.rs:4 INFO - hello world 42 true `.

mod format;
mod logger;
mod model;

pub use logger::Logger;
pub use model::error::LogError;
pub use model::level::Level;

/// Writes the given values to `$log` at the `INFO` level.
#[macro_export]
macro_rules! info {
    ($log:expr $(, $value:expr)* $(,)?) => {
        $log.info(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Writes the given values to `$log` at the `DEBUG` level.
#[macro_export]
macro_rules! debug {
    ($log:expr $(, $value:expr)* $(,)?) => {
        $log.debug(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}

/// Writes the given values to `$log` at the `DIE` level and exits with status 1.
#[macro_export]
macro_rules! die {
    ($log:expr $(, $value:expr)* $(,)?) => {
        $log.die(&[$(&$value as &dyn ::std::fmt::Display),*])
    };
}
