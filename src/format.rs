use std::fmt::Display;
use std::panic::Location;
use std::path::Path;

use chrono::{DateTime, Utc};

use crate::model::level::Level;

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Renders every value with `Display`, each followed by a single space.
pub fn stringify(values: &[&dyn Display]) -> String {
    values.iter().fold(String::new(), |mut buf, value| {
        buf.push_str(&value.to_string());
        buf.push(' ');
        buf
    })
}

/// Last path component of a source file, as reported by `Location::file`.
pub fn basename(file: &str) -> &str {
    Path::new(file)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(file)
}

/// Builds one complete line, newline included.
pub fn format_line(
    now: DateTime<Utc>,
    caller: &Location<'_>,
    level: Level,
    msg: &str,
) -> String {
    format!(
        "{} {}:{} {} - {}\n",
        now.format(TIMESTAMP_FORMAT),
        basename(caller.file()),
        caller.line(),
        level,
        msg
    )
}
