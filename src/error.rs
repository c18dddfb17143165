//! # Error Types
//!
//! Parsing a chart never fails: every input is arbitrary text and every classification step has a
//! literal-text fallback. The only fallible operations are reading and writing files and loading
//! a user config, which are reported through [`ChartError`].

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    /// The chart or config file could not be read.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChartError;
    /// let err = ChartError::Read {
    ///     path: "song.txt".into(),
    ///     source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
    /// };
    /// assert_eq!(err.to_string(), "Error reading song.txt: not found");
    /// ```
    #[error("Error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Rendered output could not be written.
    #[error("Error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A config file exists but is not valid TOML for [`Config`](crate::Config).
    #[error("Invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
