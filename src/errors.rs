//! Error kinds for a cleaning run.
//!
//! Every variant is terminal: the run stops and no output file is written
//! (or, for `Write`, the collected results are lost). The `Display` text is
//! what the user sees on the console.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CleanError>;

#[derive(Debug, Error)]
pub enum CleanError {
    /// The input CSV does not exist.
    #[error("Error: File {} not found.", .path.display())]
    FileNotFound { path: PathBuf },

    /// None of the headers looks like a hostname column.
    #[error("Error: Could not find a 'Host' or 'Input' column in CSV headers: {headers:?}")]
    MissingColumn { headers: Vec<String> },

    /// The output file could not be created or written.
    #[error("Error writing to file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Anything else that went wrong while reading or parsing the input.
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

impl CleanError {
    pub fn unexpected(err: impl std::fmt::Display) -> Self {
        CleanError::Unexpected(err.to_string())
    }
}

impl From<csv::Error> for CleanError {
    fn from(err: csv::Error) -> Self {
        CleanError::unexpected(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_column_lists_headers() {
        let err = CleanError::MissingColumn {
            headers: vec!["ip".to_string(), "port".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Error: Could not find a 'Host' or 'Input' column in CSV headers: [\"ip\", \"port\"]"
        );
    }

    #[test]
    fn file_not_found_names_path() {
        let err = CleanError::FileNotFound {
            path: PathBuf::from("missing.csv"),
        };
        assert_eq!(err.to_string(), "Error: File missing.csv not found.");
    }
}
