//! CSV input: lossy decoding, delimiter sniffing and hostname column lookup.

use csv::{Reader, ReaderBuilder, Trim};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use tracing::{info, warn};

use crate::errors::{CleanError, Result};

/// Header names that may hold the hostname, matched case-insensitively.
pub const HOST_HEADERS: [&str; 5] = ["host", "input", "name", "url", "domain"];

/// Number of characters looked at when guessing the delimiter.
pub const SNIFF_SAMPLE_CHARS: usize = 1024;

/// Delimiters tried by the sniffer, in order of preference.
const DELIMITER_CANDIDATES: [u8; 5] = [b',', b'\t', b';', b'|', b':'];

/// Field layout used to parse the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    /// Whitespace after a delimiter is not part of the field.
    pub skip_initial_space: bool,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: b',',
            skip_initial_space: false,
        }
    }
}

/// Read a file as UTF-8, dropping any invalid byte sequences.
pub fn read_lossy_utf8(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CleanError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CleanError::unexpected(e),
    })?;

    Ok(decode_dropping_invalid(&bytes))
}

fn decode_dropping_invalid(bytes: &[u8]) -> String {
    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }
    text
}

/// Guess the field delimiter from the start of the document.
///
/// A candidate wins when it occurs the same, non-zero number of times
/// (outside double quotes) on every complete line of the sample. Returns
/// `None` when no candidate is consistent.
pub fn sniff_delimiter(text: &str) -> Option<u8> {
    let sample: String = text.chars().take(SNIFF_SAMPLE_CHARS).collect();
    let truncated = sample.len() < text.len();

    let mut lines: Vec<&str> = sample
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    // The last line of a cut-off sample is incomplete.
    if truncated && lines.len() > 1 {
        lines.pop();
    }

    let first = *lines.first()?;
    DELIMITER_CANDIDATES.into_iter().find(|&delimiter| {
        let expected = count_unquoted(first, delimiter);
        expected > 0
            && lines
                .iter()
                .all(|line| count_unquoted(line, delimiter) == expected)
    })
}

/// Guess the delimiter and whether fields are padded after it, as in
/// `ip, host`. Padding is assumed when every delimiter on the first line is
/// followed by a space.
pub fn sniff_dialect(text: &str) -> Option<Dialect> {
    let delimiter = sniff_delimiter(text)?;
    let first = text.lines().find(|line| !line.trim().is_empty())?;

    let bare = first.bytes().filter(|&b| b == delimiter).count();
    let padded = first
        .as_bytes()
        .windows(2)
        .filter(|pair| pair[0] == delimiter && pair[1] == b' ')
        .count();

    Some(Dialect {
        delimiter,
        skip_initial_space: bare == padded,
    })
}

fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }
    count
}

/// Index of the first header whose lowercase form is in [`HOST_HEADERS`].
pub fn detect_column<S: AsRef<str>>(headers: &[S]) -> Option<usize> {
    headers
        .iter()
        .position(|h| HOST_HEADERS.contains(&h.as_ref().to_lowercase().as_str()))
}

/// Streams raw hostname values out of the detected column.
pub struct HostnameReader<R> {
    reader: Reader<R>,
    column: usize,
    column_name: String,
}

impl<R: Read> HostnameReader<R> {
    /// Build a reader for `dialect` and locate the hostname column.
    pub fn new(source: R, dialect: Dialect) -> Result<Self> {
        let mut builder = ReaderBuilder::new();
        builder.delimiter(dialect.delimiter).flexible(true);
        // csv has no leading-only trim.
        if dialect.skip_initial_space {
            builder.trim(Trim::All);
        }
        let mut reader = builder.from_reader(source);

        let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();
        let column = detect_column(&headers)
            .ok_or_else(|| CleanError::MissingColumn {
                headers: headers.clone(),
            })?;

        info!(
            action = "detect",
            component = "hostname_column",
            column = headers[column].as_str(),
            index = column,
            header_count = headers.len(),
            "Hostname column detected"
        );

        Ok(Self {
            reader,
            column,
            column_name: headers[column].clone(),
        })
    }

    pub fn column_name(&self) -> &str {
        &self.column_name
    }

    /// Raw hostname per data row. Rows too short to reach the column yield
    /// an empty string.
    pub fn hostnames(&mut self) -> impl Iterator<Item = Result<String>> + '_ {
        let column = self.column;
        self.reader.records().map(move |record| {
            let record = record?;
            Ok(record.get(column).unwrap_or_default().to_string())
        })
    }
}

impl<'a> HostnameReader<&'a [u8]> {
    /// Sniff the dialect from `text`, falling back to plain commas.
    pub fn from_text(text: &'a str) -> Result<Self> {
        let dialect = match sniff_dialect(text) {
            Some(dialect) => {
                info!(
                    action = "sniff",
                    component = "csv_dialect",
                    delimiter = %char::from(dialect.delimiter).escape_default(),
                    skip_initial_space = dialect.skip_initial_space,
                    "Dialect detected"
                );
                dialect
            }
            None => {
                warn!(
                    action = "sniff",
                    component = "csv_dialect",
                    "Could not determine delimiter, falling back to comma"
                );
                Dialect::default()
            }
        };

        Self::new(text.as_bytes(), dialect)
    }
}
