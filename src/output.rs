use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::errors::{CleanError, Result};

/// Write one subdomain per line, each terminated by `\n`. The file is
/// created or truncated.
pub fn write_subdomains<'a, I>(path: &Path, subdomains: I) -> Result<usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let start_time = Instant::now();
    let write_err = |source: std::io::Error| CleanError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut writer = BufWriter::new(File::create(path).map_err(write_err)?);
    let mut written = 0;
    for subdomain in subdomains {
        writeln!(writer, "{}", subdomain).map_err(write_err)?;
        written += 1;
    }
    writer.flush().map_err(write_err)?;

    info!(
        action = "complete",
        component = "output_writer",
        file_path = ?path,
        line_count = written,
        duration_ms = start_time.elapsed().as_millis(),
        "Output written"
    );
    Ok(written)
}
