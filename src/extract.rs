use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::domain::{collapse_subdomain, normalize_hostname, normalize_root};
use crate::errors::Result;
use crate::input::{read_lossy_utf8, HostnameReader};
use crate::output::write_subdomains;
use crate::stats::{ExtractionResult, ExtractionStats, SubdomainSet};

/// Read `input_csv` and collect the unique parent subdomains of `root_domain`.
pub fn extract_subdomains(input_csv: &Path, root_domain: &str) -> Result<ExtractionResult> {
    let start_time = Instant::now();
    let root_domain = normalize_root(root_domain);

    println!("--- Processing {} ---", input_csv.display());
    println!("Target Root Domain: {}", root_domain);

    let text = read_lossy_utf8(input_csv)?;
    let mut reader = HostnameReader::from_text(&text)?;
    println!("Found hostname column: '{}'", reader.column_name());

    let mut subdomains = SubdomainSet::new();
    let mut stats = ExtractionStats {
        column: reader.column_name().to_string(),
        ..Default::default()
    };

    for raw in reader.hostnames() {
        let raw = raw?;
        stats.rows_read += 1;

        match collapse_subdomain(&normalize_hostname(&raw), &root_domain) {
            Some(subdomain) => {
                stats.rows_kept += 1;
                subdomains.insert(subdomain);
            }
            None => {
                debug!(action = "skip", component = "row_filter", hostname = %raw, "Row skipped");
                stats.rows_skipped += 1;
            }
        }
    }

    info!(
        action = "complete",
        component = "subdomain_extraction",
        column = stats.column.as_str(),
        rows_read = stats.rows_read,
        rows_kept = stats.rows_kept,
        rows_skipped = stats.rows_skipped,
        unique_subdomains = subdomains.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Subdomain extraction completed"
    );

    Ok(ExtractionResult { subdomains, stats })
}

/// Extract from `input_csv` and write the sorted result to `output`.
///
/// Nothing is written when extraction fails. Returns the number of lines
/// written.
pub fn clean_subdomains(input_csv: &Path, output: &Path, root_domain: &str) -> Result<usize> {
    let result = extract_subdomains(input_csv, root_domain)?;
    write_subdomains(output, result.subdomains.sorted())
}

pub fn print_summary(count: usize, output: &Path) {
    println!("\nSuccess! Extracted {} unique parent subdomains.", count);
    println!("Saved to: {}", output.display());
}
