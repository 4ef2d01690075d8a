use std::collections::HashSet;

/// Unique collapsed subdomains gathered during one run.
#[derive(Debug, Default)]
pub struct SubdomainSet {
    entries: HashSet<String>,
}

impl SubdomainSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the subdomain was not already present.
    pub fn insert(&mut self, subdomain: String) -> bool {
        self.entries.insert(subdomain)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Members in ascending byte order.
    pub fn sorted(&self) -> impl Iterator<Item = &str> {
        let mut sorted: Vec<&str> = self.entries.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.into_iter()
    }
}

#[derive(Debug, Default)]
pub struct ExtractionStats {
    pub column: String,
    pub rows_read: u64,
    pub rows_kept: u64,
    pub rows_skipped: u64,
}

#[derive(Debug)]
pub struct ExtractionResult {
    pub subdomains: SubdomainSet,
    pub stats: ExtractionStats,
}
