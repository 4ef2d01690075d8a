pub mod args;
pub mod domain;
pub mod errors;
pub mod extract;
pub mod input;
pub mod output;
pub mod stats;
pub mod utils;

pub use args::Args;
pub use errors::{CleanError, Result};
pub use extract::{clean_subdomains, extract_subdomains, print_summary};
pub use stats::{ExtractionResult, ExtractionStats, SubdomainSet};
