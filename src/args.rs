use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "subclean",
    about = "Extract and clean subdomains from a CSV file",
    version,
    long_about = None
)]
pub struct Args {
    /// Path to the input CSV file
    pub input_csv: PathBuf,

    /// The root domain to filter by (e.g., example.com)
    pub root_domain: String,

    /// Name of the output text file
    #[arg(short, long, default_value = "clean_subdomains.txt")]
    pub output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positionals_and_default_output() {
        let args = Args::parse_from(["subclean", "report.csv", "momentick.app"]);
        assert_eq!(args.input_csv.to_str(), Some("report.csv"));
        assert_eq!(args.root_domain, "momentick.app");
        assert_eq!(args.output.to_str(), Some("clean_subdomains.txt"));
        assert!(!args.verbose);
    }

    #[test]
    fn parses_output_flag() {
        let args = Args::parse_from(["subclean", "r.csv", "a.com", "-o", "subs.txt"]);
        assert_eq!(args.output.to_str(), Some("subs.txt"));
        let args = Args::parse_from(["subclean", "r.csv", "a.com", "--output", "x.txt", "-v"]);
        assert_eq!(args.output.to_str(), Some("x.txt"));
        assert!(args.verbose);
    }
}
