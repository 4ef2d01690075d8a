use anyhow::Result;
use clap::Parser;
use tracing::debug;

use subclean::utils::setup_logging;
use subclean::{clean_subdomains, print_summary, Args};

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    // Failures are reported on stdout and leave the output untouched; the
    // process still exits normally.
    match clean_subdomains(&args.input_csv, &args.output, &args.root_domain) {
        Ok(count) => print_summary(count, &args.output),
        Err(e) => {
            println!("{}", e);
            debug!(action = "abort", component = "run", error = %e, "Run failed");
        }
    }

    Ok(())
}
