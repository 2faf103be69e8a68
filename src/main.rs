use clap::Parser;
use renamer::cli::{Cli, run};

fn main() {
    let cli = Cli::parse();

    // Per-file failures are already reported; the batch itself always succeeds.
    run(&cli);
}
