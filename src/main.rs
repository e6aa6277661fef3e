use clap::Parser;

use sortgrid::cli::{run, Cli};
use sortgrid::logging::init_tracing;

fn main() {
    init_tracing();
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
