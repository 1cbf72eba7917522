use clap::Parser;
use tradecal::cli::{run, Cli};

fn main() -> std::process::ExitCode {
    run(Cli::parse())
}
