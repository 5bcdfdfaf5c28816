use clap::Parser;
use waypoint_extractor::cli::{run, Cli};
use waypoint_extractor::error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
