use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "waypoint-extractor")]
#[command(about = "Extract AIP VFR waypoints and convert them to CSV and KML")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(
        long,
        global = true,
        help = "Settings file [default: waypoints.toml if present]"
    )]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract waypoints from an AIP document into a single CSV table
    Extract {
        #[arg(help = "Path to the AIP PDF file")]
        document: PathBuf,
    },

    /// Extract waypoints, save them per state, and convert each state to KML
    Split {
        #[arg(help = "Path to the AIP PDF file")]
        document: PathBuf,
    },

    /// Convert an extracted waypoint CSV table to KML
    Convert {
        #[arg(help = "Waypoint CSV file [default: waypoints_filtered.csv]")]
        input: Option<PathBuf>,
    },
}
