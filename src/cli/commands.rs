use crate::cli::args::{Cli, Commands};
use crate::error::Result;
use crate::processors::{FileExporter, WaypointCollection, WaypointExtractor};
use crate::readers::{DocumentReader, RecordTokenizer, WaypointCsvReader};
use crate::settings::Settings;
use crate::utils::progress::ProgressReporter;
use crate::writers::WaypointCsvWriter;
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;

pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose, cli.log_file.as_deref())?;

    let settings = Settings::load(cli.config.as_deref())?;
    tracing::debug!(?settings, "Loaded settings");

    match cli.command {
        Commands::Extract { document } => {
            let collection = extract_document(&document, &settings, cli.verbose)?;

            let output_file = &settings.extracted_csv;
            if let Some(parent) = output_file.parent() {
                std::fs::create_dir_all(parent)?;
            }
            WaypointCsvWriter::new().write_records(collection.records(), output_file)?;

            println!(
                "Extracted {} waypoints and saved to {}",
                collection.len(),
                output_file.display()
            );
        }

        Commands::Split { document } => {
            let collection = extract_document(&document, &settings, cli.verbose)?;
            let partitions = collection.partition_by_state();

            let exporter = FileExporter::new(&settings.by_state_dir)
                .with_file_stem(&settings.file_stem)
                .with_max_workers(settings.max_workers);

            let progress = ProgressReporter::new(partitions.len() as u64, "states", settings.quiet);
            progress.set_message("Exporting waypoints per state...");
            let summaries = exporter.export_by_state(&partitions, Some(&progress))?;
            progress.finish_with_message(&format!("Exported {} states", summaries.len()));

            for summary in &summaries {
                println!("{}", summary.summary());
            }
            println!("Processing complete! All waypoints saved per state in CSV and KML formats.");
        }

        Commands::Convert { input } => {
            let input_file = input.unwrap_or_else(|| settings.extracted_csv.clone());
            println!("Converting {} to KML...", input_file.display());

            let records = WaypointCsvReader::new().read_records(&input_file)?;
            let collection = WaypointCollection::aggregate(records);

            let summary = FileExporter::new(&settings.kml_output_dir)
                .with_file_stem(&settings.file_stem)
                .export_whole(&collection)?;

            println!("{}", summary.summary());
        }
    }

    Ok(())
}

/// Read a document and tokenize every page into waypoint records
fn extract_document(path: &Path, settings: &Settings, verbose: bool) -> Result<WaypointCollection> {
    println!("Extracting waypoints from {}", path.display());

    let spinner = ProgressReporter::new_spinner("Reading document text...", settings.quiet);
    let pages = DocumentReader::new().read_pages(path)?;
    spinner.finish_with_message(&format!("Read {} pages", pages.len()));

    let extractor =
        WaypointExtractor::with_tokenizer(RecordTokenizer::with_skip_markers(settings.skip_markers.clone()));

    let progress = ProgressReporter::new(pages.len() as u64, "pages", settings.quiet);
    progress.set_message("Scanning pages for waypoints...");
    let (collection, report) = extractor.extract_pages(&pages, Some(&progress));
    progress.finish_with_message(&format!("Found {} waypoints", collection.len()));

    if verbose {
        println!("\n{}", report.summary());
    }

    Ok(collection)
}

/// Skip diagnostics are warnings, so they stay visible without --verbose
fn log_level(verbose: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else {
        Level::WARN
    }
}

fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = log_level(verbose);
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    let installed = match log_file {
        Some(path) => {
            let file = File::create(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        None => builder.with_writer(std::io::stderr).try_init(),
    };

    if installed.is_err() {
        tracing::debug!("Logging subscriber already installed");
    }

    Ok(())
}
