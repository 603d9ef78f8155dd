use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use bdr_fetch::{
    logging, process_item, Config, ProgressReporter, DEFAULT_API_BASE, DEFAULT_IMAGE_BASE,
    DEFAULT_IMAGE_SIZE,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "bdr-fetch")]
#[command(version)]
#[command(about = "Fetch the page images of an item from the Brown University Library API", long_about = None)]
struct Cli {
    /// Persistent identifier for the item to fetch
    pid: String,

    /// Output directory to save downloaded images
    output: PathBuf,

    /// Item API root
    #[arg(long, value_name = "URL", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// IIIF image service root
    #[arg(long, value_name = "URL", default_value = DEFAULT_IMAGE_BASE)]
    image_base: String,

    /// IIIF size parameter
    #[arg(long, value_name = "SIZE", default_value = DEFAULT_IMAGE_SIZE)]
    size: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config {
        api_base: cli.api_base,
        image_base: cli.image_base,
        image_size: cli.size,
        timeout: cli.timeout.map(Duration::from_secs),
        ..Config::default()
    };
    let mut progress = if cli.quiet {
        ProgressReporter::silent()
    } else {
        ProgressReporter::with_bar()
    };

    match process_item(&config, &cli.pid, &cli.output, &mut progress).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
