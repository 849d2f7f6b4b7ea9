use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Flattens a detector-simulation step collection into an annotated CSV track table.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the input step collection (Parquet container).
    #[arg(long = "InputFile", required = true, value_name = "PATH")]
    pub input_file: PathBuf,

    /// Path for the output CSV table.
    #[arg(long = "OutputFile", required = true, value_name = "PATH")]
    pub output_file: PathBuf,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
