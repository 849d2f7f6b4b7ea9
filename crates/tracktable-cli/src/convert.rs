use crate::cli::Cli;
use crate::error::{CliError, Result};
use tracing::{debug, info};
use tracktable::io::event_tree::EventTreeFile;
use tracktable::io::table_csv::TableCsvFile;
use tracktable::model::table::StepTable;

/// Runs the whole pipeline: load, filter, annotate, write.
///
/// Any failure aborts the run; nothing is written to the output path unless
/// every stage before it succeeded.
pub fn run(args: &Cli) -> Result<()> {
    info!("Reading step collection from {:?}", args.input_file);
    let records = EventTreeFile::read_from_path(&args.input_file).map_err(|e| CliError::Load {
        path: args.input_file.clone(),
        source: e,
    })?;
    debug!("{} raw record(s) loaded", records.len());

    let mut table = StepTable::from_records(records);
    info!("{} complete row(s) retained", table.len());

    table.annotate_steps();

    TableCsvFile::write_to_path(&table, &args.output_file).map_err(|e| CliError::Write {
        path: args.output_file.clone(),
        source: e,
    })?;
    info!("Wrote annotated table to {:?}", args.output_file);
    Ok(())
}
