use std::path::PathBuf;
use thiserror::Error;
use tracktable::io::event_tree::EventTreeError;
use tracktable::io::table_csv::TableCsvError;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read '{path}': {source}", path = path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: EventTreeError,
    },

    #[error("Failed to write '{path}': {source}", path = path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: TableCsvError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
