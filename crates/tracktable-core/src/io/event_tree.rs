use super::columns;
use crate::model::record::RawStepRecord;
use arrow::array::{Array, Float64Array, Int32Array, StringArray};
use arrow::record_batch::RecordBatch;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use std::fs::File;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Key-value metadata key naming the versioned step collection.
///
/// The producing toolchain records its collections under versioned
/// identifiers; the first write cycle of the `event` collection is `event;1`,
/// and that exact key (version suffix included) must be present for a file to
/// be accepted.
pub const EVENT_TREE_KEY: &str = "event;1";

#[derive(Debug, Error)]
pub enum EventTreeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parquet error: {0}")]
    Parquet(#[from] parquet::errors::ParquetError),
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
    #[error("step collection 'event;1' not found in '{path}'", path = path.display())]
    MissingCollection { path: PathBuf },
    #[error("missing column '{name}'")]
    MissingColumn { name: &'static str },
    #[error("column '{name}' has type {actual}, expected {expected}")]
    ColumnType {
        name: &'static str,
        expected: &'static str,
        actual: String,
    },
}

/// Reader for the columnar step collection written by the simulation.
///
/// The container is a Parquet file whose key-value metadata carries the
/// versioned collection identifier (see [`EVENT_TREE_KEY`]). Floating-point
/// columns are `Float64`, identifier columns `Int32`, name columns `Utf8`.
/// Null cells become `None` fields; deciding whether such a row survives is
/// the job of [`crate::model::table::StepTable::from_records`], not the
/// loader.
pub struct EventTreeFile;

impl EventTreeFile {
    /// Reads every row of the step collection at `path`, in file order.
    ///
    /// Fails with [`EventTreeError::MissingCollection`] before reading any row
    /// data if the collection key is absent. A file with zero rows is not an
    /// error.
    pub fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Vec<RawStepRecord>, EventTreeError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;

        let has_collection = builder
            .metadata()
            .file_metadata()
            .key_value_metadata()
            .is_some_and(|entries| entries.iter().any(|entry| entry.key == EVENT_TREE_KEY));
        if !has_collection {
            return Err(EventTreeError::MissingCollection {
                path: path.to_path_buf(),
            });
        }

        let reader = builder.build()?;
        let mut records = Vec::new();
        for batch in reader {
            let batch = batch?;
            Self::append_batch(&batch, &mut records)?;
        }
        debug!(
            "read {} raw record(s) from '{}'",
            records.len(),
            path.display()
        );
        Ok(records)
    }

    fn append_batch(
        batch: &RecordBatch,
        records: &mut Vec<RawStepRecord>,
    ) -> Result<(), EventTreeError> {
        let energy = float_column(batch, columns::ENERGY)?;
        let pre_x = float_column(batch, columns::PRE_X)?;
        let pre_y = float_column(batch, columns::PRE_Y)?;
        let pre_z = float_column(batch, columns::PRE_Z)?;
        let post_x = float_column(batch, columns::POST_X)?;
        let post_y = float_column(batch, columns::POST_Y)?;
        let post_z = float_column(batch, columns::POST_Z)?;
        let particle = string_column(batch, columns::PTYPE)?;
        let event_id = int_column(batch, columns::EVENT_ID)?;
        let track_id = int_column(batch, columns::TRACK_ID)?;
        let parent_id = int_column(batch, columns::PARENT_ID)?;
        let energy_deposit = float_column(batch, columns::DE)?;
        let creator_process = string_column(batch, columns::CREATOR_PROCESS)?;
        let end_process = string_column(batch, columns::END_PROCESS)?;
        let tag = string_column(batch, columns::TAG)?;
        let copy_no = int_column(batch, columns::COPY_NO)?;
        let time = float_column(batch, columns::TIME)?;

        records.reserve(batch.num_rows());
        for row in 0..batch.num_rows() {
            records.push(RawStepRecord {
                energy: opt_f64(energy, row),
                pre_x: opt_f64(pre_x, row),
                pre_y: opt_f64(pre_y, row),
                pre_z: opt_f64(pre_z, row),
                post_x: opt_f64(post_x, row),
                post_y: opt_f64(post_y, row),
                post_z: opt_f64(post_z, row),
                particle: opt_string(particle, row),
                event_id: opt_i32(event_id, row),
                track_id: opt_i32(track_id, row),
                parent_id: opt_i32(parent_id, row),
                energy_deposit: opt_f64(energy_deposit, row),
                creator_process: opt_string(creator_process, row),
                end_process: opt_string(end_process, row),
                tag: opt_string(tag, row),
                copy_no: opt_i32(copy_no, row),
                time: opt_f64(time, row),
            });
        }
        Ok(())
    }
}

fn typed_column<'a, T: 'static>(
    batch: &'a RecordBatch,
    name: &'static str,
    expected: &'static str,
) -> Result<&'a T, EventTreeError> {
    let column = batch
        .column_by_name(name)
        .ok_or(EventTreeError::MissingColumn { name })?;
    column
        .as_any()
        .downcast_ref::<T>()
        .ok_or_else(|| EventTreeError::ColumnType {
            name,
            expected,
            actual: column.data_type().to_string(),
        })
}

fn float_column<'a>(
    batch: &'a RecordBatch,
    name: &'static str,
) -> Result<&'a Float64Array, EventTreeError> {
    typed_column(batch, name, "Float64")
}

fn int_column<'a>(
    batch: &'a RecordBatch,
    name: &'static str,
) -> Result<&'a Int32Array, EventTreeError> {
    typed_column(batch, name, "Int32")
}

fn string_column<'a>(
    batch: &'a RecordBatch,
    name: &'static str,
) -> Result<&'a StringArray, EventTreeError> {
    typed_column(batch, name, "Utf8")
}

fn opt_f64(array: &Float64Array, row: usize) -> Option<f64> {
    array.is_valid(row).then(|| array.value(row))
}

fn opt_i32(array: &Int32Array, row: usize) -> Option<i32> {
    array.is_valid(row).then(|| array.value(row))
}

fn opt_string(array: &StringArray, row: usize) -> Option<String> {
    array.is_valid(row).then(|| array.value(row).to_string())
}
