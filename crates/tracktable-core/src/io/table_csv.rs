use super::columns;
use crate::model::record::StepRecord;
use crate::model::table::StepTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum TableCsvError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV serialization error: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to persist output file: {0}")]
    Persist(#[from] tempfile::PersistError),
    #[error("table has no step column; run annotate_steps before writing")]
    MissingStepColumn,
}

/// One serialized line of the output table: the 17 source columns plus the
/// derived step index. Serde renames carry the on-disk header names; they must
/// stay in lockstep with [`columns::OUTPUT_COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CsvRow {
    #[serde(rename = "Energy")]
    pub energy: f64,
    #[serde(rename = "prex")]
    pub pre_x: f64,
    #[serde(rename = "prey")]
    pub pre_y: f64,
    #[serde(rename = "prez")]
    pub pre_z: f64,
    #[serde(rename = "postx")]
    pub post_x: f64,
    #[serde(rename = "posty")]
    pub post_y: f64,
    #[serde(rename = "postz")]
    pub post_z: f64,
    #[serde(rename = "ptype")]
    pub particle: String,
    #[serde(rename = "eventID")]
    pub event_id: i32,
    #[serde(rename = "trackID")]
    pub track_id: i32,
    #[serde(rename = "parentID")]
    pub parent_id: i32,
    #[serde(rename = "dE")]
    pub energy_deposit: f64,
    #[serde(rename = "creatprosName")]
    pub creator_process: String,
    #[serde(rename = "endprosName")]
    pub end_process: String,
    #[serde(rename = "tag")]
    pub tag: String,
    #[serde(rename = "copyNo")]
    pub copy_no: i32,
    #[serde(rename = "time")]
    pub time: f64,
    #[serde(rename = "step")]
    pub step: u32,
}

impl From<(&StepRecord, u32)> for CsvRow {
    fn from((record, step): (&StepRecord, u32)) -> Self {
        Self {
            energy: record.energy,
            pre_x: record.pre_x,
            pre_y: record.pre_y,
            pre_z: record.pre_z,
            post_x: record.post_x,
            post_y: record.post_y,
            post_z: record.post_z,
            particle: record.particle.clone(),
            event_id: record.event_id,
            track_id: record.track_id,
            parent_id: record.parent_id,
            energy_deposit: record.energy_deposit,
            creator_process: record.creator_process.clone(),
            end_process: record.end_process.clone(),
            tag: record.tag.clone(),
            copy_no: record.copy_no,
            time: record.time,
            step,
        }
    }
}

/// Writer for the annotated track table.
///
/// Output is comma-delimited with a single header line and no row-index
/// column. The file is written to a temporary sibling first and renamed into
/// place, so a failure mid-write never leaves a half-written table at the
/// destination.
pub struct TableCsvFile;

impl TableCsvFile {
    /// Serializes `table` to `path`.
    ///
    /// An empty table produces a file containing only the header line. A
    /// non-empty table that has not been annotated is rejected with
    /// [`TableCsvError::MissingStepColumn`].
    pub fn write_to_path<P: AsRef<Path>>(table: &StepTable, path: P) -> Result<(), TableCsvError> {
        let path = path.as_ref();
        if !table.is_annotated() {
            return Err(TableCsvError::MissingStepColumn);
        }

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut tmp);
            writer.write_record(columns::OUTPUT_COLUMNS)?;
            for (record, step) in table.annotated_rows() {
                writer.serialize(CsvRow::from((record, step)))?;
            }
            writer.flush()?;
        }
        tmp.persist(path)?;
        debug!("wrote {} row(s) to '{}'", table.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record::RawStepRecord;
    use std::fs;
    use tempfile::tempdir;

    fn raw(particle: &str, event_id: i32, track_id: i32, tag: &str) -> RawStepRecord {
        RawStepRecord {
            energy: Some(2.5),
            pre_x: Some(0.5),
            pre_y: Some(1.5),
            pre_z: Some(2.5),
            post_x: Some(0.6),
            post_y: Some(1.6),
            post_z: Some(2.6),
            particle: Some(particle.to_string()),
            event_id: Some(event_id),
            track_id: Some(track_id),
            parent_id: Some(0),
            energy_deposit: Some(0.05),
            creator_process: Some("compt".to_string()),
            end_process: Some("eIoni".to_string()),
            tag: Some(tag.to_string()),
            copy_no: Some(2),
            time: Some(12.5),
        }
    }

    fn annotated(records: Vec<RawStepRecord>) -> StepTable {
        let mut table = StepTable::from_records(records);
        table.annotate_steps();
        table
    }

    #[test]
    fn empty_table_writes_only_the_header_line() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        TableCsvFile::write_to_path(&annotated(Vec::new()), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let expected = format!("{}\n", columns::OUTPUT_COLUMNS.join(","));
        assert_eq!(content, expected);
    }

    #[test]
    fn unannotated_table_is_rejected_without_creating_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = StepTable::from_records(vec![raw("e-", 1, 1, "Xe")]);

        let result = TableCsvFile::write_to_path(&table, &path);
        assert!(matches!(result, Err(TableCsvError::MissingStepColumn)));
        assert!(!path.exists());
    }

    #[test]
    fn round_trip_preserves_fields_and_step_values() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let table = annotated(vec![
            raw("e-", 1, 1, "Xe"),
            raw("e-", 1, 1, "Xe"),
            raw("gamma", 1, 1, "Xe"),
        ]);
        TableCsvFile::write_to_path(&table, &path).unwrap();

        let mut reader = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<CsvRow> = reader
            .deserialize()
            .collect::<Result<_, csv::Error>>()
            .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows.iter().map(|r| r.step).collect::<Vec<_>>(),
            vec![1, 2, 1]
        );
        assert_eq!(rows[0].particle, "e-");
        assert_eq!(rows[2].particle, "gamma");
        assert_eq!(rows[0].energy, 2.5);
        assert_eq!(rows[0].time, 12.5);
        assert_eq!(rows[0].copy_no, 2);
    }

    #[test]
    fn header_matches_the_canonical_column_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        TableCsvFile::write_to_path(&annotated(vec![raw("e-", 1, 1, "Xe")]), &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let header = content.lines().next().unwrap();
        assert_eq!(header, columns::OUTPUT_COLUMNS.join(","));
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn repeated_writes_are_byte_identical() {
        let dir = tempdir().unwrap();
        let table = annotated(vec![raw("e-", 1, 1, "Xe"), raw("e-", 1, 1, "Xe")]);

        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");
        TableCsvFile::write_to_path(&table, &first).unwrap();
        TableCsvFile::write_to_path(&table, &second).unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    #[test]
    fn missing_destination_directory_is_an_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("absent").join("out.csv");
        let result = TableCsvFile::write_to_path(&annotated(Vec::new()), &path);
        assert!(matches!(result, Err(TableCsvError::Io(_))));
        assert!(!path.exists());
    }
}
