use super::record::{RawStepRecord, StepRecord};
use tracing::debug;

/// An ordered table of complete step records plus the derived `step` column.
///
/// Rows keep the order they had in the source container; the step annotation
/// pass depends on that adjacency. The table is built once per run, annotated
/// in place, and then only read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepTable {
    rows: Vec<StepRecord>,
    steps: Vec<u32>,
}

impl StepTable {
    /// Builds a table from raw records, retaining only rows with every field
    /// present. Source order is preserved; dropped rows are not reported beyond
    /// a debug log line.
    pub fn from_records(records: Vec<RawStepRecord>) -> Self {
        let total = records.len();
        let rows: Vec<StepRecord> = records
            .into_iter()
            .filter_map(RawStepRecord::into_complete)
            .collect();
        if rows.len() < total {
            debug!(
                "dropped {} incomplete row(s) out of {}",
                total - rows.len(),
                total
            );
        }
        Self {
            rows,
            steps: Vec::new(),
        }
    }

    /// Appends the `step` column in a single forward pass.
    ///
    /// The counter starts at 1 and increments while the
    /// (particle, event, track, tag) key of a row equals the key of the row
    /// immediately before it; any difference resets it to 1. Adjacency is by
    /// row position only: input that is not sorted by that key will reset the
    /// counter at every discontinuity. Calling this again recomputes the same
    /// column.
    pub fn annotate_steps(&mut self) {
        let mut steps = Vec::with_capacity(self.rows.len());
        for (i, row) in self.rows.iter().enumerate() {
            let step = match i.checked_sub(1) {
                Some(prev) if self.rows[prev].track_key() == row.track_key() => steps[prev] + 1,
                _ => 1,
            };
            steps.push(step);
        }
        self.steps = steps;
    }

    /// Returns `true` once [`Self::annotate_steps`] has produced a step value
    /// for every row. Trivially `true` for an empty table.
    pub fn is_annotated(&self) -> bool {
        self.steps.len() == self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[StepRecord] {
        &self.rows
    }

    /// The derived step column; empty until [`Self::annotate_steps`] runs.
    pub fn steps(&self) -> &[u32] {
        &self.steps
    }

    /// Iterates rows paired with their step value.
    pub fn annotated_rows(&self) -> impl Iterator<Item = (&StepRecord, u32)> {
        self.rows.iter().zip(self.steps.iter().copied())
    }
}
