//! # tracktable Core Library
//!
//! A library for flattening detector-simulation step collections into annotated
//! per-track tables.
//!
//! The pipeline is deliberately linear: a columnar step collection is read into
//! row-oriented records, rows with missing fields are dropped, a derived `step`
//! index is appended, and the result is serialized as a delimited text table.
//!
//! - **[`model`]**: strongly-typed step records and the ordered [`model::table::StepTable`],
//!   including the completeness filter and the step annotation pass.
//! - **[`io`]**: the I/O boundary. [`io::event_tree`] reads the versioned step
//!   collection from a Parquet container; [`io::table_csv`] writes the annotated
//!   table as CSV, atomically.
//!
//! Column name strings exist only inside [`io`]; everything in between operates
//! on named struct fields.

pub mod io;
pub mod model;
