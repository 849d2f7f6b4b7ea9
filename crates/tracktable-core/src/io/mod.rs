//! I/O boundary: reading step collections and writing track tables.
//!
//! This is the only place where on-disk column names appear; everything else
//! in the crate goes through the named fields of
//! [`crate::model::record::StepRecord`].

pub mod columns;
pub mod event_tree;
pub mod table_csv;
