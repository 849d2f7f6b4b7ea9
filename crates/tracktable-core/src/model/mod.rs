//! In-memory representation of simulation steps and the track table.

pub mod record;
pub mod table;
