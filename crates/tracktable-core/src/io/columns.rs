//! On-disk column names of the step collection.
//!
//! The names follow the ntuple declaration of the producing simulation and are
//! referenced by the loader and the table writer only.

/// Kinetic energy at the step, in MeV.
pub const ENERGY: &str = "Energy";
/// Pre-step position x, in mm.
pub const PRE_X: &str = "prex";
/// Pre-step position y, in mm.
pub const PRE_Y: &str = "prey";
/// Pre-step position z, in mm.
pub const PRE_Z: &str = "prez";
/// Post-step position x, in mm.
pub const POST_X: &str = "postx";
/// Post-step position y, in mm.
pub const POST_Y: &str = "posty";
/// Post-step position z, in mm.
pub const POST_Z: &str = "postz";
/// Particle type name.
pub const PTYPE: &str = "ptype";
/// Primary event identifier.
pub const EVENT_ID: &str = "eventID";
/// Track identifier within the event.
pub const TRACK_ID: &str = "trackID";
/// Parent track identifier; 0 for primaries.
pub const PARENT_ID: &str = "parentID";
/// Energy deposit along the step, in MeV.
pub const DE: &str = "dE";
/// Process defining the pre-step point.
pub const CREATOR_PROCESS: &str = "creatprosName";
/// Process defining the post-step point.
pub const END_PROCESS: &str = "endprosName";
/// Detector-region classifier.
pub const TAG: &str = "tag";
/// Detector-volume copy number.
pub const COPY_NO: &str = "copyNo";
/// Global time of the step, in ns.
pub const TIME: &str = "time";
/// The derived step index appended by annotation.
pub const STEP: &str = "step";

/// The 17 source columns, in canonical order.
pub const SOURCE_COLUMNS: [&str; 17] = [
    ENERGY,
    PRE_X,
    PRE_Y,
    PRE_Z,
    POST_X,
    POST_Y,
    POST_Z,
    PTYPE,
    EVENT_ID,
    TRACK_ID,
    PARENT_ID,
    DE,
    CREATOR_PROCESS,
    END_PROCESS,
    TAG,
    COPY_NO,
    TIME,
];

/// Header of the serialized table: the source columns plus [`STEP`].
pub const OUTPUT_COLUMNS: [&str; 18] = [
    ENERGY,
    PRE_X,
    PRE_Y,
    PRE_Z,
    POST_X,
    POST_Y,
    POST_Z,
    PTYPE,
    EVENT_ID,
    TRACK_ID,
    PARENT_ID,
    DE,
    CREATOR_PROCESS,
    END_PROCESS,
    TAG,
    COPY_NO,
    TIME,
    STEP,
];
