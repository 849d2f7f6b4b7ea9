/// Represents one simulation step of one particle track.
///
/// A step is the segment of a track between two interaction points. Every field
/// is required; records with missing values never reach this type (see
/// [`RawStepRecord`]). The on-disk column names corresponding to these fields
/// are defined in [`crate::io::columns`].
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecord {
    /// Kinetic energy of the particle at the step, in MeV.
    pub energy: f64,
    /// Pre-step position x-coordinate, in mm.
    pub pre_x: f64,
    /// Pre-step position y-coordinate, in mm.
    pub pre_y: f64,
    /// Pre-step position z-coordinate, in mm.
    pub pre_z: f64,
    /// Post-step position x-coordinate, in mm.
    pub post_x: f64,
    /// Post-step position y-coordinate, in mm.
    pub post_y: f64,
    /// Post-step position z-coordinate, in mm.
    pub post_z: f64,
    /// Particle type name (e.g. "e-", "gamma", "neutron").
    pub particle: String,
    /// The primary event this step belongs to.
    pub event_id: i32,
    /// The track this step belongs to, unique within its event.
    pub track_id: i32,
    /// Track ID of the parent particle; 0 for primaries.
    pub parent_id: i32,
    /// Energy deposited along the step, in MeV.
    pub energy_deposit: f64,
    /// Name of the process that defined the pre-step point.
    pub creator_process: String,
    /// Name of the process that defined the post-step point.
    pub end_process: String,
    /// Detector-region classifier (e.g. "Xe", "scintor").
    pub tag: String,
    /// Copy number of the detector volume the step occurred in.
    pub copy_no: i32,
    /// Global time of the step, in ns.
    pub time: f64,
}

impl StepRecord {
    /// The four fields identifying a run of consecutive steps on the same track.
    ///
    /// Two adjacent rows with equal keys belong to the same run and share an
    /// incrementing step counter.
    pub(crate) fn track_key(&self) -> (&str, i32, i32, &str) {
        (
            self.particle.as_str(),
            self.event_id,
            self.track_id,
            self.tag.as_str(),
        )
    }
}

/// A step record as read from the source container, before the completeness
/// filter has run.
///
/// Any field may be absent (a null cell in the source column). The loader
/// produces these verbatim; [`crate::model::table::StepTable::from_records`]
/// decides which ones survive.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawStepRecord {
    pub energy: Option<f64>,
    pub pre_x: Option<f64>,
    pub pre_y: Option<f64>,
    pub pre_z: Option<f64>,
    pub post_x: Option<f64>,
    pub post_y: Option<f64>,
    pub post_z: Option<f64>,
    pub particle: Option<String>,
    pub event_id: Option<i32>,
    pub track_id: Option<i32>,
    pub parent_id: Option<i32>,
    pub energy_deposit: Option<f64>,
    pub creator_process: Option<String>,
    pub end_process: Option<String>,
    pub tag: Option<String>,
    pub copy_no: Option<i32>,
    pub time: Option<f64>,
}

impl RawStepRecord {
    /// Converts into a complete [`StepRecord`], or `None` if any field is missing.
    pub fn into_complete(self) -> Option<StepRecord> {
        Some(StepRecord {
            energy: self.energy?,
            pre_x: self.pre_x?,
            pre_y: self.pre_y?,
            pre_z: self.pre_z?,
            post_x: self.post_x?,
            post_y: self.post_y?,
            post_z: self.post_z?,
            particle: self.particle?,
            event_id: self.event_id?,
            track_id: self.track_id?,
            parent_id: self.parent_id?,
            energy_deposit: self.energy_deposit?,
            creator_process: self.creator_process?,
            end_process: self.end_process?,
            tag: self.tag?,
            copy_no: self.copy_no?,
            time: self.time?,
        })
    }
}
