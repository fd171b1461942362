//! Request documents: a work day, its busy intervals and a slot length.
//!
//! This is the boundary where untyped input becomes `Interval` values. Every
//! interval is validated by `Interval::new` while deserializing, so a
//! `SlotRequest` that parsed successfully never carries a reversed interval.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::freebusy;
use crate::time::Interval;

/// Everything needed for one slot computation.
///
/// JSON shape:
///
/// ```json
/// {
///   "work_day": {"start": "09:00", "stop": "21:00"},
///   "busy": [{"start": "10:30", "stop": "10:50"}],
///   "slot_duration_minutes": 30
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotRequest {
    /// The working hours to fill with slots.
    pub work_day: Interval,
    /// Occupied intervals, in any order. Defaults to none.
    #[serde(default)]
    pub busy: Vec<Interval>,
    /// Length of each appointment slot.
    pub slot_duration_minutes: u32,
}

impl SlotRequest {
    /// Parse a request from a JSON document.
    ///
    /// # Errors
    /// Returns `SlotError::Json` for malformed JSON, unknown shapes, bad
    /// `"HH:MM"` strings, or reversed intervals.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The sample day: 09:00-21:00 with five appointments, 30 minute slots.
    pub fn demo() -> Result<Self> {
        let busy = [
            ("10:30", "10:50"),
            ("18:40", "18:50"),
            ("14:40", "15:50"),
            ("16:40", "17:20"),
            ("20:05", "20:20"),
        ]
        .iter()
        .map(|(start, stop)| Interval::parse(start, stop))
        .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            work_day: Interval::parse("09:00", "21:00")?,
            busy,
            slot_duration_minutes: 30,
        })
    }

    /// Free windows of the work day. See [`freebusy::free_windows`].
    pub fn windows(&self) -> Result<Vec<Interval>> {
        freebusy::free_windows(&self.busy, &self.work_day)
    }

    /// Appointment slots. See [`freebusy::compute_free_slots`].
    pub fn compute(&self) -> Result<Vec<Interval>> {
        freebusy::compute_free_slots(&self.busy, &self.work_day, self.slot_duration_minutes)
    }
}
