//! Compute free windows and fixed-length appointment slots within a work day.
//!
//! Busy intervals are sorted by start time and laid out as a flat boundary
//! sequence `[day.start, b1.start, b1.stop, ..., bn.start, bn.stop, day.stop]`.
//! Consecutive pairs of that sequence are the free windows, and each window is
//! cut into slots of the requested length. A tail shorter than one slot is dropped.

use tracing::{debug, trace};

use crate::error::{Result, SlotError};
use crate::time::Interval;

/// Check that every busy interval lies within the work day and that no two overlap.
///
/// `sorted` must already be ordered by start. Intervals that merely touch
/// (one stops where the next starts) are accepted.
fn validate_busy(sorted: &[&Interval], work_day: &Interval) -> Result<()> {
    for busy in sorted {
        if !work_day.contains(busy) {
            return Err(SlotError::InvalidInterval(format!(
                "busy interval {busy} is outside the work day {work_day}"
            )));
        }
    }
    for pair in sorted.windows(2) {
        if pair[1].start_minutes() < pair[0].stop_minutes() {
            return Err(SlotError::InvalidInterval(format!(
                "busy intervals {} and {} overlap",
                pair[0], pair[1]
            )));
        }
    }
    Ok(())
}

/// Free windows of the work day left over by the busy intervals, in time order.
///
/// The busy list may be in any order; it is stable-sorted by start. With no
/// busy intervals the result is the whole work day. A busy interval that
/// touches another one, or a work-day edge, leaves a zero-length window.
///
/// # Errors
/// Returns `SlotError::InvalidInterval` if a busy interval falls outside the
/// work day or two busy intervals overlap.
pub fn free_windows(busy: &[Interval], work_day: &Interval) -> Result<Vec<Interval>> {
    // Sort by start, then stop, so an empty booking sorts ahead of one that
    // begins at the same minute.
    let mut sorted: Vec<&Interval> = busy.iter().collect();
    sorted.sort_by_key(|b| (b.start_minutes(), b.stop_minutes()));
    validate_busy(&sorted, work_day)?;

    let mut boundaries = Vec::with_capacity(2 + 2 * sorted.len());
    boundaries.push(work_day.start_minutes());
    for b in &sorted {
        boundaries.push(b.start_minutes());
        boundaries.push(b.stop_minutes());
    }
    boundaries.push(work_day.stop_minutes());

    boundaries
        .chunks_exact(2)
        .map(|pair| Interval::from_minutes(pair[0], pair[1]))
        .collect()
}

/// Cut a single free window into back-to-back slots of `slot_duration_minutes`.
///
/// Slot edges run `start, start + d, start + 2d, ...` up to and including the
/// window's stop, so a window that is an exact multiple of `d` ends on a slot edge.
fn slice_window(window: &Interval, slot_duration_minutes: u32) -> Result<Vec<Interval>> {
    let edges: Vec<u32> = (window.start_minutes()..=window.stop_minutes())
        .step_by(slot_duration_minutes as usize)
        .collect();

    edges
        .windows(2)
        .map(|pair| Interval::from_minutes(pair[0], pair[1]))
        .collect()
}

/// Compute the appointment slots available in `work_day` around `busy`.
///
/// Slots are returned in ascending time order: windows in order, and slots
/// within each window in order. Every slot is exactly `slot_duration_minutes`
/// long. The result does not depend on the order of `busy`.
///
/// # Errors
/// - `SlotError::InvalidDuration` if `slot_duration_minutes` is zero.
/// - `SlotError::InvalidInterval` if the busy intervals overlap or leave the work day.
pub fn compute_free_slots(
    busy: &[Interval],
    work_day: &Interval,
    slot_duration_minutes: u32,
) -> Result<Vec<Interval>> {
    if slot_duration_minutes == 0 {
        return Err(SlotError::InvalidDuration(slot_duration_minutes));
    }

    let windows = free_windows(busy, work_day)?;

    let mut slots = Vec::new();
    for window in &windows {
        let cut = slice_window(window, slot_duration_minutes)?;
        trace!(%window, slots = cut.len(), "sliced free window");
        slots.extend(cut);
    }

    debug!(
        %work_day,
        busy = busy.len(),
        windows = windows.len(),
        slots = slots.len(),
        slot_duration_minutes,
        "computed free slots"
    );

    Ok(slots)
}
