//! # slot-engine
//!
//! Deterministic appointment slot computation over a single working day.
//!
//! Given a work day, the intervals already booked inside it, and a slot length,
//! the engine finds the free windows between bookings and cuts each one into
//! back-to-back slots of that length. Leftover time shorter than a slot is dropped.
//!
//! ```rust
//! use slot_engine::{compute_free_slots, Interval};
//!
//! let day = Interval::parse("09:00", "10:00").unwrap();
//! let busy = vec![Interval::parse("09:30", "09:45").unwrap()];
//! let slots = compute_free_slots(&busy, &day, 15).unwrap();
//!
//! let rendered: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
//! assert_eq!(rendered, ["09:00-09:15", "09:15-09:30", "09:45-10:00"]);
//! ```
//!
//! ## Modules
//!
//! - [`time`] — `TimeOfDay`, `Interval` and minute-of-day conversions
//! - [`freebusy`] — Free windows and slot slicing
//! - [`request`] — JSON request documents
//! - [`error`] — Error types

pub mod error;
pub mod freebusy;
pub mod request;
pub mod time;

pub use error::SlotError;
pub use freebusy::{compute_free_slots, free_windows};
pub use request::SlotRequest;
pub use time::{minutes_since_midnight, time_from_minutes, Interval, TimeOfDay};
