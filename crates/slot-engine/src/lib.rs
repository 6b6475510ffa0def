//! # slot-engine
//!
//! Bookable availability for a single calendar.
//!
//! Turns the busy intervals reported by a calendar's free/busy query into
//! availability, constrained by a weekly opening-hours table and timezone.
//! Availability comes in two views: the days that have room for at least one
//! booking, and the individual start times on a fixed grid.
//!
//! ## Modules
//!
//! - [`interval`] — `Interval` time ranges, date spans, datetime parsing
//! - [`freebusy`] — Invert busy intervals into free intervals
//! - [`hours`] — Weekly opening hours → per-date open/close instants
//! - [`dst`] — DST gap policies for local opening times
//! - [`days`] — Free intervals → bookable dates
//! - [`slots`] — Free intervals → bookable slot starts
//! - [`step`] — Booking granularity (15 minutes by default)
//! - [`config`] — Calendar configuration document
//! - [`session`] — Load-once configuration cache
//! - [`busy`] — Busy intervals from JSON
//! - [`availability`] — End-to-end pipeline
//! - [`error`] — Error types

pub mod availability;
pub mod busy;
pub mod config;
pub mod days;
pub mod dst;
pub mod error;
pub mod freebusy;
pub mod hours;
pub mod interval;
pub mod session;
pub mod slots;
pub mod step;

pub use availability::{
    available_days, available_slots, compute_availability, free_intervals, Availability,
    AvailabilityMode,
};
pub use busy::parse_busy_json;
pub use config::CalendarConfig;
pub use days::free_days;
pub use dst::DstPolicy;
pub use error::SlotError;
pub use freebusy::invert_busy;
pub use hours::{DayHours, DayWindow, OpeningHours, OpeningHoursTable};
pub use interval::Interval;
pub use session::{ConfigSource, Session};
pub use slots::{free_time_slots, Slot};
pub use step::Step;
