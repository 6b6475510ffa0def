//! WASM bindings for slot-engine.
//!
//! Exposes free/busy inversion and the two availability views to JavaScript
//! via `wasm-bindgen`. Complex values cross the boundary as JSON strings: the
//! calendar configuration document, the busy list (a bare `{start, end}` array
//! or a provider free/busy response) and the results.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use slot_engine::interval::parse_instant;
use slot_engine::{AvailabilityMode, CalendarConfig, Interval};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct IntervalDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

impl From<&Interval> for IntervalDto {
    fn from(i: &Interval) -> Self {
        Self {
            start: i.start.to_rfc3339(),
            end: i.end.to_rfc3339(),
            duration_minutes: i.duration_minutes(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_config(json: &str) -> Result<CalendarConfig, JsValue> {
    CalendarConfig::from_json(json).map_err(to_js)
}

/// Parse the busy list and range bounds against the calendar configuration.
fn parse_request(
    config: &CalendarConfig,
    busy_json: &str,
    time_start: &str,
    time_end: &str,
) -> Result<(Vec<Interval>, DateTime<Utc>, DateTime<Utc>), JsValue> {
    let busy = slot_engine::parse_busy_json(busy_json, &config.calendar_id, &config.timezone)
        .map_err(to_js)?;
    let start = parse_instant(time_start, &config.timezone).map_err(to_js)?;
    let end = parse_instant(time_end, &config.timezone).map_err(to_js)?;
    Ok((busy, start, end))
}

fn availability_json(
    config_json: &str,
    busy_json: &str,
    time_start: &str,
    time_end: &str,
    mode: AvailabilityMode,
) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    let (busy, start, end) = parse_request(&config, busy_json, time_start, time_end)?;
    let result = slot_engine::compute_availability(&config, &busy, start, end, mode);
    serde_json::to_string(&result).map_err(|e| to_js(format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Free intervals of `[timeStart, timeEnd]` given the busy list.
///
/// Returns a JSON array of `{start, end, duration_minutes}` with RFC 3339
/// datetimes.
#[wasm_bindgen(js_name = "freeFromBusy")]
pub fn free_from_busy(
    config_json: &str,
    busy_json: &str,
    time_start: &str,
    time_end: &str,
) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    let (busy, start, end) = parse_request(&config, busy_json, time_start, time_end)?;

    let dtos: Vec<IntervalDto> = slot_engine::free_intervals(&busy, start, end)
        .iter()
        .map(IntervalDto::from)
        .collect();

    serde_json::to_string(&dtos).map_err(|e| to_js(format!("Serialization error: {}", e)))
}

/// Dates in `[timeStart, timeEnd]` with room for at least one booking.
///
/// Returns a JSON array of `"YYYY-MM-DD"` strings.
#[wasm_bindgen(js_name = "getFreeDays")]
pub fn get_free_days(
    config_json: &str,
    busy_json: &str,
    time_start: &str,
    time_end: &str,
) -> Result<String, JsValue> {
    availability_json(
        config_json,
        busy_json,
        time_start,
        time_end,
        AvailabilityMode::Days,
    )
}

/// Bookable slot starts in `[timeStart, timeEnd]`.
///
/// Returns a JSON array of `{start: "YYYY-MM-DD HH:mm"}` objects.
#[wasm_bindgen(js_name = "getFreeTimeSlots")]
pub fn get_free_time_slots(
    config_json: &str,
    busy_json: &str,
    time_start: &str,
    time_end: &str,
) -> Result<String, JsValue> {
    availability_json(
        config_json,
        busy_json,
        time_start,
        time_end,
        AvailabilityMode::Slots,
    )
}
