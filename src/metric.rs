use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::{
    color::PaletteColor,
    error::{HudError, HudResult},
};

/// One normalized [0,1] quantity rendered as one ring.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Metric {
    pub label: String,
    /// Clamped to [0,1] on construction; out-of-range values never reach
    /// the arc builder.
    pub value: f64,
    pub color: PaletteColor,
    /// Icon name for the caller's label column; not consumed by rendering.
    pub icon: String,
}

impl Metric {
    pub fn new(
        label: impl Into<String>,
        value: f64,
        color: PaletteColor,
        icon: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            value: clamp_unit(value),
            color,
            icon: icon.into(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Period {
    Day,
    Month,
    Year,
}

/// Fraction of the calendar period containing `now` that has elapsed, in
/// civil local time. Period boundaries are real calendar boundaries, so
/// month lengths (28/29/30/31) and leap years fall out of the date math.
pub fn progress_of_period(period: Period, now: NaiveDateTime) -> f64 {
    let date = now.date();
    let (start, end) = match period {
        Period::Day => {
            let start = civil_midnight(date);
            (start, start + chrono::Duration::days(1))
        }
        Period::Month => {
            let start = NaiveDate::from_ymd_opt(date.year(), date.month(), 1);
            let end = if date.month() == 12 {
                NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
            } else {
                NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
            };
            let (Some(start), Some(end)) = (start, end) else {
                return 0.0;
            };
            (civil_midnight(start), civil_midnight(end))
        }
        Period::Year => {
            let start = NaiveDate::from_ymd_opt(date.year(), 1, 1);
            let end = NaiveDate::from_ymd_opt(date.year() + 1, 1, 1);
            let (Some(start), Some(end)) = (start, end) else {
                return 0.0;
            };
            (civil_midnight(start), civil_midnight(end))
        }
    };

    let elapsed = (now - start).num_milliseconds() as f64;
    let span = (end - start).num_milliseconds() as f64;
    // Clamp guards against clock skew around the boundary, not normal input.
    clamp_unit(elapsed / span)
}

/// Focus progress toward the daily goal, clamped to [0,1].
pub fn focus_fraction(hours: f64, goal_hours: f64) -> HudResult<f64> {
    if !(goal_hours > 0.0) {
        return Err(HudError::validation("focus goal hours must be > 0"));
    }
    Ok(clamp_unit(hours / goal_hours))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", (clamp_unit(value) * 100.0).round() as i64)
}

pub fn format_hours(hours: f64) -> String {
    format!("{:.1}h", hours)
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

fn civil_midnight(date: NaiveDate) -> NaiveDateTime {
    NaiveDateTime::new(date, NaiveTime::MIN)
}
