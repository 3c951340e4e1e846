use chrono::NaiveDateTime;

use crate::{
    color::PaletteColor,
    error::HudResult,
    metric::{Metric, Period, focus_fraction, progress_of_period},
    render::{FrameRGBA, RingGeometry, render_rings},
    theme::Theme,
};

/// Externally fetched raw values for one render pass. The clock is a civil
/// local reading; battery and focus hours come from the caller's
/// collaborators (device query, ledger read).
#[derive(Clone, Copy, Debug)]
pub struct HudInputs {
    pub now: NaiveDateTime,
    pub battery_level: f64,
    pub dark_mode: bool,
    pub focus_hours: f64,
    pub focus_goal_hours: f64,
}

/// Daily deep-work target used when the caller does not override it.
pub const DEFAULT_FOCUS_GOAL_HOURS: f64 = 6.0;

/// The five dashboard rows, ordered outermost to innermost.
pub fn compose_metrics(inputs: &HudInputs) -> HudResult<Vec<Metric>> {
    let focus = focus_fraction(inputs.focus_hours, inputs.focus_goal_hours)?;
    Ok(vec![
        Metric::new(
            "YEAR",
            progress_of_period(Period::Year, inputs.now),
            PaletteColor::Pink,
            "calendar",
        ),
        Metric::new(
            "MONTH",
            progress_of_period(Period::Month, inputs.now),
            PaletteColor::Purple,
            "calendar.circle",
        ),
        Metric::new(
            "DAY",
            progress_of_period(Period::Day, inputs.now),
            PaletteColor::Blue,
            "sun.max.fill",
        ),
        Metric::new("FOCUS", focus, PaletteColor::Yellow, "brain.head.profile"),
        Metric::new(
            "POWER",
            inputs.battery_level,
            PaletteColor::for_battery(inputs.battery_level),
            "bolt.fill",
        ),
    ])
}

/// Full pass: resolve the theme, compose the metric list, render it.
pub fn render_dashboard(inputs: &HudInputs, geometry: RingGeometry) -> HudResult<FrameRGBA> {
    let theme = Theme::for_appearance(inputs.dark_mode);
    let metrics = compose_metrics(inputs)?;
    render_rings(&metrics, &theme, geometry)
}
