#![forbid(unsafe_code)]

pub mod arc;
pub mod color;
pub mod dashboard;
pub mod error;
pub mod layout;
pub mod ledger;
pub mod metric;
pub mod render;
pub mod theme;

pub use color::{PaletteColor, Rgba8};
pub use dashboard::{DEFAULT_FOCUS_GOAL_HOURS, HudInputs, compose_metrics, render_dashboard};
pub use error::{HudError, HudResult};
pub use layout::{RingSpec, layout_rings};
pub use ledger::{Ledger, LedgerRecord};
pub use metric::{Metric, Period, focus_fraction, format_hours, format_percent, progress_of_period};
pub use render::{FrameRGBA, RingGeometry, render_rings};
pub use theme::Theme;
