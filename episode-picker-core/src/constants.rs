//! Centralized bounds and tuning values for episode selection.
//!
//! Keeping them together means the accepted rating domain and the reveal
//! timing can only change through reviewed code, not through bundled JSON.

// Catalog bounds -----------------------------------------------------------
pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;

// Presentation timing ------------------------------------------------------
pub const DEFAULT_REVEAL_DELAY_MS: u32 = 800;
pub const MAX_REVEAL_DELAY_MS: u32 = 5_000;

// Seasonal labels as they appear in the bundled dataset --------------------
pub const LABEL_CHRISTMAS: &str = "Christmas";
pub const LABEL_HALLOWEEN: &str = "Halloween";
pub const LABEL_VALENTINES: &str = "Valentine's Day";

// Trace identifiers --------------------------------------------------------
pub(crate) const TRACE_POOL_ID: &str = "episode-picker.selection";

/// Tolerance used by float comparisons in tests.
#[cfg(test)]
pub(crate) const FLOAT_EPSILON: f64 = 1e-9;
