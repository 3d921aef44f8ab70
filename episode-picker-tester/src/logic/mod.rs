pub mod distribution;
pub mod reports;
pub mod seeds;

use anyhow::{Context, Result, bail};
use episode_picker_core::{Catalog, FilterConfig, FilterToggle};
use std::path::Path;

pub use distribution::{CandidateStat, DistributionResult, run_distribution};
pub use seeds::resolve_seed_inputs;

const BUNDLED_EPISODES: &str =
    include_str!("../../../episode-picker-web/static/assets/data/episodes.json");

/// Load a catalog from `path`, or the catalog shipped with the web app.
pub fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    let Some(path) = path else {
        return Catalog::from_json(BUNDLED_EPISODES).context("parsing bundled catalog");
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    Catalog::from_json(&json).with_context(|| format!("invalid catalog {}", path.display()))
}

/// Build the filter set for a run from CLI flags.
///
/// `exclude` names seasonal toggles to switch off.
pub fn build_filters(
    only_michael: bool,
    exclude: &[String],
    weighted: bool,
) -> Result<FilterConfig> {
    let mut filters = FilterConfig {
        only_michael,
        weighted_shuffle: weighted,
        ..FilterConfig::default()
    };
    for name in exclude {
        let toggle = match FilterToggle::from_key(&name.to_ascii_lowercase()) {
            Some(
                toggle @ (FilterToggle::Christmas
                | FilterToggle::Halloween
                | FilterToggle::Valentines),
            ) => toggle,
            _ => bail!("unknown seasonal tag '{name}' (expected christmas, halloween or valentines)"),
        };
        filters = filters.with_toggle(toggle, false);
    }
    Ok(filters)
}
