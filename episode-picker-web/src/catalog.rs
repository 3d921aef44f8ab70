//! Web-specific catalog loading
//!
//! Provides the browser implementation of the core `CatalogLoader` and
//! re-exports the core picker types.

pub use episode_picker_core::*;

const EPISODES_JSON: &str = include_str!("../static/assets/data/episodes.json");
const PICKER_JSON: &str = include_str!("../static/assets/data/picker.json");

/// Loader backed by the JSON bundled into the wasm binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLoader;

#[derive(Debug, thiserror::Error)]
pub enum WebDataError {
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl CatalogLoader for BundledLoader {
    type Error = WebDataError;

    fn load_catalog(&self) -> Result<Catalog, Self::Error> {
        Ok(Catalog::from_json(EPISODES_JSON)?)
    }

    fn load_config(&self) -> Result<PickerConfig, Self::Error> {
        Ok(PickerConfig::from_json(PICKER_JSON)?)
    }
}

/// Load catalog and config, degrading to an empty catalog and default config.
///
/// An empty catalog makes every pick report no match instead of failing to boot.
#[must_use]
pub fn load_bundled<L: CatalogLoader>(loader: &L) -> (Catalog, PickerConfig) {
    let catalog = loader.load_catalog().unwrap_or_else(|err| {
        log::error!("Failed to load episode catalog: {err}");
        Catalog::empty()
    });
    let config = loader.load_config().unwrap_or_else(|err| {
        log::error!("Failed to load picker config: {err}");
        PickerConfig::default()
    });
    (catalog, config)
}
