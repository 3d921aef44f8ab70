//! Episode Picker Engine
//!
//! Platform-agnostic core logic for the random episode picker.
//! This crate provides catalog validation, filtering, and uniform or
//! rating-weighted sampling without UI or platform-specific dependencies.

pub mod config;
pub mod constants;
pub mod data;
pub mod filters;
pub mod numbers;
pub mod random;
pub mod selector;
pub mod session;
pub mod summary;

// Re-export commonly used types
pub use config::{ConfigError, PickerConfig};
pub use data::{Catalog, CatalogError, Episode, SeasonalTag};
pub use filters::{FilterConfig, FilterToggle, filter_candidates};
pub use random::RandomSource;
pub use selector::{
    SamplingMode, SelectionOutcome, SelectionTrace, WeightedCandidate, select, select_traced,
};
pub use session::{PickTicket, PickerSession, SelectionState, SessionError};
pub use summary::EpisodeSummary;

/// Trait for abstracting catalog loading
/// Platform-specific implementations should provide this
pub trait CatalogLoader {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Load the episode catalog from the platform-specific source
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded or fails validation.
    fn load_catalog(&self) -> Result<Catalog, Self::Error>;

    /// Load picker configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or parsed.
    fn load_config(&self) -> Result<PickerConfig, Self::Error>;
}

/// Main engine wiring a loader to picker sessions
pub struct PickerEngine<L>
where
    L: CatalogLoader,
{
    loader: L,
}

impl<L> PickerEngine<L>
where
    L: CatalogLoader,
{
    /// Create a new engine with the provided loader
    pub const fn new(loader: L) -> Self {
        Self { loader }
    }

    /// Load the catalog through the loader
    ///
    /// # Errors
    ///
    /// Returns an error if the catalog cannot be loaded.
    pub fn catalog(&self) -> Result<Catalog, L::Error> {
        let catalog = self.loader.load_catalog()?;
        log::debug!("catalog loaded with {} episodes", catalog.len());
        Ok(catalog)
    }

    /// Create a session seeded with the configured default filters.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded.
    pub fn create_session(&self) -> Result<PickerSession, L::Error> {
        let config = self.loader.load_config()?;
        Ok(PickerSession::new(config.default_filters))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use std::convert::Infallible;

    #[derive(Clone, Copy, Default)]
    struct FixtureLoader;

    impl CatalogLoader for FixtureLoader {
        type Error = Infallible;

        fn load_catalog(&self) -> Result<Catalog, Self::Error> {
            Ok(Catalog::new(vec![Episode {
                title: "Pilot".to_string(),
                season: 1,
                episode: 1,
                has_michael: true,
                seasonal: None,
                imdb_rating: 7.4,
            }])
            .unwrap())
        }

        fn load_config(&self) -> Result<PickerConfig, Self::Error> {
            Ok(PickerConfig {
                reveal_delay_ms: 0,
                default_filters: FilterConfig {
                    weighted_shuffle: true,
                    ..FilterConfig::default()
                },
            })
        }
    }

    #[test]
    fn engine_creates_session_with_configured_filters() {
        let engine = PickerEngine::new(FixtureLoader);
        let session = engine.create_session().unwrap();
        assert!(session.filters().weighted_shuffle);
        assert!(session.state().is_unselected());
    }

    #[test]
    fn engine_session_picks_from_loaded_catalog() {
        let engine = PickerEngine::new(FixtureLoader);
        let catalog = engine.catalog().unwrap();
        let mut session = engine.create_session().unwrap();
        let mut rng = SmallRng::seed_from_u64(0xC0FFEE);
        let state = session.pick_now(catalog.episodes(), &mut rng).cloned();
        let summary = state.and_then(|s| s.summary()).expect("pilot picked");
        assert_eq!(summary.title, "Pilot");
    }
}
