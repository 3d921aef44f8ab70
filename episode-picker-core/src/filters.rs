//! Filter configuration and candidate filtering
use crate::data::{Episode, SeasonalTag};
use serde::{Deserialize, Serialize};

/// User-toggled filters applied before sampling.
///
/// The seasonal flags are inclusive: `true` keeps episodes with that tag,
/// `false` drops them. Untagged episodes are never affected by them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterConfig {
    pub only_michael: bool,
    pub christmas: bool,
    pub halloween: bool,
    pub valentines: bool,
    pub weighted_shuffle: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            only_michael: false,
            christmas: true,
            halloween: true,
            valentines: true,
            weighted_shuffle: false,
        }
    }
}

/// Names each user-facing checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterToggle {
    OnlyMichael,
    Christmas,
    Halloween,
    Valentines,
    WeightedShuffle,
}

impl FilterToggle {
    pub const ALL: [Self; 5] = [
        Self::OnlyMichael,
        Self::Christmas,
        Self::Halloween,
        Self::Valentines,
        Self::WeightedShuffle,
    ];

    /// Field name used by the form controls and the JSON config.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::OnlyMichael => "onlyMichael",
            Self::Christmas => "christmas",
            Self::Halloween => "halloween",
            Self::Valentines => "valentines",
            Self::WeightedShuffle => "weightedShuffle",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|toggle| toggle.key() == key)
    }

    #[must_use]
    pub const fn for_tag(tag: SeasonalTag) -> Self {
        match tag {
            SeasonalTag::Christmas => Self::Christmas,
            SeasonalTag::Halloween => Self::Halloween,
            SeasonalTag::Valentines => Self::Valentines,
        }
    }
}

impl FilterConfig {
    /// Read the flag behind a checkbox.
    #[must_use]
    pub const fn get(&self, toggle: FilterToggle) -> bool {
        match toggle {
            FilterToggle::OnlyMichael => self.only_michael,
            FilterToggle::Christmas => self.christmas,
            FilterToggle::Halloween => self.halloween,
            FilterToggle::Valentines => self.valentines,
            FilterToggle::WeightedShuffle => self.weighted_shuffle,
        }
    }

    /// Copy of this configuration with a single flag replaced.
    #[must_use]
    pub const fn with_toggle(mut self, toggle: FilterToggle, checked: bool) -> Self {
        match toggle {
            FilterToggle::OnlyMichael => self.only_michael = checked,
            FilterToggle::Christmas => self.christmas = checked,
            FilterToggle::Halloween => self.halloween = checked,
            FilterToggle::Valentines => self.valentines = checked,
            FilterToggle::WeightedShuffle => self.weighted_shuffle = checked,
        }
        self
    }

    /// Whether episodes carrying `tag` are dropped.
    #[must_use]
    pub const fn excludes_tag(&self, tag: SeasonalTag) -> bool {
        !self.get(FilterToggle::for_tag(tag))
    }

    /// True when the episode passes every active predicate.
    #[must_use]
    pub fn admits(&self, episode: &Episode) -> bool {
        if self.only_michael && !episode.has_michael {
            return false;
        }
        episode
            .seasonal
            .is_none_or(|tag| !self.excludes_tag(tag))
    }
}

/// Candidate set for `filters`, preserving catalog order.
pub fn filter_candidates<'a, I>(episodes: I, filters: &FilterConfig) -> Vec<&'a Episode>
where
    I: IntoIterator<Item = &'a Episode>,
{
    episodes
        .into_iter()
        .filter(|episode| filters.admits(episode))
        .collect()
}
