//! Render-ready view of a picked episode
use crate::data::{Episode, SeasonalTag};
use serde::{Deserialize, Serialize};

/// Structured data a rendering layer needs to show a pick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeSummary {
    pub title: String,
    pub season: u32,
    pub episode: u32,
    pub seasonal: Option<SeasonalTag>,
    /// Rating with one decimal, e.g. `"9.5"`.
    pub rating: String,
}

impl EpisodeSummary {
    #[must_use]
    pub fn from_episode(episode: &Episode) -> Self {
        Self {
            title: episode.title.clone(),
            season: episode.season,
            episode: episode.episode,
            seasonal: episode.seasonal,
            rating: format!("{:.1}", episode.imdb_rating),
        }
    }

    /// "Christmas Special" for tagged episodes.
    #[must_use]
    pub fn seasonal_label(&self) -> Option<String> {
        self.seasonal.map(|tag| format!("{tag} Special"))
    }

    /// Compact code used in logs and reports, e.g. `S02E10`.
    #[must_use]
    pub fn code(&self) -> String {
        format!("S{:02}E{:02}", self.season, self.episode)
    }
}

impl From<&Episode> for EpisodeSummary {
    fn from(episode: &Episode) -> Self {
        Self::from_episode(episode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_formats_position_tag_and_rating() {
        let episode = Episode {
            title: "Christmas Party".to_string(),
            season: 2,
            episode: 10,
            has_michael: true,
            seasonal: Some(SeasonalTag::Christmas),
            imdb_rating: 8.04,
        };
        let summary = EpisodeSummary::from(&episode);
        assert_eq!((summary.season, summary.episode), (2, 10));
        assert_eq!(summary.seasonal_label().as_deref(), Some("Christmas Special"));
        assert_eq!(summary.rating, "8.0");
        assert_eq!(summary.code(), "S02E10");
    }

    #[test]
    fn untagged_episode_has_no_seasonal_label() {
        let episode = Episode {
            title: "Pilot".to_string(),
            season: 1,
            episode: 1,
            has_michael: true,
            seasonal: None,
            imdb_rating: 7.4,
        };
        let summary = EpisodeSummary::from_episode(&episode);
        assert_eq!(summary.seasonal_label(), None);
        assert_eq!(summary.rating, "7.4");
    }
}
