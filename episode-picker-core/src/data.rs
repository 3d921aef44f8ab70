use crate::constants::{LABEL_CHRISTMAS, LABEL_HALLOWEEN, LABEL_VALENTINES, MAX_RATING, MIN_RATING};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Holiday an episode is associated with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeasonalTag {
    Christmas,
    Halloween,
    #[serde(rename = "Valentine's Day")]
    Valentines,
}

impl SeasonalTag {
    pub const ALL: [Self; 3] = [Self::Christmas, Self::Halloween, Self::Valentines];

    /// Label used by the bundled dataset.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Christmas => LABEL_CHRISTMAS,
            Self::Halloween => LABEL_HALLOWEEN,
            Self::Valentines => LABEL_VALENTINES,
        }
    }
}

impl std::fmt::Display for SeasonalTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single episode record from the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Episode {
    pub title: String,
    pub season: u32,
    pub episode: u32,
    #[serde(default)]
    pub has_michael: bool,
    #[serde(default)]
    pub seasonal: Option<SeasonalTag>,
    pub imdb_rating: f64,
}

impl Episode {
    /// Sampling weight used by weighted shuffles.
    #[must_use]
    pub fn weight(&self) -> f64 {
        self.imdb_rating * self.imdb_rating
    }

    #[must_use]
    pub fn is_tagged(&self, tag: SeasonalTag) -> bool {
        self.seasonal == Some(tag)
    }
}

/// Errors raised while building a catalog from raw records.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON could not be parsed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("episode #{index} has an empty title")]
    EmptyTitle { index: usize },
    #[error("episode #{index} ({title}) has season 0")]
    InvalidSeason { index: usize, title: String },
    #[error("episode #{index} ({title}) has episode number 0")]
    InvalidEpisodeNumber { index: usize, title: String },
    #[error("episode #{index} ({title}) rating {value} is outside 0..=10")]
    RatingOutOfRange {
        index: usize,
        title: String,
        value: f64,
    },
}

fn validate_episode(index: usize, episode: &Episode) -> Result<(), CatalogError> {
    if episode.title.trim().is_empty() {
        return Err(CatalogError::EmptyTitle { index });
    }
    if episode.season == 0 {
        return Err(CatalogError::InvalidSeason {
            index,
            title: episode.title.clone(),
        });
    }
    if episode.episode == 0 {
        return Err(CatalogError::InvalidEpisodeNumber {
            index,
            title: episode.title.clone(),
        });
    }
    let rating = episode.imdb_rating;
    if !rating.is_finite() || !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(CatalogError::RatingOutOfRange {
            index,
            title: episode.title.clone(),
            value: rating,
        });
    }
    Ok(())
}

/// Ordered, validated, read-only list of episodes
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Episode>", into = "Vec<Episode>")]
pub struct Catalog {
    episodes: Vec<Episode>,
}

impl Catalog {
    /// Create an empty catalog (useful for tests and failed loads)
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            episodes: Vec::new(),
        }
    }

    /// Build a catalog, rejecting malformed records up front.
    ///
    /// # Errors
    ///
    /// Returns the first `CatalogError` found, in catalog order.
    pub fn new(episodes: Vec<Episode>) -> Result<Self, CatalogError> {
        for (index, episode) in episodes.iter().enumerate() {
            validate_episode(index, episode)?;
        }
        Ok(Self { episodes })
    }

    /// Load a catalog from a JSON array of episode objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON cannot be parsed or any record is invalid.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let episodes: Vec<Episode> = serde_json::from_str(json)?;
        Self::new(episodes)
    }

    #[must_use]
    pub fn episodes(&self) -> &[Episode] {
        &self.episodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Episode> {
        self.episodes.iter()
    }
}

impl TryFrom<Vec<Episode>> for Catalog {
    type Error = CatalogError;

    fn try_from(episodes: Vec<Episode>) -> Result<Self, Self::Error> {
        Self::new(episodes)
    }
}

impl From<Catalog> for Vec<Episode> {
    fn from(catalog: Catalog) -> Self {
        catalog.episodes
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Episode;
    type IntoIter = std::slice::Iter<'a, Episode>;

    fn into_iter(self) -> Self::IntoIter {
        self.episodes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ep(title: &str, season: u32, episode: u32, rating: f64) -> Episode {
        Episode {
            title: title.to_string(),
            season,
            episode,
            has_michael: true,
            seasonal: None,
            imdb_rating: rating,
        }
    }

    #[test]
    fn catalog_from_json_reads_camel_case_fields() {
        let json = r#"[
            {"title":"A","season":1,"episode":1,"hasMichael":true,"seasonal":null,"imdbRating":9.5},
            {"title":"B","season":1,"episode":2,"hasMichael":false,"seasonal":"Christmas","imdbRating":7.0},
            {"title":"C","season":2,"episode":3,"hasMichael":true,"seasonal":"Valentine's Day","imdbRating":8.1},
            {"title":"D","season":2,"episode":4,"hasMichael":true,"imdbRating":8.0}
        ]"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 4);
        let eps = catalog.episodes();
        assert!(eps[0].has_michael);
        assert_eq!(eps[0].seasonal, None);
        assert_eq!(eps[1].seasonal, Some(SeasonalTag::Christmas));
        assert_eq!(eps[2].seasonal, Some(SeasonalTag::Valentines));
        assert_eq!(eps[3].seasonal, None);
        assert!((eps[2].imdb_rating - 8.1).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_seasonal_label_is_rejected() {
        let json = r#"[{"title":"A","season":1,"episode":1,"seasonal":"Easter","imdbRating":8.0}]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn validation_rejects_malformed_records() {
        assert!(matches!(
            Catalog::new(vec![ep("  ", 1, 1, 8.0)]),
            Err(CatalogError::EmptyTitle { index: 0 })
        ));
        assert!(matches!(
            Catalog::new(vec![ep("ok", 1, 1, 8.0), ep("bad", 0, 1, 8.0)]),
            Err(CatalogError::InvalidSeason { index: 1, .. })
        ));
        assert!(matches!(
            Catalog::new(vec![ep("bad", 1, 0, 8.0)]),
            Err(CatalogError::InvalidEpisodeNumber { index: 0, .. })
        ));
        assert!(matches!(
            Catalog::new(vec![ep("bad", 1, 1, 10.5)]),
            Err(CatalogError::RatingOutOfRange { index: 0, .. })
        ));
        assert!(matches!(
            Catalog::new(vec![ep("bad", 1, 1, f64::NAN)]),
            Err(CatalogError::RatingOutOfRange { .. })
        ));
    }

    #[test]
    fn deserializing_a_catalog_runs_validation() {
        let bad = r#"[{"title":"A","season":0,"episode":1,"imdbRating":8.0}]"#;
        assert!(serde_json::from_str::<Catalog>(bad).is_err());
        let good = r#"[{"title":"A","season":1,"episode":1,"imdbRating":8.0}]"#;
        let catalog: Catalog = serde_json::from_str(good).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn weight_is_rating_squared() {
        let episode = ep("A", 1, 1, 9.0);
        assert!((episode.weight() - 81.0).abs() < f64::EPSILON);
    }

    #[test]
    fn seasonal_labels_match_dataset() {
        assert_eq!(SeasonalTag::Valentines.to_string(), "Valentine's Day");
        assert_eq!(
            serde_json::to_string(&SeasonalTag::Halloween).unwrap(),
            "\"Halloween\""
        );
    }
}
