//! Episode selection: filter the catalog, then sample one candidate.
use crate::constants::TRACE_POOL_ID;
use crate::data::Episode;
use crate::filters::{FilterConfig, filter_candidates};
use crate::numbers::unit_to_index;
use crate::random::RandomSource;
use serde::{Deserialize, Serialize};

/// How a candidate is drawn from a non-empty candidate set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SamplingMode {
    /// Every candidate has probability `1/N`
    Uniform,
    /// Probability proportional to `imdb_rating^2`
    Weighted,
}

impl SamplingMode {
    #[must_use]
    pub const fn for_filters(filters: &FilterConfig) -> Self {
        if filters.weighted_shuffle {
            Self::Weighted
        } else {
            Self::Uniform
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Weighted => "weighted",
        }
    }
}

/// Result of a single selection
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectionOutcome<'a> {
    Selected(&'a Episode),
    /// The filters left no candidates
    NoMatch,
}

impl<'a> SelectionOutcome<'a> {
    #[must_use]
    pub const fn episode(&self) -> Option<&'a Episode> {
        match *self {
            Self::Selected(episode) => Some(episode),
            Self::NoMatch => None,
        }
    }

    #[must_use]
    pub const fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

/// Per-candidate entry in a decision trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedCandidate {
    pub title: String,
    pub season: u32,
    pub episode: u32,
    pub weight: f64,
}

/// Diagnostic record of how a pick was made.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionTrace {
    pub pool_id: String,
    pub mode: SamplingMode,
    /// Raw roll in `[0, 1)`.
    pub roll: f64,
    /// Roll scaled to the candidate count or the total weight.
    pub scaled_roll: f64,
    pub total_weight: f64,
    pub candidates: Vec<WeightedCandidate>,
    pub chosen_index: usize,
    pub chosen_title: String,
    /// Set when the last candidate was taken because the weighted walk never settled.
    pub fallback: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Pick {
    index: usize,
    scaled_roll: f64,
    total_weight: f64,
    fallback: bool,
}

fn choose_uniform(len: usize, roll: f64) -> Option<Pick> {
    let index = unit_to_index(roll, len)?;
    let count = crate::numbers::usize_to_f64(len);
    Some(Pick {
        index,
        scaled_roll: roll * count,
        total_weight: count,
        fallback: false,
    })
}

fn choose_weighted(weights: &[f64], roll: f64) -> Option<Pick> {
    let last = weights.len().checked_sub(1)?;
    let total_weight: f64 = weights.iter().sum();
    if !total_weight.is_finite() || total_weight <= 0.0 {
        log::warn!("weighted selection has no usable weight ({total_weight}); taking last candidate");
        return Some(Pick {
            index: last,
            scaled_roll: 0.0,
            total_weight,
            fallback: true,
        });
    }

    let scaled_roll = roll * total_weight;
    let mut remaining = scaled_roll;
    for (index, weight) in weights.iter().enumerate() {
        remaining -= weight;
        if remaining <= 0.0 {
            return Some(Pick {
                index,
                scaled_roll,
                total_weight,
                fallback: false,
            });
        }
    }

    log::debug!("weighted walk left {remaining} unassigned; taking last candidate");
    Some(Pick {
        index: last,
        scaled_roll,
        total_weight,
        fallback: true,
    })
}

fn pick_candidate<R: RandomSource + ?Sized>(
    candidates: &[&Episode],
    mode: SamplingMode,
    rng: &mut R,
) -> Option<(Pick, f64, Vec<f64>)> {
    if candidates.is_empty() {
        return None;
    }
    let roll = rng.next_unit();
    match mode {
        SamplingMode::Uniform => {
            choose_uniform(candidates.len(), roll).map(|pick| (pick, roll, Vec::new()))
        }
        SamplingMode::Weighted => {
            let weights: Vec<f64> = candidates.iter().map(|episode| episode.weight()).collect();
            choose_weighted(&weights, roll).map(|pick| (pick, roll, weights))
        }
    }
}

fn build_trace(
    candidates: &[&Episode],
    weights: &[f64],
    mode: SamplingMode,
    roll: f64,
    pick: Pick,
    chosen: &Episode,
) -> SelectionTrace {
    let candidates = candidates
        .iter()
        .enumerate()
        .map(|(idx, episode)| WeightedCandidate {
            title: episode.title.clone(),
            season: episode.season,
            episode: episode.episode,
            weight: weights.get(idx).copied().unwrap_or(1.0),
        })
        .collect();

    SelectionTrace {
        pool_id: String::from(TRACE_POOL_ID),
        mode,
        roll,
        scaled_roll: pick.scaled_roll,
        total_weight: pick.total_weight,
        candidates,
        chosen_index: pick.index,
        chosen_title: chosen.title.clone(),
        fallback: pick.fallback,
    }
}

/// Pick one episode matching `filters`, or report that none match.
///
/// Draws exactly one roll from `rng` when the candidate set is non-empty and
/// none otherwise.
pub fn select<'a, R: RandomSource + ?Sized>(
    episodes: &'a [Episode],
    filters: &FilterConfig,
    rng: &mut R,
) -> SelectionOutcome<'a> {
    run_selection(episodes, filters, rng, false).0
}

/// Same as [`select`], also returning the decision trace for a successful pick.
pub fn select_traced<'a, R: RandomSource + ?Sized>(
    episodes: &'a [Episode],
    filters: &FilterConfig,
    rng: &mut R,
) -> (SelectionOutcome<'a>, Option<SelectionTrace>) {
    run_selection(episodes, filters, rng, true)
}

fn run_selection<'a, R: RandomSource + ?Sized>(
    episodes: &'a [Episode],
    filters: &FilterConfig,
    rng: &mut R,
    traced: bool,
) -> (SelectionOutcome<'a>, Option<SelectionTrace>) {
    let candidates = filter_candidates(episodes, filters);
    let mode = SamplingMode::for_filters(filters);
    log::debug!(
        "episode selection | mode:{} catalog:{} candidates:{}",
        mode.label(),
        episodes.len(),
        candidates.len()
    );

    let Some((pick, roll, weights)) = pick_candidate(&candidates, mode, rng) else {
        return (SelectionOutcome::NoMatch, None);
    };
    let Some(chosen) = candidates.get(pick.index).copied() else {
        return (SelectionOutcome::NoMatch, None);
    };
    log::debug!(
        "episode selection | picked S{}E{} {} (roll {roll:.4})",
        chosen.season,
        chosen.episode,
        chosen.title
    );

    let trace = traced.then(|| build_trace(&candidates, &weights, mode, roll, pick, chosen));
    (SelectionOutcome::Selected(chosen), trace)
}
