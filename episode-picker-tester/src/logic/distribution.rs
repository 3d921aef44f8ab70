//! Seeded frequency sweeps over the selection engine
use episode_picker_core::numbers::usize_to_f64;
use episode_picker_core::{
    Episode, EpisodeSummary, FilterConfig, SamplingMode, SeasonalTag, SelectionOutcome, select,
    select_traced,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use serde::Serialize;

/// Observed vs expected frequency for one candidate.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateStat {
    pub code: String,
    pub title: String,
    pub hits: usize,
    pub expected: f64,
    pub observed: f64,
    pub deviation: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionResult {
    pub seed: u64,
    pub iterations: usize,
    pub mode: SamplingMode,
    pub candidate_count: usize,
    pub no_match: usize,
    pub max_deviation: f64,
    pub tolerance: f64,
    /// Picks that did not satisfy the filters.
    pub violations: Vec<String>,
    pub passed: bool,
    pub stats: Vec<CandidateStat>,
}

fn expected_shares(candidates: &[&Episode], mode: SamplingMode) -> Vec<f64> {
    let n = candidates.len();
    if n == 0 {
        return Vec::new();
    }
    match mode {
        SamplingMode::Uniform => vec![1.0 / usize_to_f64(n); n],
        SamplingMode::Weighted => {
            let total: f64 = candidates.iter().map(|ep| ep.weight()).sum();
            if total.is_finite() && total > 0.0 {
                candidates.iter().map(|ep| ep.weight() / total).collect()
            } else {
                // Degenerate totals always land on the last candidate.
                let mut shares = vec![0.0; n];
                shares[n - 1] = 1.0;
                shares
            }
        }
    }
}

/// Whether `episode` breaks `filters`, checked against the raw episode fields.
/// Must not route through `FilterConfig::admits`.
#[must_use]
pub fn violates(filters: &FilterConfig, episode: &Episode) -> bool {
    if filters.only_michael && !episode.has_michael {
        return true;
    }
    match episode.seasonal {
        Some(SeasonalTag::Christmas) => !filters.christmas,
        Some(SeasonalTag::Halloween) => !filters.halloween,
        Some(SeasonalTag::Valentines) => !filters.valentines,
        None => false,
    }
}

/// Run `iterations` seeded picks and compare frequencies with the model.
#[must_use]
pub fn run_distribution(
    episodes: &[Episode],
    filters: &FilterConfig,
    seed: u64,
    iterations: usize,
    tolerance: f64,
) -> DistributionResult {
    sweep(episodes, filters, seed, iterations, tolerance, |rng, iteration| {
        if iteration == 0 {
            let (outcome, trace) = select_traced(episodes, filters, rng);
            if let Some(trace) = trace {
                log::debug!(
                    "seed {seed}: first pick {} (roll {:.4}, total weight {:.2})",
                    trace.chosen_title,
                    trace.roll,
                    trace.total_weight
                );
            }
            outcome
        } else {
            select(episodes, filters, rng)
        }
    })
}

fn sweep<'a, F>(
    episodes: &'a [Episode],
    filters: &FilterConfig,
    seed: u64,
    iterations: usize,
    tolerance: f64,
    mut pick: F,
) -> DistributionResult
where
    F: FnMut(&mut ChaCha20Rng, usize) -> SelectionOutcome<'a>,
{
    let mode = SamplingMode::for_filters(filters);
    let candidates: Vec<&Episode> = episodes
        .iter()
        .filter(|episode| !violates(filters, episode))
        .collect();
    let expected = expected_shares(&candidates, mode);
    let mut hits = vec![0_usize; candidates.len()];
    let mut no_match = 0_usize;
    let mut violations = Vec::new();
    let mut rng = ChaCha20Rng::seed_from_u64(seed);

    for iteration in 0..iterations {
        match pick(&mut rng, iteration) {
            SelectionOutcome::Selected(episode) => {
                if violates(filters, episode) {
                    violations.push(format!(
                        "{} {}",
                        EpisodeSummary::from_episode(episode).code(),
                        episode.title
                    ));
                }
                if let Some(idx) = candidates.iter().position(|c| std::ptr::eq(*c, episode)) {
                    hits[idx] += 1;
                }
            }
            SelectionOutcome::NoMatch => no_match += 1,
        }
    }

    let runs = usize_to_f64(iterations.max(1));
    let stats: Vec<CandidateStat> = candidates
        .iter()
        .zip(hits.iter().zip(expected.iter()))
        .map(|(episode, (&count, &share))| {
            let observed = usize_to_f64(count) / runs;
            CandidateStat {
                code: EpisodeSummary::from_episode(episode).code(),
                title: episode.title.clone(),
                hits: count,
                expected: share,
                observed,
                deviation: (observed - share).abs(),
            }
        })
        .collect();
    let max_deviation = stats.iter().map(|s| s.deviation).fold(0.0, f64::max);

    let no_match_ok = if candidates.is_empty() {
        no_match == iterations
    } else {
        no_match == 0
    };
    let passed = violations.is_empty() && no_match_ok && max_deviation <= tolerance;

    log::info!(
        "seed {seed}: {} candidates, max deviation {max_deviation:.5}, passed={passed}",
        candidates.len()
    );

    DistributionResult {
        seed,
        iterations,
        mode,
        candidate_count: candidates.len(),
        no_match,
        max_deviation,
        tolerance,
        violations,
        passed,
        stats,
    }
}
