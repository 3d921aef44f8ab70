//! Picker session: current filters, current result, and the single pending pick.
use crate::data::Episode;
use crate::filters::{FilterConfig, FilterToggle};
use crate::random::RandomSource;
use crate::selector::{SelectionOutcome, select};
use crate::summary::EpisodeSummary;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What the result area currently shows
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "episode", rename_all = "snake_case")]
pub enum SelectionState {
    /// Nothing picked yet in this session
    #[default]
    Unselected,
    Selected(Episode),
    /// The last pick found no episode matching the filters
    NoMatch,
}

impl SelectionState {
    #[must_use]
    pub fn summary(&self) -> Option<EpisodeSummary> {
        match self {
            Self::Selected(episode) => Some(EpisodeSummary::from_episode(episode)),
            Self::Unselected | Self::NoMatch => None,
        }
    }

    #[must_use]
    pub const fn is_unselected(&self) -> bool {
        matches!(self, Self::Unselected)
    }
}

impl From<SelectionOutcome<'_>> for SelectionState {
    fn from(outcome: SelectionOutcome<'_>) -> Self {
        match outcome {
            SelectionOutcome::Selected(episode) => Self::Selected(episode.clone()),
            SelectionOutcome::NoMatch => Self::NoMatch,
        }
    }
}

/// Handle for the one pick a session may have in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PickTicket(u64);

impl PickTicket {
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("pick ticket {ticket} is not the pending pick")]
    StaleTicket { ticket: u64 },
}

/// UI-independent state machine behind the picker screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickerSession {
    filters: FilterConfig,
    state: SelectionState,
    pending: Option<PickTicket>,
    issued: u64,
}

impl PickerSession {
    #[must_use]
    pub fn new(filters: FilterConfig) -> Self {
        Self {
            filters,
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn filters(&self) -> &FilterConfig {
        &self.filters
    }

    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Replace the filter configuration wholesale.
    pub const fn set_filters(&mut self, filters: FilterConfig) {
        self.filters = filters;
    }

    pub const fn toggle(&mut self, toggle: FilterToggle, checked: bool) {
        self.filters = self.filters.with_toggle(toggle, checked);
    }

    /// Start a pick. Returns `None` while another pick is pending.
    pub fn begin_pick(&mut self) -> Option<PickTicket> {
        if self.pending.is_some() {
            log::debug!("pick requested while busy; ignoring");
            return None;
        }
        self.issued = self.issued.wrapping_add(1);
        let ticket = PickTicket(self.issued);
        self.pending = Some(ticket);
        Some(ticket)
    }

    /// Drop the pending pick without touching the current result.
    pub const fn cancel_pick(&mut self) {
        self.pending = None;
    }

    /// Run the selection for `ticket` with the filters current at resolve time.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::StaleTicket` when `ticket` is not the pending
    /// pick; the session is left untouched in that case.
    pub fn resolve_pick<R: RandomSource + ?Sized>(
        &mut self,
        ticket: PickTicket,
        episodes: &[Episode],
        rng: &mut R,
    ) -> Result<&SelectionState, SessionError> {
        if self.pending != Some(ticket) {
            return Err(SessionError::StaleTicket { ticket: ticket.id() });
        }
        let outcome = select(episodes, &self.filters, rng);
        self.state = SelectionState::from(outcome);
        self.pending = None;
        Ok(&self.state)
    }

    /// Begin and resolve in one step, for callers without a reveal delay.
    pub fn pick_now<R: RandomSource + ?Sized>(
        &mut self,
        episodes: &[Episode],
        rng: &mut R,
    ) -> Option<&SelectionState> {
        let ticket = self.begin_pick()?;
        self.resolve_pick(ticket, episodes, rng).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SeasonalTag;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn catalog() -> Vec<Episode> {
        vec![
            Episode {
                title: "A".to_string(),
                season: 1,
                episode: 1,
                has_michael: true,
                seasonal: None,
                imdb_rating: 9.5,
            },
            Episode {
                title: "B".to_string(),
                season: 1,
                episode: 2,
                has_michael: false,
                seasonal: Some(SeasonalTag::Christmas),
                imdb_rating: 7.0,
            },
        ]
    }

    #[test]
    fn new_session_starts_unselected_and_idle() {
        let session = PickerSession::new(FilterConfig::default());
        assert!(session.state().is_unselected());
        assert!(!session.is_busy());
        assert_eq!(session.state().summary(), None);
    }

    #[test]
    fn second_begin_while_pending_is_ignored() {
        let mut session = PickerSession::default();
        let first = session.begin_pick().expect("first pick starts");
        assert!(session.is_busy());
        assert_eq!(session.begin_pick(), None);

        let mut rng = SmallRng::seed_from_u64(1);
        session.resolve_pick(first, &catalog(), &mut rng).unwrap();
        assert!(!session.is_busy());
        assert!(session.begin_pick().is_some());
    }

    #[test]
    fn stale_ticket_leaves_state_untouched() {
        let mut session = PickerSession::default();
        let first = session.begin_pick().unwrap();
        session.cancel_pick();
        let second = session.begin_pick().unwrap();
        assert_ne!(first, second);

        let mut rng = SmallRng::seed_from_u64(2);
        let err = session.resolve_pick(first, &catalog(), &mut rng).unwrap_err();
        assert_eq!(err, SessionError::StaleTicket { ticket: first.id() });
        assert!(session.state().is_unselected());
        assert!(session.is_busy());

        session.resolve_pick(second, &catalog(), &mut rng).unwrap();
        assert!(matches!(session.state(), SelectionState::Selected(_)));
    }

    #[test]
    fn no_match_is_distinct_from_unselected() {
        let mut session = PickerSession::default();
        session.toggle(FilterToggle::OnlyMichael, true);
        session.toggle(FilterToggle::Christmas, false);
        let catalog = vec![catalog().remove(1)];
        let mut rng = SmallRng::seed_from_u64(3);
        let state = session.pick_now(&catalog, &mut rng).cloned();
        assert_eq!(state, Some(SelectionState::NoMatch));
        assert!(!session.state().is_unselected());
    }

    #[test]
    fn resolve_uses_filters_current_at_resolve_time() {
        let mut session = PickerSession::default();
        let ticket = session.begin_pick().unwrap();
        session.set_filters(FilterConfig {
            christmas: false,
            ..FilterConfig::default()
        });
        let mut rng = SmallRng::seed_from_u64(4);
        let state = session.resolve_pick(ticket, &catalog(), &mut rng).unwrap();
        let summary = state.summary().expect("selected");
        assert_eq!(summary.title, "A");
    }

    #[test]
    fn state_serializes_with_kind_tag() {
        let json = serde_json::to_string(&SelectionState::NoMatch).unwrap();
        assert_eq!(json, r#"{"kind":"no_match"}"#);
    }
}
