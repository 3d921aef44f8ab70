//! Event handlers for the picker screen
use crate::app::state::AppState;
use crate::dom;
use episode_picker_core::{
    Catalog, FilterToggle, PickTicket, PickerSession, SelectionState, SessionError,
};
use rand::rngs::SmallRng;
use std::cell::RefCell;

/// Apply a checkbox change to the session.
#[must_use]
pub fn toggle_callback(app_state: &AppState) -> yew::Callback<(FilterToggle, bool)> {
    let app_state = app_state.clone();
    yew::Callback::from(move |(toggle, checked): (FilterToggle, bool)| {
        app_state.session.borrow_mut().toggle(toggle, checked);
        log::debug!("filter {} set to {checked}", toggle.key());
        app_state.sync_view();
    })
}

/// Start a pick and reveal it after the configured delay.
#[must_use]
pub fn pick_callback(app_state: &AppState) -> yew::Callback<()> {
    let app_state = app_state.clone();
    yew::Callback::from(move |()| {
        let ticket = app_state.session.borrow_mut().begin_pick();
        let Some(ticket) = ticket else {
            return;
        };
        app_state.sync_view();

        if app_state.config.reveals_immediately() {
            reveal(&app_state, ticket);
            return;
        }
        let delay_ms = app_state.config.reveal_delay_ms;
        let reveal_state = app_state.clone();
        if let Err(err) = dom::schedule_timeout(delay_ms, move || reveal(&reveal_state, ticket)) {
            dom::console_error(&format!(
                "failed to schedule reveal: {}",
                dom::js_error_message(&err)
            ));
            app_state.session.borrow_mut().cancel_pick();
            app_state.sync_view();
        }
    })
}

fn reveal(app_state: &AppState, ticket: PickTicket) {
    match resolve_ticket(
        &app_state.session,
        &app_state.catalog.borrow(),
        &app_state.rng,
        ticket,
    ) {
        Ok(SelectionState::Selected(episode)) => {
            log::info!("picked S{:02}E{:02} {}", episode.season, episode.episode, episode.title);
        }
        Ok(_) => log::info!("no episode matches the current filters"),
        Err(err) => log::debug!("{err}"),
    }
    app_state.sync_view();
}

/// Resolve `ticket` against the catalog, returning the new selection.
///
/// # Errors
///
/// Returns `SessionError::StaleTicket` when the ticket is no longer pending.
pub fn resolve_ticket(
    session: &RefCell<PickerSession>,
    catalog: &Catalog,
    rng: &RefCell<SmallRng>,
    ticket: PickTicket,
) -> Result<SelectionState, SessionError> {
    let mut rng = rng.borrow_mut();
    session
        .borrow_mut()
        .resolve_pick(ticket, catalog.episodes(), &mut *rng)
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{BundledLoader, CatalogLoader, FilterConfig, SeasonalTag};
    use futures::executor::block_on;
    use rand::SeedableRng;
    use yew::LocalServerRenderer;
    use yew::prelude::*;

    const HARNESS_PICKS: usize = 200;

    thread_local! {
        static HARNESS_FILTERS: RefCell<Option<FilterConfig>> = const { RefCell::new(None) };
        static HARNESS_PICKED: RefCell<Vec<SelectionState>> = const { RefCell::new(Vec::new()) };
    }

    #[function_component(ToggleHarness)]
    fn toggle_harness() -> Html {
        let app_state = crate::app::state::use_app_state();
        let initialized = use_state(|| false);
        if !*initialized {
            initialized.set(true);
            *app_state.catalog.borrow_mut() = BundledLoader.load_catalog().unwrap();

            let toggle = toggle_callback(&app_state);
            toggle.emit((FilterToggle::Christmas, false));
            toggle.emit((FilterToggle::OnlyMichael, true));

            let pick = pick_callback(&app_state);
            for _ in 0..HARNESS_PICKS {
                pick.emit(());
                let state = app_state.session.borrow().state().clone();
                HARNESS_PICKED.with(|picked| picked.borrow_mut().push(state));
            }
            let filters = *app_state.session.borrow().filters();
            HARNESS_FILTERS.with(|cell| *cell.borrow_mut() = Some(filters));
        }
        Html::default()
    }

    #[test]
    fn checkbox_toggles_reach_the_session_and_the_picks() {
        let _ = block_on(LocalServerRenderer::<ToggleHarness>::new().render());

        let filters = HARNESS_FILTERS.with(|cell| *cell.borrow()).expect("harness ran");
        assert!(!filters.christmas);
        assert!(filters.only_michael);
        assert!(filters.halloween);
        assert!(filters.valentines);

        let picked = HARNESS_PICKED.with(|picked| picked.borrow().clone());
        assert_eq!(picked.len(), HARNESS_PICKS);
        for state in picked {
            let SelectionState::Selected(episode) = state else {
                panic!("expected a selection, got {state:?}");
            };
            assert!(episode.has_michael, "{} lacks Michael", episode.title);
            assert_ne!(episode.seasonal, Some(SeasonalTag::Christmas));
        }
    }

    #[test]
    fn resolve_ticket_selects_from_bundled_catalog() {
        let catalog = BundledLoader.load_catalog().unwrap();
        let session = RefCell::new(PickerSession::new(FilterConfig {
            only_michael: true,
            ..FilterConfig::default()
        }));
        let rng = RefCell::new(SmallRng::seed_from_u64(7));
        let ticket = session.borrow_mut().begin_pick().unwrap();

        let state = resolve_ticket(&session, &catalog, &rng, ticket).unwrap();
        let SelectionState::Selected(episode) = state else {
            panic!("expected a selection, got {state:?}");
        };
        assert!(episode.has_michael);
        assert!(episode.seasonal.is_none());
        assert!(!session.borrow().is_busy());
    }

    #[test]
    fn resolve_ticket_rejects_cancelled_pick() {
        let catalog = BundledLoader.load_catalog().unwrap();
        let session = RefCell::new(PickerSession::default());
        let rng = RefCell::new(SmallRng::seed_from_u64(8));
        let ticket = session.borrow_mut().begin_pick().unwrap();
        session.borrow_mut().cancel_pick();

        let err = resolve_ticket(&session, &catalog, &rng, ticket).unwrap_err();
        assert_eq!(err, SessionError::StaleTicket { ticket: ticket.id() });
        assert!(session.borrow().state().is_unselected());
    }

    #[test]
    fn empty_catalog_resolves_to_no_match() {
        let session = RefCell::new(PickerSession::default());
        let rng = RefCell::new(SmallRng::seed_from_u64(9));
        let ticket = session.borrow_mut().begin_pick().unwrap();
        let state = resolve_ticket(&session, &Catalog::empty(), &rng, ticket).unwrap();
        assert_eq!(state, SelectionState::NoMatch);
    }
}
