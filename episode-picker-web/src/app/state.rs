use episode_picker_core::{Catalog, FilterConfig, PickerConfig, PickerSession, SelectionState};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Render snapshot of the session; setting it schedules a re-render.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SessionView {
    pub filters: FilterConfig,
    pub selection: SelectionState,
    pub busy: bool,
}

impl SessionView {
    #[must_use]
    pub fn from_session(session: &PickerSession) -> Self {
        Self {
            filters: *session.filters(),
            selection: session.state().clone(),
            busy: session.is_busy(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub catalog: Rc<RefCell<Catalog>>,
    pub config: UseStateHandle<PickerConfig>,
    pub session: Rc<RefCell<PickerSession>>,
    pub rng: Rc<RefCell<SmallRng>>,
    pub view: UseStateHandle<SessionView>,
    pub boot_ready: UseStateHandle<bool>,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        catalog: use_mut_ref(Catalog::empty),
        config: use_state(PickerConfig::default),
        session: use_mut_ref(PickerSession::default),
        rng: use_mut_ref(|| SmallRng::seed_from_u64(crate::dom::entropy_seed())),
        view: use_state(SessionView::default),
        boot_ready: use_state(|| false),
    }
}

impl AppState {
    /// Publish the current session to the render snapshot.
    pub fn sync_view(&self) {
        let snapshot = SessionView::from_session(&self.session.borrow());
        self.view.set(snapshot);
    }
}
