use crate::app::state::AppState;
use crate::catalog::{BundledLoader, load_bundled};
use yew::prelude::*;

fn bootstrap_load(app_state: &AppState) {
    let (catalog, config) = load_bundled(&BundledLoader);
    log::info!(
        "episode catalog ready: {} episodes, reveal delay {}ms",
        catalog.len(),
        config.reveal_delay_ms
    );
    *app_state.catalog.borrow_mut() = catalog;
    app_state
        .session
        .borrow_mut()
        .set_filters(config.default_filters);
    app_state.config.set(config);
    app_state.sync_view();
    app_state.boot_ready.set(true);
}

#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let app_state = app_state.clone();

    use_effect_with((), move |()| {
        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            bootstrap_load(&app_state);
        });
        #[cfg(not(target_arch = "wasm32"))]
        bootstrap_load(&app_state);
        || {}
    });
}
