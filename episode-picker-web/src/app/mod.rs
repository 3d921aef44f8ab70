use yew::prelude::*;

pub mod bootstrap;
pub mod handlers;
pub mod state;
pub mod view;

pub use state::{AppState, SessionView};

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    view::render_app(&app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn app_renders_loading_state_before_bootstrap() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains("Loading the files"));
        assert!(html.contains("Dunder Mifflin"));
        assert!(html.contains("id=\"main\""));
    }
}
