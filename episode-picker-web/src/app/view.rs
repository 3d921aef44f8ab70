use crate::app::handlers::{pick_callback, toggle_callback};
use crate::app::state::AppState;
use crate::components::button::PickButton;
use crate::components::filter_panel::FilterPanel;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::result_card::ResultCard;
use crate::i18n::t;
use yew::prelude::*;

pub fn render_app(app_state: &AppState) -> Html {
    let view = (*app_state.view).clone();
    let body = if *app_state.boot_ready {
        html! {
            <>
                <FilterPanel filters={view.filters} on_toggle={toggle_callback(app_state)} />
                <div class="action-section">
                    <PickButton busy={view.busy} on_pick={pick_callback(app_state)} />
                </div>
                <ResultCard selection={view.selection} />
            </>
        }
    } else {
        html! { <p class="empty-state" aria-busy="true">{ t("boot.loading") }</p> }
    };

    html! {
        <div class="app-container">
            <Header />
            <main id="main" role="main">
                { body }
            </main>
            <Footer />
        </div>
    }
}
