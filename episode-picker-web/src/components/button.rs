use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub busy: bool,
    #[prop_or_default]
    pub on_pick: Callback<()>,
}

/// The main action button; disabled and relabelled while a pick is pending.
#[function_component(PickButton)]
pub fn pick_button(p: &Props) -> Html {
    let onclick = {
        let on_pick = p.on_pick.clone();
        let busy = p.busy;
        Callback::from(move |_: MouseEvent| {
            if !busy {
                on_pick.emit(());
            }
        })
    };
    let label = if p.busy {
        t("actions.searching")
    } else {
        t("actions.pick")
    };
    html! {
        <button
            id="pick-btn"
            class="select-button"
            type="button"
            disabled={p.busy}
            aria-busy={p.busy.to_string()}
            {onclick}
        >
            { label }
        </button>
    }
}
