#[cfg(target_arch = "wasm32")]
use yew::html::TargetCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct CheckboxProps {
    pub id: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub on_toggle: Callback<bool>,
}

#[function_component(Checkbox)]
pub fn checkbox(props: &CheckboxProps) -> Html {
    let on_change = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: Event| {
            #[cfg(target_arch = "wasm32")]
            {
                if let Some(input) = e.target_dyn_into::<web_sys::HtmlInputElement>() {
                    on_toggle.emit(input.checked());
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = (&e, &on_toggle);
            }
        })
    };
    html! {
        <div class="filter-item">
            <input
                id={props.id.clone()}
                type="checkbox"
                checked={props.checked}
                onchange={on_change}
            />
            <label for={props.id.clone()}>{ props.label.clone() }</label>
        </div>
    }
}
