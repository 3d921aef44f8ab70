use crate::components::checkbox::Checkbox;
use crate::i18n::t;
use episode_picker_core::{FilterConfig, FilterToggle};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub filters: FilterConfig,
    #[prop_or_default]
    pub on_toggle: Callback<(FilterToggle, bool)>,
}

const fn label_key(toggle: FilterToggle) -> &'static str {
    match toggle {
        FilterToggle::OnlyMichael => "filters.only_michael",
        FilterToggle::Christmas => "filters.christmas",
        FilterToggle::Halloween => "filters.halloween",
        FilterToggle::Valentines => "filters.valentines",
        FilterToggle::WeightedShuffle => "filters.weighted",
    }
}

fn toggle_box(
    filters: &FilterConfig,
    toggle: FilterToggle,
    on_toggle: &Callback<(FilterToggle, bool)>,
) -> Html {
    let cb = on_toggle.reform(move |checked: bool| (toggle, checked));
    html! {
        <Checkbox
            id={AttrValue::from(toggle.key())}
            label={AttrValue::from(t(label_key(toggle)))}
            checked={filters.get(toggle)}
            on_toggle={cb}
        />
    }
}

#[function_component(FilterPanel)]
pub fn filter_panel(p: &Props) -> Html {
    let seasonal = [
        FilterToggle::Christmas,
        FilterToggle::Halloween,
        FilterToggle::Valentines,
    ];
    html! {
        <fieldset class="filters">
            <legend>{ t("filters.legend") }</legend>
            { toggle_box(&p.filters, FilterToggle::OnlyMichael, &p.on_toggle) }
            <p class="seasonal-heading">{ t("filters.seasonal_heading") }</p>
            <div class="seasonal-filters">
                { for seasonal.into_iter().map(|toggle| toggle_box(&p.filters, toggle, &p.on_toggle)) }
            </div>
            { toggle_box(&p.filters, FilterToggle::WeightedShuffle, &p.on_toggle) }
        </fieldset>
    }
}
