use crate::i18n::{t, tr};
use episode_picker_core::{EpisodeSummary, SelectionState};
use std::collections::BTreeMap;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub selection: SelectionState,
}

fn render_summary(summary: &EpisodeSummary) -> Html {
    let season = summary.season.to_string();
    let episode = summary.episode.to_string();
    let mut position_args = BTreeMap::new();
    position_args.insert("season", season.as_str());
    position_args.insert("episode", episode.as_str());

    let mut rating_args = BTreeMap::new();
    rating_args.insert("rating", summary.rating.as_str());

    let badge = summary.seasonal_label().map_or_else(Html::default, |label| {
        let mut args = BTreeMap::new();
        args.insert("label", label.as_str());
        html! { <span class="seasonal-badge">{ tr("result.special", Some(&args)) }</span> }
    });

    html! {
        <div class="result-card" aria-live="polite">
            <h2 class="result-title">{ summary.title.clone() }</h2>
            <p class="result-meta">
                { tr("result.position", Some(&position_args)) }
                { badge }
            </p>
            <p class="result-rating">{ tr("result.rating", Some(&rating_args)) }</p>
            <p class="result-cta">{ t("result.cta") }</p>
        </div>
    }
}

#[function_component(ResultCard)]
pub fn result_card(p: &Props) -> Html {
    match &p.selection {
        SelectionState::Selected(episode) => render_summary(&EpisodeSummary::from_episode(episode)),
        SelectionState::NoMatch => html! {
            <div class="result-card empty-state" aria-live="polite">{ t("result.no_match") }</div>
        },
        SelectionState::Unselected => html! {
            <div class="empty-state" aria-live="polite">{ t("result.unselected") }</div>
        },
    }
}
