use std::rc::Rc;
use yew::prelude::*;

use super::battery_chart::BatteryChart;
use super::power_chart::PowerChart;
use super::status::{FetchWarning, Info, Loading};
use super::time_window_selector::TimeWindowSelector;
use crate::config::Config;
use crate::hooks::use_readings::DataState;
use crate::models::i18n::{Language, TextKey};
use crate::models::reading::{PowerSeries, Readings};
use crate::models::view_state::TimeWindow;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Generation,
    Distribution,
}

#[derive(Properties, PartialEq)]
pub struct GenerationPanelProps {
    pub history: DataState<Readings>,
    pub language: Language,
    pub window: TimeWindow,
    pub on_window: Callback<TimeWindow>,
}

#[function_component(GenerationPanel)]
pub fn generation_panel(props: &GenerationPanelProps) -> Html {
    let language = props.language;
    let tab = use_state(|| Tab::Generation);

    let tab_button = |target: Tab, key: TextKey| {
        let tab = tab.clone();
        let class = if *tab == target { "tab active" } else { "tab" };
        let onclick = Callback::from(move |_: MouseEvent| tab.set(target));
        html! {
            <button {class} {onclick}>{language.text(key)}</button>
        }
    };

    let content = match *tab {
        Tab::Generation => html! {
            <>
                <TimeWindowSelector
                    window={props.window}
                    {language}
                    on_change={props.on_window.clone()}
                />
                <HistoryCharts history={props.history.clone()} {language} />
            </>
        },
        Tab::Distribution => html! {
            <Info message={language.text(TextKey::DistributionPlaceholder)} />
        },
    };

    html! {
        <section class="generation-panel">
            <div class="tabs">
                {tab_button(Tab::Generation, TextKey::PvGeneration)}
                {tab_button(Tab::Distribution, TextKey::PowerDistribution)}
            </div>
            {content}
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct HistoryChartsProps {
    history: DataState<Readings>,
    language: Language,
}

#[function_component(HistoryCharts)]
fn history_charts(props: &HistoryChartsProps) -> Html {
    let language = props.language;
    let series = use_memo(props.history.clone(), |history| {
        Rc::new(
            history
                .data()
                .map(|readings| readings.power_series(Config::PLACEHOLDER_SEED))
                .unwrap_or_else(PowerSeries::default),
        )
    });

    let body = if props.history.is_loading() {
        html! { <Loading {language} /> }
    } else if series.is_empty() {
        html! { <Info message={language.text(TextKey::HistoricalNone)} /> }
    } else {
        html! {
            <>
                <PowerChart
                    series={(*series).clone()}
                    label={language.text(TextKey::PvGeneration)}
                />
                <BatteryChart
                    series={(*series).clone()}
                    label={language.text(TextKey::BatteryCharge)}
                />
            </>
        }
    };

    html! {
        <>
            if let Some(error) = props.history.warning() {
                <FetchWarning {language} error={error.clone()} />
            }
            {body}
        </>
    }
}
