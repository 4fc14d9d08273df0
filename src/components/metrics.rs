use yew::prelude::*;

use super::status::{FetchWarning, Info, Loading};
use crate::config::Config;
use crate::hooks::use_readings::DataState;
use crate::models::i18n::{Language, TextKey};
use crate::models::reading::{Reading, power_stats};

#[derive(Properties, PartialEq)]
pub struct MetricsProps {
    pub latest: DataState<Reading>,
    pub language: Language,
}

/// KPI tiles for the latest reading
#[function_component(Metrics)]
pub fn metrics(props: &MetricsProps) -> Html {
    let language = props.language;
    let stats = props
        .latest
        .data()
        .and_then(|reading| power_stats(reading.power));

    let body = if props.latest.is_loading() {
        html! { <Loading {language} /> }
    } else if let Some(stats) = stats {
        html! {
            <>
                <div class="metric">
                    <h3>{language.text(TextKey::Production)}</h3>
                    <p class="metric-value">{format!("{:.1} W", stats.total)}</p>
                </div>
                <div class="metric">
                    <h3>{language.text(TextKey::Average)}</h3>
                    <p class="metric-value">{format!("{:.1} W", stats.average)}</p>
                </div>
                <div class="metric">
                    <h3>{language.text(TextKey::Income)}</h3>
                    <p class="metric-value">{Config::INCOME_PLACEHOLDER}</p>
                </div>
            </>
        }
    } else {
        html! { <Info message={language.text(TextKey::NoLiveKpis)} /> }
    };

    html! {
        <div class="metrics">
            <p class="metrics-title"><strong>{language.text(TextKey::LifetimeKpis)}</strong></p>

            if let Some(error) = props.latest.warning() {
                <FetchWarning {language} error={error.clone()} />
            }

            {body}
        </div>
    }
}
