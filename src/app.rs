use yew::prelude::*;

use crate::components::{Controls, EnergyFlow, GenerationPanel, Header, KioskBar, Metrics};
use crate::hooks::use_readings::{use_history, use_latest_reading};
use crate::hooks::use_view_state::use_view_state;
use crate::models::view_state::ViewAction;

#[function_component(App)]
pub fn app() -> Html {
    let view = use_view_state();
    let state = (*view).clone();

    let dispatch = {
        let dispatcher = view.dispatcher();
        Callback::from(move |action: ViewAction| dispatcher.dispatch(action))
    };
    let on_window = dispatch.reform(ViewAction::SetTimeWindow);

    let latest = use_latest_reading(state.api_base.clone());
    let history = use_history(state.api_base.clone(), state.time_window);

    // Whichever poll finished last
    let updated_at = latest.fetched_at().max(history.fetched_at());

    let container_class = if state.kiosk {
        "app-container kiosk"
    } else {
        "app-container"
    };

    html! {
        <div class={container_class}>
            if state.kiosk {
                <KioskBar state={state.clone()} dispatch={dispatch.clone()} />
            } else {
                <Controls state={state.clone()} dispatch={dispatch.clone()} />
            }

            <main class="app-main">
                <Header language={state.language} {updated_at} />
                <EnergyFlow />

                <div class="main-grid">
                    <GenerationPanel
                        history={(*history).clone()}
                        language={state.language}
                        window={state.time_window}
                        {on_window}
                    />
                    <Metrics latest={(*latest).clone()} language={state.language} />
                </div>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
