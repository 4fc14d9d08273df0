use yew::prelude::*;

use crate::models::i18n::{Language, TextKey};
use crate::models::view_state::TimeWindow;

#[derive(Properties, PartialEq)]
pub struct TimeWindowSelectorProps {
    pub window: TimeWindow,
    pub language: Language,
    pub on_change: Callback<TimeWindow>,
}

#[function_component(TimeWindowSelector)]
pub fn time_window_selector(props: &TimeWindowSelectorProps) -> Html {
    let language = props.language;

    html! {
        <fieldset class="radio-group horizontal">
            <legend>{language.text(TextKey::TimeWindow)}</legend>
            {
                TimeWindow::all().iter().map(|&window| {
                    let onchange = {
                        let callback = props.on_change.clone();
                        Callback::from(move |_: Event| callback.emit(window))
                    };
                    let checked = window == props.window;
                    html! {
                        <label class="radio-option">
                            <input type="radio" name="time-window" {checked} {onchange} />
                            {language.text(window.label_key())}
                        </label>
                    }
                }).collect::<Html>()
            }
        </fieldset>
    }
}
