use chrono::Utc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::language_selector::LanguageSelector;
use crate::models::i18n::TextKey;
use crate::models::view_state::{ViewAction, ViewState};

#[derive(Properties, PartialEq)]
pub struct ControlsProps {
    pub state: ViewState,
    pub dispatch: Callback<ViewAction>,
}

/// Sidebar with the interactive controls. Not rendered in kiosk mode.
#[function_component(Controls)]
pub fn controls(props: &ControlsProps) -> Html {
    let state = &props.state;

    let on_language = props.dispatch.reform(ViewAction::SetLanguage);

    let on_slideshow = props.dispatch.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        ViewAction::SetSlideshow {
            enabled: input.checked(),
            now: Utc::now(),
        }
    });

    let on_api_base = props.dispatch.reform(|e: Event| {
        let input: HtmlInputElement = e.target_unchecked_into();
        ViewAction::SetApiBase(input.value())
    });

    let on_kiosk = props.dispatch.reform(|_: MouseEvent| ViewAction::SetKiosk(true));

    html! {
        <aside class="sidebar">
            <p class="sidebar-title"><strong>{state.text(TextKey::Controls)}</strong></p>

            <LanguageSelector
                language={state.language}
                label={state.text(TextKey::LanguagePicker)}
                on_change={on_language}
            />

            <label class="checkbox">
                <input
                    type="checkbox"
                    checked={state.slideshow_enabled}
                    onchange={on_slideshow}
                />
                {state.text(TextKey::Slideshow)}
            </label>

            <label class="text-input">
                {state.text(TextKey::ApiBase)}
                <input type="text" value={state.api_base.clone()} onchange={on_api_base} />
            </label>

            <button class="kiosk-toggle" onclick={on_kiosk}>
                {state.text(TextKey::KioskOn)}
            </button>
        </aside>
    }
}
