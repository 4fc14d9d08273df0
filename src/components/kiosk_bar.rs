use yew::prelude::*;

use super::language_selector::LanguageSelector;
use crate::models::i18n::TextKey;
use crate::models::view_state::{ViewAction, ViewState};

#[derive(Properties, PartialEq)]
pub struct KioskBarProps {
    pub state: ViewState,
    pub dispatch: Callback<ViewAction>,
}

/// Compact header replacing the sidebar in kiosk mode
#[function_component(KioskBar)]
pub fn kiosk_bar(props: &KioskBarProps) -> Html {
    let state = &props.state;
    let on_language = props.dispatch.reform(ViewAction::SetLanguage);
    let on_exit = props.dispatch.reform(|_: MouseEvent| ViewAction::SetKiosk(false));

    html! {
        <div class="kiosk-bar">
            <h3 class="kiosk-title">{format!("⚡ {}", state.text(TextKey::Title))}</h3>
            <div class="kiosk-controls">
                <LanguageSelector
                    language={state.language}
                    label={state.text(TextKey::Language)}
                    on_change={on_language}
                    horizontal=true
                />
                <button class="kiosk-toggle" onclick={on_exit}>
                    {state.text(TextKey::KioskOff)}
                </button>
            </div>
        </div>
    }
}
