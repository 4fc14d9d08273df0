use yew::prelude::*;

use crate::models::error::AppError;
use crate::models::i18n::{Language, TextKey};

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub language: Language,
}

#[function_component(Loading)]
pub fn loading(props: &LoadingProps) -> Html {
    html! {
        <div class="status loading">
            <div class="spinner"></div>
            <p>{props.language.text(TextKey::Loading)}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FetchWarningProps {
    pub language: Language,
    pub error: AppError,
}

/// Shown when a fetch fell back to empty data
#[function_component(FetchWarning)]
pub fn fetch_warning(props: &FetchWarningProps) -> Html {
    html! {
        <div class="status warning">
            <p>{"⚠️ "}{props.language.text(TextKey::ApiError)}{": "}{props.error.to_string()}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct InfoProps {
    pub message: &'static str,
}

#[function_component(Info)]
pub fn info(props: &InfoProps) -> Html {
    html! {
        <div class="status info">
            <p>{props.message}</p>
        </div>
    }
}
