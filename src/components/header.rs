use chrono::{DateTime, Utc};
use yew::prelude::*;

use crate::config::Config;
use crate::hooks::use_asset::use_data_uri;
use crate::models::i18n::{Language, TextKey};

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub language: Language,
    /// Time of the most recent fetch, `None` until one has completed
    pub updated_at: Option<DateTime<Utc>>,
}

/// Title, last-updated caption and the text logo
#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let logo = use_data_uri(Config::LOGO_TEXT_PATH, "");

    html! {
        <header class="app-header">
            <div class="header-text">
                <div class="section-title">{props.language.text(TextKey::ThiPhotovoltaics)}</div>
                if let Some(at) = props.updated_at {
                    <p class="caption">{last_updated_caption(props.language, at)}</p>
                }
            </div>
            if !logo.is_empty() {
                <img class="header-logo" src={logo} alt="THI" width="220" />
            }
        </header>
    }
}

pub fn last_updated_caption(language: Language, at: DateTime<Utc>) -> String {
    format!(
        "{} {} UTC",
        language.text(TextKey::LastUpdated),
        at.format("%Y-%m-%d %H:%M")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_last_updated_caption() {
        let at = Utc.with_ymd_and_hms(2025, 6, 1, 9, 5, 59).unwrap();
        let en = last_updated_caption(Language::En, at);
        let de = last_updated_caption(Language::De, at);

        assert!(en.ends_with(" 2025-06-01 09:05 UTC"), "{en}");
        assert!(en.starts_with(Language::En.text(TextKey::LastUpdated)));
        assert!(de.starts_with(Language::De.text(TextKey::LastUpdated)));
    }
}
