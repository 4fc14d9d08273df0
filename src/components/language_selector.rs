use yew::prelude::*;

use crate::models::i18n::Language;

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorProps {
    pub language: Language,
    pub label: &'static str,
    pub on_change: Callback<Language>,
    #[prop_or(false)]
    pub horizontal: bool,
}

/// English/Deutsch radio group
#[function_component(LanguageSelector)]
pub fn language_selector(props: &LanguageSelectorProps) -> Html {
    let class = if props.horizontal {
        "radio-group horizontal"
    } else {
        "radio-group"
    };

    html! {
        <fieldset class={class}>
            <legend>{props.label}</legend>
            {
                Language::all().iter().map(|&language| {
                    let onchange = {
                        let callback = props.on_change.clone();
                        Callback::from(move |_: Event| callback.emit(language))
                    };
                    let checked = language == props.language;
                    html! {
                        <label class="radio-option">
                            <input
                                type="radio"
                                name="language"
                                value={language.code()}
                                {checked}
                                {onchange}
                            />
                            {language.native_name()}
                        </label>
                    }
                }).collect::<Html>()
            }
        </fieldset>
    }
}
