use leptos::*;

use crate::i18n::{persist_language, supported_languages, I18nContext};

/// Language picker shown inside the settings dropdown.
#[component]
pub fn LocalizationMenu(strings: I18nContext) -> impl IntoView {
    view! {
        <div class="dropdown-section localization-menu" role="group" aria-label=move || strings.t("app.language")>
            <div class="dropdown-heading">{move || strings.t("app.language")}</div>
            {supported_languages()
                .into_iter()
                .map(|(code, name)| {
                    let is_current = move || strings.language.with(|current| current == code);
                    view! {
                        <button
                            type="button"
                            class="dropdown-item language-option"
                            class:active=is_current
                            role="menuitemradio"
                            aria-checked=move || is_current().to_string()
                            lang=code
                            on:click=move |_| {
                                strings.set_language(code);
                                persist_language(code);
                            }
                        >
                            {name}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
