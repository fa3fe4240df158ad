use leptos::*;

use crate::components::icons::{BugIcon, PowerIcon};
use crate::i18n::I18nContext;

/// Opens the issue tracker in a new tab.
#[component]
pub fn ReportBug(#[prop(into)] href: String, strings: I18nContext) -> impl IntoView {
    view! {
        <a
            class="dropdown-item report-bug"
            role="menuitem"
            href=href
            target="_blank"
            rel="noopener noreferrer"
        >
            <BugIcon/>
            <span>{move || strings.t("app.report_bug")}</span>
        </a>
    }
}

#[component]
pub fn LogOut(#[prop(into)] href: String, strings: I18nContext) -> impl IntoView {
    view! {
        <a class="dropdown-item logout-link" role="menuitem" href=href rel="noopener noreferrer">
            <PowerIcon/>
            <span>{move || strings.t("app.logout")}</span>
        </a>
    }
}
