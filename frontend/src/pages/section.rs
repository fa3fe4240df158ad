use leptos::*;
use leptos_router::use_location;

use crate::i18n::use_i18n;

/// Placeholder for sections the demo app links to but does not implement.
#[component]
pub fn SectionPage() -> impl IntoView {
    let i18n = use_i18n();
    let location = use_location();

    view! {
        <section class="page section-page">
            <h1 class="page-title">{move || location.pathname.get()}</h1>
            <p class="page-subtitle">{move || i18n.t("page.not_found")}</p>
        </section>
    }
}
