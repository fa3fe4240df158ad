use leptos::*;

use crate::i18n::use_i18n;

#[component]
pub fn HomePage() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="page home-page">
            <h1 class="page-title">{move || i18n.t("nav.home")}</h1>
        </section>
    }
}
