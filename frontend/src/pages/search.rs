use leptos::*;
use leptos_router::use_query_map;

use crate::i18n::use_i18n;

#[component]
pub fn SearchPage() -> impl IntoView {
    let i18n = use_i18n();
    let query = use_query_map();
    let term = move || query.with(|params| params.get("q").cloned().unwrap_or_default());

    view! {
        <section class="page search-page">
            <h1 class="page-title">
                {move || i18n.t("page.search_results")} " \u{201c}" {term} "\u{201d}"
            </h1>
        </section>
    }
}
