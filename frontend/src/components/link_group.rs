use leptos::*;
use leptos_router::A;
use shared::NavPage;

/// Horizontal link bar shown on wide viewports.
#[component]
pub fn LinkGroup(#[prop(into)] pages: MaybeSignal<Vec<NavPage>>) -> impl IntoView {
    view! {
        <nav class="header-group link-group">
            {move || {
                pages
                    .get()
                    .into_iter()
                    .map(|page| {
                        view! {
                            <div class="tab-container" data-key=page.key>
                                <A href=page.to>{page.label}</A>
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </nav>
    }
}
