use leptos::*;
use leptos_router::A;
use shared::NavPage;

use crate::components::logo_group::AppLogo;
use crate::i18n::I18nContext;
use crate::utils::dom::{document_target, listen};
use crate::utils::swipe::{is_close_gesture, is_open_gesture};

fn touch_x(ev: &ev::TouchEvent, changed: bool) -> Option<f64> {
    let touches = if changed {
        ev.changed_touches()
    } else {
        ev.touches()
    };
    touches.get(0).map(|touch| f64::from(touch.client_x()))
}

/// Slide-out navigation panel.
///
/// Visibility is owned by the caller through `open`; the drawer only reports
/// requests to open (edge swipe) or close (backdrop, Escape, swipe, link).
#[component]
pub fn NavDrawer(
    #[prop(into)] open: Signal<bool>,
    on_open: Callback<()>,
    on_close: Callback<()>,
    #[prop(into)] pages: MaybeSignal<Vec<NavPage>>,
    #[prop(into)] app_name: String,
    strings: I18nContext,
) -> impl IntoView {
    let touch_start = create_rw_signal(None::<f64>);

    create_effect(move |_| {
        if !open.get() {
            return;
        }
        if let Some(document) = document_target() {
            listen(document, "keydown", move |event: web_sys::KeyboardEvent| {
                if event.key() == "Escape" {
                    on_close.call(());
                }
            });
        }
    });

    let begin_touch = move |ev: ev::TouchEvent| touch_start.set(touch_x(&ev, false));
    let end_touch = move |ev: &ev::TouchEvent| -> Option<(f64, f64)> {
        let start = touch_start.get_untracked()?;
        touch_start.set(None);
        Some((start, touch_x(ev, true)?))
    };

    view! {
        <div class="nav-drawer" class:open=move || open.get()>
            <div
                class="drawer-swipe-area"
                on:touchstart=begin_touch
                on:touchend=move |ev| {
                    if let Some((start, end)) = end_touch(&ev) {
                        if is_open_gesture(start, end) {
                            on_open.call(());
                        }
                    }
                }
            ></div>
            <div class="drawer-backdrop" on:click=move |_| on_close.call(())></div>
            <aside
                class="drawer-panel"
                aria-label=move || strings.t("drawer.label")
                aria-hidden=move || (!open.get()).to_string()
                on:touchstart=begin_touch
                on:touchend=move |ev| {
                    if let Some((start, end)) = end_touch(&ev) {
                        if is_close_gesture(start, end) {
                            on_close.call(());
                        }
                    }
                }
            >
                <ul class="drawer-list">
                    <li class="drawer-logo">
                        <AppLogo app_name=app_name on_click=Callback::new(move |_| on_close.call(()))/>
                    </li>
                    {move || {
                        pages
                            .get()
                            .into_iter()
                            .map(|page| {
                                let key = page.drawer_key();
                                view! {
                                    <li class="drawer-item" data-key=key on:click=move |_| on_close.call(())>
                                        <A href=page.to>{page.label}</A>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </aside>
        </div>
    }
}
