use gloo_storage::{LocalStorage, Storage};
use leptos::*;
use shared::Announcement;

use crate::components::markdown::MarkdownView;
use crate::i18n::I18nContext;

const DISMISSED_KEY: &str = "masthead.dismissed_announcement";

fn is_dismissed(id: u64) -> bool {
    LocalStorage::get::<u64>(DISMISSED_KEY)
        .map(|dismissed| dismissed == id)
        .unwrap_or(false)
}

fn remember_dismissed(id: u64) {
    if let Err(err) = LocalStorage::set(DISMISSED_KEY, id) {
        log::warn!("could not remember dismissed announcement {}: {}", id, err);
    }
}

/// Site-wide announcement shown under the header until dismissed.
#[component]
pub fn AnnounceBanner(announcement: Announcement, strings: I18nContext) -> impl IntoView {
    let Announcement { id, title, body, url } = announcement;
    let dismissed = create_rw_signal(is_dismissed(id));

    move || {
        if dismissed.get() {
            return None;
        }

        let heading = match url.clone() {
            Some(href) => view! {
                <a href=href target="_blank" rel="noopener noreferrer">{title.clone()}</a>
            }
            .into_view(),
            None => title.clone().into_view(),
        };

        Some(view! {
            <div class="announce-banner" role="status" data-id=id.to_string()>
                <div class="announce-title">{heading}</div>
                {body.clone().map(|content| view! {
                    <div class="announce-content">
                        <MarkdownView content=content/>
                    </div>
                })}
                <button
                    type="button"
                    class="announce-dismiss"
                    aria-label=move || strings.t("announce.dismiss")
                    title=move || strings.t("announce.dismiss")
                    on:click=move |_| {
                        remember_dismissed(id);
                        dismissed.set(true);
                    }
                >
                    "×"
                </button>
            </div>
        })
    }
}
