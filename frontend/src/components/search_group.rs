use leptos::*;
use leptos_router::use_navigate;

use crate::components::icons::SearchIcon;
use crate::i18n::I18nContext;

/// Route for a search query, or `None` when the query is blank.
pub fn search_path(query: &str) -> Option<String> {
    let query = query.trim();
    if query.is_empty() {
        return None;
    }
    Some(format!("/search?q={}", urlencoding::encode(query)))
}

#[component]
pub fn SearchForm(strings: I18nContext) -> impl IntoView {
    let query = create_rw_signal(String::new());
    let navigate = use_navigate();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(path) = search_path(&query.get_untracked()) {
            navigate(&path, Default::default());
        }
    };

    view! {
        <form class="search-form" role="search" on:submit=on_submit>
            <input
                type="search"
                class="search-input"
                aria-label=move || strings.t("search.label")
                placeholder=move || strings.t("search.placeholder")
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </form>
    }
}

#[component]
pub fn SearchGroup(strings: I18nContext) -> impl IntoView {
    view! {
        <div class="header-group search-group">
            <span class="search-icon">
                <SearchIcon/>
            </span>
            <SearchForm strings=strings/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_query_is_ignored() {
        assert_eq!(search_path(""), None);
        assert_eq!(search_path("   "), None);
    }

    #[test]
    fn test_query_is_trimmed_and_encoded() {
        assert_eq!(search_path("  dendi "), Some("/search?q=dendi".to_string()));
        assert_eq!(
            search_path("team liquid & co"),
            Some("/search?q=team%20liquid%20%26%20co".to_string())
        );
    }
}
