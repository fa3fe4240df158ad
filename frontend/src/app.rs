use leptos::*;
use leptos_router::*;
use shared::{NavPage, User};

use crate::api::ApiClient;
use crate::components::{Header, HeaderEnv};
use crate::config::HeaderConfig;
use crate::i18n::{provide_i18n, I18nContext, DEFAULT_LANGUAGE};
use crate::pages::{home::HomePage, search::SearchPage, section::SectionPage};
use crate::utils::use_breakpoint;

fn navbar_pages(i18n: &I18nContext) -> Vec<NavPage> {
    vec![
        NavPage::new(i18n.t("nav.matches"), "/matches", "matches"),
        NavPage::new(i18n.t("nav.players"), "/players", "players"),
        NavPage::new(i18n.t("nav.teams"), "/teams", "teams"),
        NavPage::new(i18n.t("nav.docs"), "/docs", "docs"),
    ]
}

fn drawer_pages(i18n: &I18nContext) -> Vec<NavPage> {
    let mut pages = vec![NavPage::new(i18n.t("nav.home"), "/", "home")];
    pages.extend(navbar_pages(i18n));
    pages.push(NavPage::new(i18n.t("nav.about"), "/about", "about"));
    pages
}

#[component]
pub fn App() -> impl IntoView {
    let config = HeaderConfig::from_build_env().unwrap_or_else(|err| {
        log::error!("{}; falling back to the default configuration", err);
        HeaderConfig::default()
    });
    let i18n = provide_i18n(DEFAULT_LANGUAGE);

    // Session state lives outside the header; the demo only discovers who is signed in.
    let user = create_rw_signal(None::<User>);
    let metadata_url = config.metadata_url();
    wasm_bindgen_futures::spawn_local(async move {
        match ApiClient::get_metadata(&metadata_url).await {
            Ok(metadata) => user.set(metadata.user),
            Err(err) => log::warn!("could not load site metadata: {}", err),
        }
    });

    let env = HeaderEnv {
        breakpoint: use_breakpoint(),
        user: user.into(),
        strings: i18n,
        config,
    };

    view! {
        <Router>
            <AppShell env=env/>
        </Router>
    }
}

#[component]
fn AppShell(env: HeaderEnv) -> impl IntoView {
    let location = use_location();
    let i18n = env.strings;
    // Labels are re-read from the translations whenever the language changes.
    let navbar = Signal::derive(move || navbar_pages(&i18n));
    let drawer = Signal::derive(move || drawer_pages(&i18n));

    view! {
        <Header
            route=location.pathname
            navbar_pages=navbar
            drawer_pages=drawer
            env=env
        />
        <main class="container">
            <Routes>
                <Route path="/" view=HomePage/>
                <Route path="/search" view=SearchPage/>
                <Route path="/*any" view=SectionPage/>
            </Routes>
        </main>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawer_pages_wrap_navbar_pages() {
        let runtime = create_runtime();
        let i18n = I18nContext::new("en");

        let navbar = navbar_pages(&i18n);
        let drawer = drawer_pages(&i18n);

        assert_eq!(drawer.first().map(|p| p.to.as_str()), Some("/"));
        assert_eq!(drawer.last().map(|p| p.label.as_str()), Some("About"));
        assert_eq!(&drawer[1..drawer.len() - 1], navbar.as_slice());
        assert!(navbar.iter().all(|page| !page.key.is_empty()));
        runtime.dispose();
    }

    #[test]
    fn test_page_labels_follow_language() {
        let runtime = create_runtime();
        let i18n = I18nContext::new("en");
        let navbar = Signal::derive(move || navbar_pages(&i18n));
        let drawer = Signal::derive(move || drawer_pages(&i18n));
        let labels = |pages: Vec<NavPage>| pages.into_iter().map(|p| p.label).collect::<Vec<_>>();

        assert_eq!(labels(navbar.get()), ["Matches", "Players", "Teams", "Docs"]);

        i18n.set_language("de");
        assert_eq!(labels(navbar.get()), ["Matches", "Spieler", "Teams", "Doku"]);
        assert_eq!(
            labels(drawer.get()),
            ["Start", "Matches", "Spieler", "Teams", "Doku", "Über"]
        );
        runtime.dispose();
    }
}
