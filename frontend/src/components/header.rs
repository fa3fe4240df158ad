use leptos::*;
use shared::{NavPage, User};

use crate::components::account_group::AccountGroup;
use crate::components::announce_banner::AnnounceBanner;
use crate::components::link_group::LinkGroup;
use crate::components::localization_menu::LocalizationMenu;
use crate::components::logo_group::LogoGroup;
use crate::components::nav_drawer::NavDrawer;
use crate::components::search_group::SearchGroup;
use crate::components::settings_group::SettingsGroup;
use crate::components::settings_items::{LogOut, ReportBug};
use crate::config::HeaderConfig;
use crate::i18n::I18nContext;
use crate::utils::announce::load_announcement;
use crate::utils::{AnnounceError, AnnounceLoader, AnnounceSlot, Breakpoint, HeaderSections, MountGuard};

/// Everything the header reads from its surroundings.
///
/// The header never writes to these; whoever owns the session, the viewport
/// tracking and the translations keeps them up to date.
#[derive(Clone)]
pub struct HeaderEnv {
    pub breakpoint: Signal<Breakpoint>,
    pub user: Signal<Option<User>>,
    pub strings: I18nContext,
    pub config: HeaderConfig,
}

/// Fixed top bar with the slide-out drawer and the announcement banner below it.
#[component]
pub fn Header(
    /// Path of the current route
    #[prop(into)]
    route: Signal<String>,
    #[prop(optional)] disable_search: bool,
    /// Pages for the link bar; pass a signal when labels follow the language
    #[prop(into)]
    navbar_pages: MaybeSignal<Vec<NavPage>>,
    #[prop(into)]
    drawer_pages: MaybeSignal<Vec<NavPage>>,
    env: HeaderEnv,
    /// Replaces the default loader that reads `config.announce_url`
    #[prop(optional)]
    announce_loader: Option<AnnounceLoader>,
    /// Notified when the announcement could not be loaded. The UI stays silent either way.
    #[prop(optional)]
    on_announce_error: Option<Callback<AnnounceError>>,
) -> impl IntoView {
    let HeaderEnv {
        breakpoint,
        user,
        strings,
        config,
    } = env;

    let menu_open = create_rw_signal(false);
    let announce = create_rw_signal(AnnounceSlot::Pending);

    let loader =
        announce_loader.unwrap_or_else(|| AnnounceLoader::from_url(config.announce_url.clone()));
    let guard = MountGuard::new();
    on_cleanup({
        let guard = guard.clone();
        move || guard.unmount()
    });
    wasm_bindgen_futures::spawn_local(async move {
        load_announcement(loader, guard, move |result| {
            if let Err(err) = &result {
                log::debug!("announcement unavailable: {}", err);
                if let Some(callback) = on_announce_error {
                    callback.call(err.clone());
                }
            }
            announce.set(AnnounceSlot::from_result(&result));
        })
        .await;
    });

    let sections = create_memo(move |_| {
        HeaderSections::resolve(breakpoint.get(), disable_search, user.with(Option::is_some))
    });
    let banner = create_memo(move |_| {
        route.with(|path| announce.with(|slot| slot.visible_on(path).cloned()))
    });

    let app_name = config.app_name.clone();
    let login_url = config.login_url();
    let logout_url = config.logout_url();
    let report_bug_url = config.report_bug_url();

    view! {
        <div class="masthead">
            <header class="app-header">
                <div class="header-start">
                    <LogoGroup
                        app_name=app_name.clone()
                        menu_label=Signal::derive(move || strings.t("app.menu"))
                        on_menu_click=Callback::new(move |_| menu_open.set(true))
                    />
                    <Show when=move || sections.with(|s| s.links) fallback=|| ()>
                        <LinkGroup pages=navbar_pages.clone()/>
                    </Show>
                </div>
                <Show when=move || sections.with(|s| s.search) fallback=|| ()>
                    <SearchGroup strings=strings/>
                </Show>
                <div class="header-end">
                    <Show when=move || sections.with(|s| s.account) fallback=|| ()>
                        <AccountGroup user=user login_url=login_url.clone() strings=strings/>
                    </Show>
                    <SettingsGroup label=Signal::derive(move || strings.t("app.settings"))>
                        <LocalizationMenu strings=strings/>
                        <ReportBug href=report_bug_url strings=strings/>
                        <Show when=move || sections.with(|s| s.logout) fallback=|| ()>
                            <LogOut href=logout_url.clone() strings=strings/>
                        </Show>
                    </SettingsGroup>
                </div>
                <NavDrawer
                    open=menu_open
                    on_open=Callback::new(move |_| menu_open.set(true))
                    on_close=Callback::new(move |_| menu_open.set(false))
                    pages=drawer_pages
                    app_name=app_name
                    strings=strings
                />
            </header>
            {move || banner.get().map(|announcement| view! {
                <AnnounceBanner announcement=announcement strings=strings/>
            })}
        </div>
    }
}
