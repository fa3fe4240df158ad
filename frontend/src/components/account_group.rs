use leptos::*;
use leptos_router::A;
use shared::User;

use crate::i18n::I18nContext;

/// Signed-in user's avatar and name, or a login link.
#[component]
pub fn AccountWidget(
    #[prop(into)] user: Signal<Option<User>>,
    #[prop(into)] login_url: String,
    strings: I18nContext,
) -> impl IntoView {
    move || match user.get() {
        Some(user) => {
            let name = user.display_name();
            let href = user.profile_path();
            let avatar = user.avatar;
            view! {
                <A href=href class="account-link">
                    {avatar.map(|src| view! {
                        <img class="account-avatar" src=src alt="" width="28" height="28"/>
                    })}
                    <span class="account-name">{name}</span>
                </A>
            }
            .into_view()
        }
        None => view! {
            <a class="account-login" href=login_url.clone()>
                {move || strings.t("app.login")}
            </a>
        }
        .into_view(),
    }
}

#[component]
pub fn AccountGroup(
    #[prop(into)] user: Signal<Option<User>>,
    #[prop(into)] login_url: String,
    strings: I18nContext,
) -> impl IntoView {
    view! {
        <div class="header-group account-group">
            <AccountWidget user=user login_url=login_url strings=strings/>
        </div>
    }
}
