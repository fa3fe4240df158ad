use leptos::*;
use leptos_router::A;

use crate::components::icon_button::IconButton;
use crate::components::icons::MenuIcon;

/// Application name linking home.
#[component]
pub fn AppLogo(
    #[prop(into)] app_name: String,
    /// Called after the logo was clicked, before navigation
    #[prop(optional)]
    on_click: Option<Callback<ev::MouseEvent>>,
) -> impl IntoView {
    view! {
        <span
            class="app-logo"
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            <A href="/">{app_name}</A>
        </span>
    }
}

#[component]
pub fn LogoGroup(
    #[prop(into)] app_name: String,
    #[prop(into)] menu_label: MaybeSignal<String>,
    on_menu_click: Callback<ev::MouseEvent>,
) -> impl IntoView {
    view! {
        <div class="header-group logo-group">
            <IconButton label=menu_label class="menu-button" on_click=on_menu_click>
                <MenuIcon/>
            </IconButton>
            // hidden below 800px by the stylesheet
            <div class="app-logo-wrapper">
                <AppLogo app_name=app_name/>
            </div>
        </div>
    }
}
