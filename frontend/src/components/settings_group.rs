use leptos::*;
use wasm_bindgen::JsCast;

use crate::components::icon_button::IconButton;
use crate::components::icons::SettingsIcon;
use crate::utils::dom::{document_target, listen, viewport_width};
use crate::utils::{Anchor, DropdownState};

/// Settings button with a dropdown anchored to it.
///
/// The dropdown content stays mounted while closed. Clicking an item, clicking
/// outside the group, or pressing Escape closes it.
#[component]
pub fn SettingsGroup(#[prop(into)] label: MaybeSignal<String>, children: Children) -> impl IntoView {
    let dropdown = create_rw_signal(DropdownState::Closed);
    let group_ref = create_node_ref::<html::Div>();

    // The menu hangs off the element that received the click.
    let open = Callback::new(move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        let Some(button) = ev
            .current_target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        else {
            return;
        };
        let anchor = Anchor::from_rect(&button.get_bounding_client_rect());
        dropdown.update(|state| state.open_at(anchor));
    });
    let close = move || dropdown.update(DropdownState::close);

    create_effect(move |_| {
        if !dropdown.with(DropdownState::is_open) {
            return;
        }
        let Some(document) = document_target() else {
            return;
        };

        listen(document.clone(), "click", move |event: web_sys::MouseEvent| {
            let inside = match (group_ref.get_untracked(), event.target()) {
                (Some(group), Some(target)) => {
                    let node: web_sys::Node = target.unchecked_into();
                    group.contains(Some(&node))
                }
                _ => false,
            };
            if !inside {
                close();
            }
        });
        listen(document, "keydown", move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" {
                close();
            }
        });
    });

    let menu_style = move || {
        dropdown
            .with(DropdownState::anchor)
            .map(|anchor| anchor.menu_style(viewport_width().unwrap_or_default()))
            .unwrap_or_else(|| "display: none;".to_string())
    };

    view! {
        <div class="header-group settings-group" node_ref=group_ref>
            <IconButton label=label class="settings-button" on_click=open>
                <SettingsIcon/>
            </IconButton>
            <div
                class="dropdown-menu"
                class:open=move || dropdown.with(DropdownState::is_open)
                role="menu"
                style=menu_style
                on:click=move |_| close()
            >
                {children()}
            </div>
        </div>
    }
}
