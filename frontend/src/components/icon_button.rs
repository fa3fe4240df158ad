use leptos::*;

/// Icon-only button for header actions.
#[component]
pub fn IconButton(
    /// Accessible name, also shown as tooltip
    #[prop(into)]
    label: MaybeSignal<String>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] on_click: Option<Callback<ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let full_class = match class {
        Some(extra) => format!("btn btn-icon {}", extra),
        None => "btn btn-icon".to_string(),
    };
    let title = label.clone();

    view! {
        <button
            type="button"
            class=full_class
            aria-label=move || label.get()
            title=move || title.get()
            on:click=move |ev| {
                if let Some(callback) = on_click {
                    callback.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
