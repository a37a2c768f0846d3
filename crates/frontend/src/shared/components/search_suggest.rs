use leptos::prelude::*;

use crate::shared::icons::icon;

/// Free-text search box with an autocomplete dropdown.
///
/// The caller computes the (already capped, distinct) suggestion list from
/// its unfiltered snapshot; picking one funnels through `on_change` like
/// any other edit, so the filter pass always re-derives from the snapshot.
/// The dropdown closes on Escape, on blur and on selection.
#[component]
pub fn SearchSuggest(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] suggestions: Signal<Vec<String>>,
    on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let (open, set_open) = signal(false);

    view! {
        <div class="search-suggest">
            <span class="search-suggest__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-suggest__input"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| {
                    on_change.run(event_target_value(&ev));
                    set_open.set(true);
                }
                on:keydown=move |ev| {
                    if ev.key() == "Escape" {
                        set_open.set(false);
                    }
                }
                // Mousedown on a suggestion fires before this blur.
                on:blur=move |_| set_open.set(false)
            />
            {move || {
                let items = suggestions.get();
                if open.get() && !items.is_empty() {
                    view! {
                        <ul class="search-suggest__list">
                            {items
                                .into_iter()
                                .map(|name| {
                                    let picked = name.clone();
                                    view! {
                                        <li
                                            class="search-suggest__item"
                                            on:mousedown=move |ev| {
                                                ev.prevent_default();
                                                on_change.run(picked.clone());
                                                set_open.set(false);
                                            }
                                        >
                                            {name}
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    }
                        .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
