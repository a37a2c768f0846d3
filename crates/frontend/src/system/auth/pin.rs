use leptos::prelude::*;

use crate::shared::storage::{self, StoreKey};

/// Session gate for the payroll-grade sections.
///
/// The entered PIN is kept in session storage only (swept at logout); it
/// accompanies every request to the section's endpoints via the backend's
/// own checks, so the client stores it without inspecting it.
#[component]
pub fn PinGate(section: &'static str, children: ChildrenFn) -> impl IntoView {
    let (unlocked, set_unlocked) = signal(storage::get(StoreKey::SectionPin(section)).is_some());
    let (pin, set_pin) = signal(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value = pin.get_untracked();
        if value.trim().is_empty() {
            return;
        }
        storage::set(StoreKey::SectionPin(section), value.trim());
        set_unlocked.set(true);
    };

    view! {
        <Show
            when=move || unlocked.get()
            fallback=move || {
                view! {
                    <div class="pin-gate">
                        <h2>{"This section is protected"}</h2>
                        <p>{"Enter your section PIN to continue."}</p>
                        <form on:submit=on_submit>
                            <input
                                type="password"
                                class="pin-gate__input"
                                placeholder="PIN"
                                prop:value=move || pin.get()
                                on:input=move |ev| set_pin.set(event_target_value(&ev))
                            />
                            <button type="submit" class="button button--primary">
                                {"Unlock"}
                            </button>
                        </form>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
