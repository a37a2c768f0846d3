use leptos::prelude::*;
use thaw::Spinner;

use crate::shared::icons::icon;

/// Shared modal chrome for every create/edit form.
///
/// The page supplies the form fields as children and keeps the form state;
/// this shell owns the overlay, the Escape/overlay-click close paths and
/// the submit/cancel footer. While `submitting` is set every control is
/// disabled and the submit button shows a busy spinner, which is what
/// prevents duplicate in-flight mutations from one modal.
#[component]
pub fn ModalForm(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] open: Signal<bool>,
    #[prop(into)] submitting: Signal<bool>,
    on_save: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] save_label: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let save_label = save_label.unwrap_or_else(|| "Save".to_string());

    view! {
        <Show when=move || open.get()>
            <div
                class="modal-overlay"
                on:click=move |_| {
                    if !submitting.get_untracked() {
                        on_cancel.run(());
                    }
                }
                on:keydown=move |ev| {
                    if ev.key() == "Escape" && !submitting.get_untracked() {
                        on_cancel.run(());
                    }
                }
            >
                <div class="modal-surface" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-surface__header">
                        <h3>{move || title.get()}</h3>
                        <button
                            class="modal-surface__close"
                            on:click=move |_| on_cancel.run(())
                            disabled=move || submitting.get()
                            title="Close"
                        >
                            {icon("x")}
                        </button>
                    </div>

                    <fieldset class="modal-surface__body" disabled=move || submitting.get()>
                        {children()}
                    </fieldset>

                    <div class="modal-surface__actions">
                        <button
                            class="button button--primary"
                            on:click=move |_| on_save.run(())
                            disabled=move || submitting.get()
                        >
                            {move || {
                                if submitting.get() {
                                    view! { <Spinner /> }.into_any()
                                } else {
                                    icon("save")
                                }
                            }}
                            {
                                let save_label = save_label.clone();
                                move || save_label.clone()
                            }
                        </button>
                        <button
                            class="button button--secondary"
                            on:click=move |_| on_cancel.run(())
                            disabled=move || submitting.get()
                        >
                            {icon("cancel")}
                            {"Cancel"}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

/// Inline field error, rendered under the offending input.
#[component]
pub fn FieldError(#[prop(into)] error: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || error.get().map(|msg| view! { <div class="field-error">{msg}</div> })}
    }
}
