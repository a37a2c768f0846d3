use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::leave::{LeaveDraft, LeaveRequest};

use crate::shared::components::modal_form::{FieldError, ModalForm};
use crate::shared::resource::{FormState, Panel};
use crate::shared::toast::use_toasts;

#[component]
pub fn LeaveDetails(
    form: RwSignal<FormState<LeaveDraft>>,
    panel: Panel<LeaveRequest>,
) -> impl IntoView {
    let toasts = use_toasts();

    let on_save = Callback::new(move |_| {
        // The whole rule set runs in one pass; an end date before the
        // start date never reaches the gateway.
        let allowed = form
            .try_update(|f| f.begin_submit(|d| d.validate()))
            .unwrap_or(false);
        if !allowed {
            return;
        }
        let draft = form.with_untracked(|f| f.draft.clone());
        let editing = form.with_untracked(|f| f.editing_id().map(str::to_string));

        spawn_local(async move {
            let client = panel.client();
            let result = match &editing {
                Some(id) => client.update::<_, LeaveRequest>(id, &draft).await.map(|_| ()),
                None => client.create::<_, LeaveRequest>(&draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toasts.success(if editing.is_some() {
                        "Leave updated"
                    } else {
                        "Leave recorded"
                    });
                    form.update(|f| f.submit_succeeded());
                    panel.load();
                }
                Err(err) => {
                    log::error!("leave save failed: {}", err);
                    toasts.error(err.user_message());
                    form.update(|f| f.submit_failed());
                }
            }
        });
    });

    let title = Signal::derive(move || {
        if form.with(|f| f.is_edit()) {
            "Edit leave".to_string()
        } else {
            "New leave".to_string()
        }
    });

    view! {
        <ModalForm
            title=title
            open=Signal::derive(move || form.with(|f| f.is_open()))
            submitting=Signal::derive(move || form.with(|f| f.submitting))
            on_save=on_save
            on_cancel=Callback::new(move |_| form.update(|f| f.cancel()))
        >
            <div class="form-group">
                <label for="leave-name">{"Name"}</label>
                <input
                    type="text"
                    id="leave-name"
                    prop:value=move || form.with(|f| f.draft.name.clone())
                    on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                />
                <FieldError error=Signal::derive(move || form.with(|f| f.error_for("name"))) />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="leave-start">{"Start date"}</label>
                    <input
                        type="date"
                        id="leave-start"
                        prop:value=move || form.with(|f| f.draft.start_date.clone())
                        on:input=move |ev| form.update(|f| f.draft.start_date = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("startDate"))) />
                </div>
                <div class="form-group">
                    <label for="leave-end">{"End date"}</label>
                    <input
                        type="date"
                        id="leave-end"
                        prop:value=move || form.with(|f| f.draft.end_date.clone())
                        on:input=move |ev| form.update(|f| f.draft.end_date = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("endDate"))) />
                </div>
            </div>

            <div class="form-group">
                <label for="leave-reason">{"Reason"}</label>
                <textarea
                    id="leave-reason"
                    rows="3"
                    prop:value=move || form.with(|f| f.draft.reason.clone())
                    on:input=move |ev| form.update(|f| f.draft.reason = event_target_value(&ev))
                />
                <FieldError error=Signal::derive(move || form.with(|f| f.error_for("reason"))) />
            </div>
        </ModalForm>
    }
}
