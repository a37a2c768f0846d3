use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::position::{OpenPosition, PositionDraft, PositionStatus};

use crate::shared::components::modal_form::{FieldError, ModalForm};
use crate::shared::resource::{FormState, Panel};
use crate::shared::toast::use_toasts;

#[component]
pub fn PositionDetails(
    form: RwSignal<FormState<PositionDraft>>,
    panel: Panel<OpenPosition>,
) -> impl IntoView {
    let toasts = use_toasts();

    let on_save = Callback::new(move |_| {
        let allowed = form
            .try_update(|f| f.begin_submit(|d| d.validate()))
            .unwrap_or(false);
        if !allowed {
            return;
        }
        // The line-edited list fields go over the wire as arrays.
        let payload = form.with_untracked(|f| f.draft.to_payload());
        let editing = form.with_untracked(|f| f.editing_id().map(str::to_string));

        spawn_local(async move {
            let client = panel.client();
            let result = match &editing {
                Some(id) => client.update::<_, OpenPosition>(id, &payload).await.map(|_| ()),
                None => client.create::<_, OpenPosition>(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toasts.success(if editing.is_some() {
                        "Position updated"
                    } else {
                        "Position published"
                    });
                    form.update(|f| f.submit_succeeded());
                    panel.load();
                }
                Err(err) => {
                    log::error!("position save failed: {}", err);
                    toasts.error(err.user_message());
                    form.update(|f| f.submit_failed());
                }
            }
        });
    });

    let title = Signal::derive(move || {
        if form.with(|f| f.is_edit()) {
            "Edit position".to_string()
        } else {
            "New position".to_string()
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
            <div class="form-row">
                <div class="form-group">
                    <label for="pos-position">{"Position"}</label>
                    <input
                        type="text"
                        id="pos-position"
                        prop:value=move || form.with(|f| f.draft.position.clone())
                        on:input=move |ev| form.update(|f| f.draft.position = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("position"))) />
                </div>
                <div class="form-group">
                    <label for="pos-department">{"Department"}</label>
                    <input
                        type="text"
                        id="pos-department"
                        prop:value=move || form.with(|f| f.draft.department.clone())
                        on:input=move |ev| form.update(|f| f.draft.department = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("department"))) />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="pos-jobtype">{"Job type"}</label>
                    <input
                        type="text"
                        id="pos-jobtype"
                        placeholder="Full-time, Part-time, Contract..."
                        prop:value=move || form.with(|f| f.draft.job_type.clone())
                        on:input=move |ev| form.update(|f| f.draft.job_type = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("jobType"))) />
                </div>
                <div class="form-group">
                    <label for="pos-experience">{"Experience"}</label>
                    <input
                        type="text"
                        id="pos-experience"
                        placeholder="e.g. 3+ years"
                        prop:value=move || form.with(|f| f.draft.experience.clone())
                        on:input=move |ev| form.update(|f| f.draft.experience = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("experience"))) />
                </div>
            </div>

            <div class="form-group">
                <label for="pos-duties">{"Duties (one per line)"}</label>
                <textarea
                    id="pos-duties"
                    rows="4"
                    prop:value=move || form.with(|f| f.draft.duties.clone())
                    on:input=move |ev| form.update(|f| f.draft.duties = event_target_value(&ev))
                />
                <FieldError error=Signal::derive(move || form.with(|f| f.error_for("duties"))) />
            </div>

            <div class="form-group">
                <label for="pos-needs">{"Requirements (one per line)"}</label>
                <textarea
                    id="pos-needs"
                    rows="4"
                    prop:value=move || form.with(|f| f.draft.needs.clone())
                    on:input=move |ev| form.update(|f| f.draft.needs = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="pos-benefits">{"Benefits (one per line)"}</label>
                <textarea
                    id="pos-benefits"
                    rows="4"
                    prop:value=move || form.with(|f| f.draft.benefits.clone())
                    on:input=move |ev| form.update(|f| f.draft.benefits = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="pos-status">{"Status"}</label>
                <select
                    id="pos-status"
                    on:change=move |ev| {
                        let status = match event_target_value(&ev).as_str() {
                            "closed" => PositionStatus::Closed,
                            _ => PositionStatus::Open,
                        };
                        form.update(|f| f.draft.status = status);
                    }
                >
                    <option value="open" selected=move || form.with(|f| f.draft.status == PositionStatus::Open)>
                        {"Open"}
                    </option>
                    <option value="closed" selected=move || form.with(|f| f.draft.status == PositionStatus::Closed)>
                        {"Closed"}
                    </option>
                </select>
            </div>
        </ModalForm>
    }
}
