use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::intern::{Intern, InternDraft, InternStatus};

use crate::shared::components::modal_form::{FieldError, ModalForm};
use crate::shared::resource::{FormState, Panel};
use crate::shared::toast::use_toasts;

#[component]
pub fn InternDetails(form: RwSignal<FormState<InternDraft>>, panel: Panel<Intern>) -> impl IntoView {
    let toasts = use_toasts();

    let on_save = Callback::new(move |_| {
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
                Some(id) => client.update::<_, Intern>(id, &draft).await.map(|_| ()),
                None => client.create::<_, Intern>(&draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toasts.success(if editing.is_some() {
                        "Intern updated"
                    } else {
                        "Intern created"
                    });
                    form.update(|f| f.submit_succeeded());
                    panel.load();
                }
                Err(err) => {
                    log::error!("intern save failed: {}", err);
                    toasts.error(err.user_message());
                    form.update(|f| f.submit_failed());
                }
            }
        });
    });

    let title = Signal::derive(move || {
        if form.with(|f| f.is_edit()) {
            "Edit intern".to_string()
        } else {
            "New intern".to_string()
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
                    <label for="int-name">{"Name"}</label>
                    <input
                        type="text"
                        id="int-name"
                        prop:value=move || form.with(|f| f.draft.name.clone())
                        on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("name"))) />
                </div>
                <div class="form-group">
                    <label for="int-position">{"Position"}</label>
                    <input
                        type="text"
                        id="int-position"
                        prop:value=move || form.with(|f| f.draft.position.clone())
                        on:input=move |ev| form.update(|f| f.draft.position = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("position"))) />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="int-email">{"Email"}</label>
                    <input
                        type="email"
                        id="int-email"
                        prop:value=move || form.with(|f| f.draft.email.clone())
                        on:input=move |ev| form.update(|f| f.draft.email = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("email"))) />
                </div>
                <div class="form-group">
                    <label for="int-phone">{"Phone"}</label>
                    <input
                        type="tel"
                        id="int-phone"
                        placeholder="10 digits"
                        prop:value=move || form.with(|f| f.draft.phone.clone())
                        on:input=move |ev| form.update(|f| f.draft.phone = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("phone"))) />
                </div>
            </div>

            <div class="form-group">
                <label for="int-university">{"University"}</label>
                <input
                    type="text"
                    id="int-university"
                    prop:value=move || form.with(|f| f.draft.university.clone())
                    on:input=move |ev| form.update(|f| f.draft.university = event_target_value(&ev))
                />
                <FieldError error=Signal::derive(move || form.with(|f| f.error_for("university"))) />
            </div>

            <div class="form-group">
                <label for="int-mentor">{"Mentor"}</label>
                <input
                    type="text"
                    id="int-mentor"
                    prop:value=move || form.with(|f| f.draft.mentor.clone())
                    on:input=move |ev| form.update(|f| f.draft.mentor = event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="int-start">{"Start date"}</label>
                    <input
                        type="date"
                        id="int-start"
                        prop:value=move || form.with(|f| f.draft.start_date.clone())
                        on:input=move |ev| form.update(|f| f.draft.start_date = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("startDate"))) />
                </div>
                <div class="form-group">
                    <label for="int-duration">{"Duration (months)"}</label>
                    <input
                        type="number"
                        id="int-duration"
                        prop:value=move || form.with(|f| f.draft.duration_months.clone())
                        on:input=move |ev| form.update(|f| f.draft.duration_months = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("durationMonths"))) />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="int-stipend">{"Stipend"}</label>
                    <input
                        type="number"
                        id="int-stipend"
                        prop:value=move || form.with(|f| f.draft.stipend.clone())
                        on:input=move |ev| form.update(|f| f.draft.stipend = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("stipend"))) />
                </div>
                <div class="form-group">
                    <label for="int-status">{"Status"}</label>
                    <select
                        id="int-status"
                        on:change=move |ev| {
                            let status = match event_target_value(&ev).as_str() {
                                "completed" => InternStatus::Completed,
                                "converted" => InternStatus::Converted,
                                _ => InternStatus::Ongoing,
                            };
                            form.update(|f| f.draft.status = status);
                        }
                    >
                        {InternStatus::ALL
                            .into_iter()
                            .map(|status| {
                                let value = match status {
                                    InternStatus::Ongoing => "ongoing",
                                    InternStatus::Completed => "completed",
                                    InternStatus::Converted => "converted",
                                };
                                view! {
                                    <option
                                        value=value
                                        selected=move || form.with(|f| f.draft.status == status)
                                    >
                                        {status.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </ModalForm>
    }
}
