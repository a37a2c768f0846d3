use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::evaluation::{Evaluation, EvaluationDraft, Grade};

use crate::shared::components::modal_form::{FieldError, ModalForm};
use crate::shared::resource::{FormState, Panel};
use crate::shared::toast::use_toasts;

/// Live preview of the average and grade for the current draft; None
/// until all four grades parse.
fn preview(draft: &EvaluationDraft) -> Option<(f64, Grade)> {
    let work = draft.work.trim().parse::<f64>().ok()?;
    let leave = draft.leave.trim().parse::<f64>().ok()?;
    let time = draft.time.trim().parse::<f64>().ok()?;
    let behaviour = draft.behaviour.trim().parse::<f64>().ok()?;
    let avg = (work + leave + time + behaviour) / 4.0;
    Some((avg, Grade::from_average(avg)))
}

#[component]
pub fn EvaluationDetails(
    form: RwSignal<FormState<EvaluationDraft>>,
    panel: Panel<Evaluation>,
) -> impl IntoView {
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

        // Grades go over the wire as numbers.
        let payload = serde_json::json!({
            "employeeName": draft.employee_name.trim(),
            "month": draft.month.trim(),
            "work": draft.work.trim().parse::<f64>().unwrap_or(0.0),
            "leave": draft.leave.trim().parse::<f64>().unwrap_or(0.0),
            "time": draft.time.trim().parse::<f64>().unwrap_or(0.0),
            "behaviour": draft.behaviour.trim().parse::<f64>().unwrap_or(0.0),
        });

        spawn_local(async move {
            let client = panel.client();
            let result = match &editing {
                Some(id) => client.update::<_, Evaluation>(id, &payload).await.map(|_| ()),
                None => client.create::<_, Evaluation>(&payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toasts.success(if editing.is_some() {
                        "Evaluation updated"
                    } else {
                        "Evaluation recorded"
                    });
                    form.update(|f| f.submit_succeeded());
                    panel.load();
                }
                Err(err) => {
                    log::error!("evaluation save failed: {}", err);
                    toasts.error(err.user_message());
                    form.update(|f| f.submit_failed());
                }
            }
        });
    });

    let title = Signal::derive(move || {
        if form.with(|f| f.is_edit()) {
            "Edit evaluation".to_string()
        } else {
            "New evaluation".to_string()
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
                    <label for="ev-employee">{"Employee"}</label>
                    <input
                        type="text"
                        id="ev-employee"
                        prop:value=move || form.with(|f| f.draft.employee_name.clone())
                        on:input=move |ev| form.update(|f| f.draft.employee_name = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("employeeName"))) />
                </div>
                <div class="form-group">
                    <label for="ev-month">{"Month"}</label>
                    <input
                        type="month"
                        id="ev-month"
                        prop:value=move || form.with(|f| f.draft.month.clone())
                        on:input=move |ev| form.update(|f| f.draft.month = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("month"))) />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="ev-work">{"Work"}</label>
                    <input
                        type="number"
                        id="ev-work"
                        min="0"
                        max="100"
                        prop:value=move || form.with(|f| f.draft.work.clone())
                        on:input=move |ev| form.update(|f| f.draft.work = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("work"))) />
                </div>
                <div class="form-group">
                    <label for="ev-leave">{"Leave"}</label>
                    <input
                        type="number"
                        id="ev-leave"
                        min="0"
                        max="100"
                        prop:value=move || form.with(|f| f.draft.leave.clone())
                        on:input=move |ev| form.update(|f| f.draft.leave = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("leave"))) />
                </div>
                <div class="form-group">
                    <label for="ev-time">{"Time"}</label>
                    <input
                        type="number"
                        id="ev-time"
                        min="0"
                        max="100"
                        prop:value=move || form.with(|f| f.draft.time.clone())
                        on:input=move |ev| form.update(|f| f.draft.time = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("time"))) />
                </div>
                <div class="form-group">
                    <label for="ev-behaviour">{"Behaviour"}</label>
                    <input
                        type="number"
                        id="ev-behaviour"
                        min="0"
                        max="100"
                        prop:value=move || form.with(|f| f.draft.behaviour.clone())
                        on:input=move |ev| form.update(|f| f.draft.behaviour = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("behaviour"))) />
                </div>
            </div>

            <div class="form-group">
                <span class="net-preview">
                    {move || {
                        match form.with(|f| preview(&f.draft)) {
                            Some((avg, grade)) => format!("Average: {:.1}  Grade: {}", avg, grade.label()),
                            None => "Average: -".to_string(),
                        }
                    }}
                </span>
            </div>
        </ModalForm>
    }
}
