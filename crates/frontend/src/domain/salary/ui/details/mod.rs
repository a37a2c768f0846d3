use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use contracts::domain::salary::{compute_net, SalaryDraft, SalaryRecord};
use contracts::validate::SLIP_MIME_TYPES;

use crate::shared::api_client::ApiError;
use crate::shared::components::file_drop::{append_attachment, FileDrop, PickedFile};
use crate::shared::components::modal_form::{FieldError, ModalForm};
use crate::shared::resource::{FormState, Panel};
use crate::shared::toast::use_toasts;

/// Multipart body for the salary form. When no new slip was chosen the
/// previously stored reference is re-sent as a plain field, so the
/// backend keeps the attachment instead of nulling it.
fn build_form_data(draft: &SalaryDraft, slip: Option<&PickedFile>) -> Result<FormData, String> {
    let fd = FormData::new().map_err(|e| format!("{:?}", e))?;
    let err = |e: wasm_bindgen::JsValue| format!("{:?}", e);

    fd.append_with_str("employeeName", draft.employee_name.trim()).map_err(err)?;
    fd.append_with_str("month", draft.month.trim()).map_err(err)?;
    fd.append_with_str("basic", draft.basic.trim()).map_err(err)?;
    fd.append_with_str("allowances", draft.allowances.trim()).map_err(err)?;
    fd.append_with_str("deductions", draft.deductions.trim()).map_err(err)?;

    let net = compute_net(
        draft.basic.trim().parse().unwrap_or(0.0),
        draft.allowances.trim().parse().unwrap_or(0.0),
        draft.deductions.trim().parse().unwrap_or(0.0),
    );
    fd.append_with_str("netPay", &format!("{}", net)).map_err(err)?;

    append_attachment(&fd, "slip", "slipRef", slip, draft.existing_slip_ref.as_deref())?;
    Ok(fd)
}

#[component]
pub fn SalaryDetails(
    form: RwSignal<FormState<SalaryDraft>>,
    panel: Panel<SalaryRecord>,
) -> impl IntoView {
    let toasts = use_toasts();
    let slip = RwSignal::new(Option::<PickedFile>::None);

    let on_save = Callback::new(move |_| {
        let allowed = form
            .try_update(|f| f.begin_submit(|d| d.validate()))
            .unwrap_or(false);
        if !allowed {
            return;
        }
        let draft = form.with_untracked(|f| f.draft.clone());
        let editing = form.with_untracked(|f| f.editing_id().map(str::to_string));
        let picked = slip.get_untracked();

        spawn_local(async move {
            let fd = match build_form_data(&draft, picked.as_ref()) {
                Ok(fd) => fd,
                Err(e) => {
                    log::error!("form data build failed: {}", e);
                    toasts.error("Could not prepare the upload");
                    form.update(|f| f.submit_failed());
                    return;
                }
            };

            let client = panel.client();
            let result: Result<(), ApiError> = match &editing {
                Some(id) => client
                    .update_multipart::<SalaryRecord>(id, fd)
                    .await
                    .map(|_| ()),
                None => client.create_multipart::<SalaryRecord>(fd).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toasts.success(if editing.is_some() {
                        "Salary entry updated"
                    } else {
                        "Salary entry created"
                    });
                    form.update(|f| f.submit_succeeded());
                    slip.set(None);
                    panel.load();
                }
                Err(err) => {
                    log::error!("salary save failed: {}", err);
                    toasts.error(err.user_message());
                    form.update(|f| f.submit_failed());
                }
            }
        });
    });

    let on_cancel = Callback::new(move |_| {
        // Discard any in-progress slip selection along with the draft.
        slip.set(None);
        form.update(|f| f.cancel());
    });

    let title = Signal::derive(move || {
        if form.with(|f| f.is_edit()) {
            "Edit salary entry".to_string()
        } else {
            "New salary entry".to_string()
        }
    });

    view! {
        <ModalForm
            title=title
            open=Signal::derive(move || form.with(|f| f.is_open()))
            submitting=Signal::derive(move || form.with(|f| f.submitting))
            on_save=on_save
            on_cancel=on_cancel
        >
            <div class="form-row">
                <div class="form-group">
                    <label for="sal-employee">{"Employee"}</label>
                    <input
                        type="text"
                        id="sal-employee"
                        prop:value=move || form.with(|f| f.draft.employee_name.clone())
                        on:input=move |ev| form.update(|f| f.draft.employee_name = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("employeeName"))) />
                </div>
                <div class="form-group">
                    <label for="sal-month">{"Month"}</label>
                    <input
                        type="month"
                        id="sal-month"
                        prop:value=move || form.with(|f| f.draft.month.clone())
                        on:input=move |ev| form.update(|f| f.draft.month = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("month"))) />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="sal-basic">{"Basic"}</label>
                    <input
                        type="number"
                        id="sal-basic"
                        prop:value=move || form.with(|f| f.draft.basic.clone())
                        on:input=move |ev| form.update(|f| f.draft.basic = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("basic"))) />
                </div>
                <div class="form-group">
                    <label for="sal-allowances">{"Allowances"}</label>
                    <input
                        type="number"
                        id="sal-allowances"
                        prop:value=move || form.with(|f| f.draft.allowances.clone())
                        on:input=move |ev| form.update(|f| f.draft.allowances = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("allowances"))) />
                </div>
                <div class="form-group">
                    <label for="sal-deductions">{"Deductions"}</label>
                    <input
                        type="number"
                        id="sal-deductions"
                        prop:value=move || form.with(|f| f.draft.deductions.clone())
                        on:input=move |ev| form.update(|f| f.draft.deductions = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("deductions"))) />
                </div>
            </div>

            <div class="form-group">
                <span class="net-preview">
                    {"Net pay: "}
                    {move || format!("{:.2}", form.with(|f| f.draft.net_preview()))}
                </span>
            </div>

            <FileDrop
                allowed=SLIP_MIME_TYPES
                picked=slip
                existing=Signal::derive(move || form.with(|f| f.draft.existing_slip_ref.clone()))
                label="Salary slip (PDF)"
            />
        </ModalForm>
    }
}
