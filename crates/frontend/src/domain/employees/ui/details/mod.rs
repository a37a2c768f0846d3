use leptos::prelude::*;
use leptos::task::spawn_local;

use contracts::domain::employee::{Employee, EmployeeDraft, EmployeeStatus};

use crate::shared::components::modal_form::{FieldError, ModalForm};
use crate::shared::resource::{FormState, Panel};
use crate::shared::toast::use_toasts;

/// Employee create/edit modal. Owns nothing: the form state and the panel
/// both live on the list page so cancel/refetch stay in one place.
#[component]
pub fn EmployeeDetails(
    form: RwSignal<FormState<EmployeeDraft>>,
    panel: Panel<Employee>,
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

        spawn_local(async move {
            let client = panel.client();
            let result = match &editing {
                Some(id) => client.update::<_, Employee>(id, &draft).await.map(|_| ()),
                None => client.create::<_, Employee>(&draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toasts.success(if editing.is_some() {
                        "Employee updated"
                    } else {
                        "Employee created"
                    });
                    form.update(|f| f.submit_succeeded());
                    panel.load();
                }
                Err(err) => {
                    log::error!("employee save failed: {}", err);
                    toasts.error(err.user_message());
                    form.update(|f| f.submit_failed());
                }
            }
        });
    });

    let on_cancel = Callback::new(move |_| form.update(|f| f.cancel()));

    let title = Signal::derive(move || {
        if form.with(|f| f.is_edit()) {
            "Edit employee".to_string()
        } else {
            "New employee".to_string()
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
            <div class="form-group">
                <label for="emp-name">{"Name"}</label>
                <input
                    type="text"
                    id="emp-name"
                    prop:value=move || form.with(|f| f.draft.name.clone())
                    on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                />
                <FieldError error=Signal::derive(move || form.with(|f| f.error_for("name"))) />
            </div>

            <div class="form-group">
                <label for="emp-email">{"Email"}</label>
                <input
                    type="email"
                    id="emp-email"
                    prop:value=move || form.with(|f| f.draft.email.clone())
                    on:input=move |ev| form.update(|f| f.draft.email = event_target_value(&ev))
                />
                <FieldError error=Signal::derive(move || form.with(|f| f.error_for("email"))) />
            </div>

            <div class="form-group">
                <label for="emp-phone">{"Phone"}</label>
                <input
                    type="tel"
                    id="emp-phone"
                    placeholder="10 digits"
                    prop:value=move || form.with(|f| f.draft.phone.clone())
                    on:input=move |ev| form.update(|f| f.draft.phone = event_target_value(&ev))
                />
                <FieldError error=Signal::derive(move || form.with(|f| f.error_for("phone"))) />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="emp-position">{"Position"}</label>
                    <input
                        type="text"
                        id="emp-position"
                        prop:value=move || form.with(|f| f.draft.position.clone())
                        on:input=move |ev| form.update(|f| f.draft.position = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("position"))) />
                </div>

                <div class="form-group">
                    <label for="emp-department">{"Department"}</label>
                    <input
                        type="text"
                        id="emp-department"
                        prop:value=move || form.with(|f| f.draft.department.clone())
                        on:input=move |ev| form.update(|f| f.draft.department = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("department"))) />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="emp-salary">{"Monthly salary"}</label>
                    <input
                        type="number"
                        id="emp-salary"
                        prop:value=move || form.with(|f| f.draft.salary.clone())
                        on:input=move |ev| form.update(|f| f.draft.salary = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("salary"))) />
                </div>

                <div class="form-group">
                    <label for="emp-joining">{"Joining date"}</label>
                    <input
                        type="date"
                        id="emp-joining"
                        prop:value=move || form.with(|f| f.draft.joining_date.clone())
                        on:input=move |ev| form.update(|f| f.draft.joining_date = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("joiningDate"))) />
                </div>
            </div>

            <div class="form-group">
                <label for="emp-status">{"Status"}</label>
                <select
                    id="emp-status"
                    on:change=move |ev| {
                        let status = match event_target_value(&ev).as_str() {
                            "onLeave" => EmployeeStatus::OnLeave,
                            "resigned" => EmployeeStatus::Resigned,
                            _ => EmployeeStatus::Active,
                        };
                        form.update(|f| f.draft.status = status);
                    }
                >
                    {EmployeeStatus::ALL
                        .into_iter()
                        .map(|status| {
                            let value = match status {
                                EmployeeStatus::Active => "active",
                                EmployeeStatus::OnLeave => "onLeave",
                                EmployeeStatus::Resigned => "resigned",
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
        </ModalForm>
    }
}
