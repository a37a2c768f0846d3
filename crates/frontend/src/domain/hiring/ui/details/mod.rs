use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use contracts::domain::candidate::{Candidate, CandidateDraft, Stage};
use contracts::validate::RESUME_MIME_TYPES;

use crate::shared::api_client::ApiError;
use crate::shared::components::file_drop::{append_attachment, FileDrop, PickedFile};
use crate::shared::components::modal_form::{FieldError, ModalForm};
use crate::shared::resource::{FormState, Panel};
use crate::shared::toast::use_toasts;

fn stage_value(stage: Stage) -> &'static str {
    match stage {
        Stage::Applied => "applied",
        Stage::Shortlisted => "shortlisted",
        Stage::Interview => "interview",
        Stage::Complete => "complete",
    }
}

fn build_form_data(draft: &CandidateDraft, resume: Option<&PickedFile>) -> Result<FormData, String> {
    let fd = FormData::new().map_err(|e| format!("{:?}", e))?;
    let err = |e: wasm_bindgen::JsValue| format!("{:?}", e);

    fd.append_with_str("name", draft.name.trim()).map_err(err)?;
    fd.append_with_str("email", draft.email.trim()).map_err(err)?;
    fd.append_with_str("phone", draft.phone.trim()).map_err(err)?;
    fd.append_with_str("position", draft.position.trim()).map_err(err)?;
    fd.append_with_str("experience", draft.experience.trim()).map_err(err)?;
    fd.append_with_str("stage", stage_value(draft.stage)).map_err(err)?;
    if !draft.interview_at.trim().is_empty() {
        fd.append_with_str("interviewAt", draft.interview_at.trim()).map_err(err)?;
    }
    append_attachment(
        &fd,
        "resume",
        "resumeRef",
        resume,
        draft.existing_resume_ref.as_deref(),
    )?;
    Ok(fd)
}

#[component]
pub fn CandidateDetails(
    form: RwSignal<FormState<CandidateDraft>>,
    panel: Panel<Candidate>,
) -> impl IntoView {
    let toasts = use_toasts();
    let resume = RwSignal::new(Option::<PickedFile>::None);

    let on_save = Callback::new(move |_| {
        let today = chrono::Utc::now().date_naive();
        let allowed = form
            .try_update(|f| f.begin_submit(|d| d.validate(today)))
            .unwrap_or(false);
        if !allowed {
            return;
        }
        let draft = form.with_untracked(|f| f.draft.clone());
        let editing = form.with_untracked(|f| f.editing_id().map(str::to_string));
        let picked = resume.get_untracked();

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
                Some(id) => client.update_multipart::<Candidate>(id, fd).await.map(|_| ()),
                None => client.create_multipart::<Candidate>(fd).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toasts.success(if editing.is_some() {
                        "Candidate updated"
                    } else {
                        "Candidate added"
                    });
                    form.update(|f| f.submit_succeeded());
                    resume.set(None);
                    panel.load();
                }
                Err(err) => {
                    log::error!("candidate save failed: {}", err);
                    toasts.error(err.user_message());
                    form.update(|f| f.submit_failed());
                }
            }
        });
    });

    let on_cancel = Callback::new(move |_| {
        resume.set(None);
        form.update(|f| f.cancel());
    });

    let title = Signal::derive(move || {
        if form.with(|f| f.is_edit()) {
            "Edit candidate".to_string()
        } else {
            "New candidate".to_string()
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
                    <label for="cand-name">{"Name"}</label>
                    <input
                        type="text"
                        id="cand-name"
                        prop:value=move || form.with(|f| f.draft.name.clone())
                        on:input=move |ev| form.update(|f| f.draft.name = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("name"))) />
                </div>
                <div class="form-group">
                    <label for="cand-position">{"Position"}</label>
                    <input
                        type="text"
                        id="cand-position"
                        prop:value=move || form.with(|f| f.draft.position.clone())
                        on:input=move |ev| form.update(|f| f.draft.position = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("position"))) />
                </div>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="cand-email">{"Email"}</label>
                    <input
                        type="email"
                        id="cand-email"
                        prop:value=move || form.with(|f| f.draft.email.clone())
                        on:input=move |ev| form.update(|f| f.draft.email = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("email"))) />
                </div>
                <div class="form-group">
                    <label for="cand-phone">{"Phone"}</label>
                    <input
                        type="tel"
                        id="cand-phone"
                        placeholder="10 digits"
                        prop:value=move || form.with(|f| f.draft.phone.clone())
                        on:input=move |ev| form.update(|f| f.draft.phone = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("phone"))) />
                </div>
            </div>

            <div class="form-group">
                <label for="cand-experience">{"Experience"}</label>
                <input
                    type="text"
                    id="cand-experience"
                    placeholder="e.g. 4 years"
                    prop:value=move || form.with(|f| f.draft.experience.clone())
                    on:input=move |ev| form.update(|f| f.draft.experience = event_target_value(&ev))
                />
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="cand-stage">{"Stage"}</label>
                    <select
                        id="cand-stage"
                        on:change=move |ev| {
                            let stage = match event_target_value(&ev).as_str() {
                                "shortlisted" => Stage::Shortlisted,
                                "interview" => Stage::Interview,
                                "complete" => Stage::Complete,
                                _ => Stage::Applied,
                            };
                            form.update(|f| f.draft.stage = stage);
                        }
                    >
                        {Stage::ALL
                            .into_iter()
                            .map(|stage| {
                                view! {
                                    <option
                                        value=stage_value(stage)
                                        selected=move || form.with(|f| f.draft.stage == stage)
                                    >
                                        {stage.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <div class="form-group">
                    <label for="cand-interview">{"Interview date"}</label>
                    <input
                        type="datetime-local"
                        id="cand-interview"
                        prop:value=move || form.with(|f| f.draft.interview_at.clone())
                        on:input=move |ev| form.update(|f| f.draft.interview_at = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("interviewAt"))) />
                </div>
            </div>

            <FileDrop
                allowed=RESUME_MIME_TYPES
                picked=resume
                existing=Signal::derive(move || form.with(|f| f.draft.existing_resume_ref.clone()))
                label="Resume (PDF or Word)"
            />
        </ModalForm>
    }
}
