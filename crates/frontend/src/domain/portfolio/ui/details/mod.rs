use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FormData;

use contracts::domain::portfolio::{PortfolioDraft, PortfolioItem};
use contracts::validate::IMAGE_MIME_TYPES;

use crate::shared::api_client::ApiError;
use crate::shared::components::file_drop::{append_attachment, FileDrop, PickedFile};
use crate::shared::components::modal_form::{FieldError, ModalForm};
use crate::shared::resource::{FormState, Panel};
use crate::shared::toast::use_toasts;

fn build_form_data(draft: &PortfolioDraft, image: Option<&PickedFile>) -> Result<FormData, String> {
    let fd = FormData::new().map_err(|e| format!("{:?}", e))?;
    let err = |e: wasm_bindgen::JsValue| format!("{:?}", e);

    fd.append_with_str("title", draft.title.trim()).map_err(err)?;
    fd.append_with_str("category", draft.category.trim()).map_err(err)?;
    fd.append_with_str("description", draft.description.trim()).map_err(err)?;
    if !draft.link.trim().is_empty() {
        fd.append_with_str("link", draft.link.trim()).map_err(err)?;
    }
    append_attachment(&fd, "image", "imageRef", image, draft.existing_image_ref.as_deref())?;
    Ok(fd)
}

#[component]
pub fn PortfolioDetails(
    form: RwSignal<FormState<PortfolioDraft>>,
    panel: Panel<PortfolioItem>,
) -> impl IntoView {
    let toasts = use_toasts();
    let image = RwSignal::new(Option::<PickedFile>::None);

    let on_save = Callback::new(move |_| {
        let allowed = form
            .try_update(|f| f.begin_submit(|d| d.validate()))
            .unwrap_or(false);
        if !allowed {
            return;
        }
        let draft = form.with_untracked(|f| f.draft.clone());
        let editing = form.with_untracked(|f| f.editing_id().map(str::to_string));
        let picked = image.get_untracked();

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
                Some(id) => client.update_multipart::<PortfolioItem>(id, fd).await.map(|_| ()),
                None => client.create_multipart::<PortfolioItem>(fd).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    toasts.success(if editing.is_some() {
                        "Portfolio item updated"
                    } else {
                        "Portfolio item created"
                    });
                    form.update(|f| f.submit_succeeded());
                    image.set(None);
                    panel.load();
                }
                Err(err) => {
                    log::error!("portfolio save failed: {}", err);
                    toasts.error(err.user_message());
                    form.update(|f| f.submit_failed());
                }
            }
        });
    });

    let on_cancel = Callback::new(move |_| {
        image.set(None);
        form.update(|f| f.cancel());
    });

    let title = Signal::derive(move || {
        if form.with(|f| f.is_edit()) {
            "Edit portfolio item".to_string()
        } else {
            "New portfolio item".to_string()
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
                    <label for="pf-title">{"Title"}</label>
                    <input
                        type="text"
                        id="pf-title"
                        prop:value=move || form.with(|f| f.draft.title.clone())
                        on:input=move |ev| form.update(|f| f.draft.title = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("title"))) />
                </div>
                <div class="form-group">
                    <label for="pf-category">{"Category"}</label>
                    <input
                        type="text"
                        id="pf-category"
                        placeholder="Web, Mobile, Branding..."
                        prop:value=move || form.with(|f| f.draft.category.clone())
                        on:input=move |ev| form.update(|f| f.draft.category = event_target_value(&ev))
                    />
                    <FieldError error=Signal::derive(move || form.with(|f| f.error_for("category"))) />
                </div>
            </div>

            <div class="form-group">
                <label for="pf-description">{"Description"}</label>
                <textarea
                    id="pf-description"
                    rows="3"
                    prop:value=move || form.with(|f| f.draft.description.clone())
                    on:input=move |ev| form.update(|f| f.draft.description = event_target_value(&ev))
                />
                <FieldError error=Signal::derive(move || form.with(|f| f.error_for("description"))) />
            </div>

            <div class="form-group">
                <label for="pf-link">{"Link"}</label>
                <input
                    type="url"
                    id="pf-link"
                    placeholder="https://..."
                    prop:value=move || form.with(|f| f.draft.link.clone())
                    on:input=move |ev| form.update(|f| f.draft.link = event_target_value(&ev))
                />
                <FieldError error=Signal::derive(move || form.with(|f| f.error_for("link"))) />
            </div>

            <FileDrop
                allowed=IMAGE_MIME_TYPES
                picked=image
                existing=Signal::derive(move || form.with(|f| f.draft.existing_image_ref.clone()))
                label="Cover image"
            />
        </ModalForm>
    }
}
