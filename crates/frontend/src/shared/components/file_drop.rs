use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen_futures::JsFuture;
use web_sys::File;

use contracts::validate::validate_upload;

use crate::shared::icons::icon;
use crate::shared::toast::use_toasts;

/// An accepted attachment, read into memory at selection time.
///
/// Holding the bytes instead of the `File` handle keeps the value `Send`,
/// so it can live in ordinary signals and be rebuilt into a blob when the
/// multipart body is assembled.
#[derive(Debug, Clone, PartialEq)]
pub struct PickedFile {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl PickedFile {
    pub fn to_blob(&self) -> Result<web_sys::Blob, String> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(self.bytes.as_slice()).buffer());
        let props = web_sys::BlobPropertyBag::new();
        props.set_type(&self.mime);
        web_sys::Blob::new_with_buffer_source_sequence_and_options(&parts, &props)
            .map_err(|e| format!("{:?}", e))
    }
}

/// Append either the newly picked file or the previously stored reference
/// to a multipart body. Sending the old reference string when no new file
/// was chosen keeps the backend from nulling the attachment.
pub fn append_attachment(
    fd: &web_sys::FormData,
    field: &str,
    ref_field: &str,
    picked: Option<&PickedFile>,
    existing_ref: Option<&str>,
) -> Result<(), String> {
    match picked {
        Some(file) => {
            let blob = file.to_blob()?;
            fd.append_with_blob_and_filename(field, &blob, &file.name)
                .map_err(|e| format!("{:?}", e))
        }
        None => match existing_ref {
            Some(existing) => fd
                .append_with_str(ref_field, existing)
                .map_err(|e| format!("{:?}", e)),
            None => Ok(()),
        },
    }
}

/// Attachment picker with a drag-and-drop target.
///
/// Picker and drop both funnel through one accept routine, so the two
/// entry points cannot diverge in what they let into the draft. A rejected
/// file (wrong MIME or over the size ceiling) produces a toast and leaves
/// the picked slot untouched.
#[component]
pub fn FileDrop(
    /// Whitelisted MIME types for this form.
    allowed: &'static [&'static str],
    /// Accepted file the parent ships in the multipart body.
    picked: RwSignal<Option<PickedFile>>,
    /// Reference of the attachment already stored on the server, if any.
    #[prop(into)]
    existing: Signal<Option<String>>,
    #[prop(optional, into)] label: String,
) -> impl IntoView {
    let toasts = use_toasts();
    let label = if label.is_empty() {
        "Attachment".to_string()
    } else {
        label
    };
    let input_id = format!("file-drop-{}", uuid::Uuid::new_v4());

    let accept_file = move |file: File| {
        let size = file.size() as u64;
        if let Err(err) = validate_upload(&file.type_(), size, allowed) {
            toasts.error(err.to_string());
            return;
        }
        // Read the content now; only Send data crosses into signals.
        spawn_local(async move {
            match JsFuture::from(file.array_buffer()).await {
                Ok(buffer) => {
                    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();
                    picked.set(Some(PickedFile {
                        name: file.name(),
                        mime: file.type_(),
                        bytes,
                    }));
                }
                Err(err) => {
                    log::error!("file read failed: {:?}", err);
                    toasts.error("Could not read the selected file");
                }
            }
        });
    };

    let on_input = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|list| list.get(0)) {
            accept_file(file);
        }
        // Allow re-selecting the same file after a rejection.
        input.set_value("");
    };

    let on_drop = move |ev: web_sys::DragEvent| {
        ev.prevent_default();
        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|list| list.get(0))
        {
            accept_file(file);
        }
    };

    let shown_name = move || {
        picked
            .get()
            .map(|f| f.name)
            .or_else(|| existing.get())
            .unwrap_or_else(|| "No file chosen".to_string())
    };

    view! {
        <div class="form-group">
            <label>{label}</label>
            <div
                class="file-drop"
                on:dragover=move |ev: web_sys::DragEvent| ev.prevent_default()
                on:drop=on_drop
            >
                {icon("upload")}
                <span class="file-drop__name">{shown_name}</span>
                <label class="button button--secondary" for=input_id.clone()>
                    {"Choose file"}
                </label>
                <input
                    id=input_id
                    type="file"
                    style="display: none;"
                    on:change=on_input
                />
                <span class="file-drop__hint">{"or drag a file here (max 5MB)"}</span>
            </div>
        </div>
    }
}
