//! Client-side file outputs: CSV downloads and printable documents.
//!
//! Both are generated entirely in the browser and handed over as a blob
//! download or a print window; no server round trip is involved.

use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Types that can be rendered as CSV rows.
pub trait CsvExportable {
    fn headers() -> Vec<&'static str>;
    fn to_csv_row(&self) -> Vec<String>;
}

/// Render a CSV document. Separated from the download so it can be tested.
pub fn render_csv<T: CsvExportable>(data: &[T]) -> String {
    // UTF-8 BOM keeps Excel from mangling non-ASCII names.
    let mut out = String::from('\u{FEFF}');
    out.push_str(&T::headers().join(";"));
    out.push('\n');
    for item in data {
        let row: Vec<String> = item.to_csv_row().iter().map(|c| escape_csv_cell(c)).collect();
        out.push_str(&row.join(";"));
        out.push('\n');
    }
    out
}

/// Export a list as a CSV file and trigger a browser download.
pub fn export_csv<T: CsvExportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let blob = create_blob(&render_csv(data), "text/csv;charset=utf-8;")?;
    download_blob(&blob, filename)
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))
}

/// Render a document body (salary slip, experience letter) into a new
/// window and open the browser print dialog; saving as PDF is left to the
/// browser.
pub fn print_document(title: &str, body_html: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let popup = window
        .open_with_url_and_target("", "_blank")
        .map_err(|e| format!("Failed to open window: {:?}", e))?
        .ok_or("Popup was blocked")?;

    let document = popup.document().ok_or("No popup document")?;
    document.set_title(title);
    let body = document.body().ok_or("No popup body")?;
    body.set_inner_html(&format!(
        "<style>body{{font-family:Georgia,serif;margin:48px;color:#111}}\
         h1{{font-size:20px}}table{{border-collapse:collapse;width:100%}}\
         td,th{{border:1px solid #888;padding:6px 10px;text-align:left}}</style>{}",
        body_html
    ));
    popup.print().map_err(|e| format!("Failed to print: {:?}", e))
}

/// Minimal HTML escaping for values interpolated into printed documents.
pub fn escape_html(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, &'static str);

    impl CsvExportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Name", "Amount"]
        }
        fn to_csv_row(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn csv_has_bom_header_and_rows() {
        let csv = render_csv(&[Row("Asha", "55000"), Row("Ravi", "48000")]);
        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.trim_start_matches('\u{FEFF}').lines().collect();
        assert_eq!(lines, vec!["Name;Amount", "Asha;55000", "Ravi;48000"]);
    }

    #[test]
    fn cells_with_separators_are_quoted() {
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("plain"), "plain");
    }

    #[test]
    fn html_escaping() {
        assert_eq!(escape_html("<b>&</b>"), "&lt;b&gt;&amp;&lt;/b&gt;");
    }
}
