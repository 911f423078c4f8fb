//! Small utilities shared by the document workflow's update and view code.
//!
//! - **User feedback**: transient toast notifications for completed uploads
//!   and saves.
//! - **Formatting**: human-readable file sizes and balances.
//! - **Files**: turning the picker's `web_sys::File` into an upload selection
//!   and resetting the hidden picker once a file has been uploaded.

use num_format::{Locale, ToFormattedString};
use serde::Serialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlInputElement};
use yew::NodeRef;

use common::workflow::UploadSelection;

/// Displays a temporary notification at the bottom of the screen. The toast
/// removes itself after three seconds.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };
    toast.set_text_content(Some(message));
    let toast: HtmlElement = toast.unchecked_into();
    let style = toast.style();
    for (property, value) in [
        ("position", "fixed"),
        ("bottom", "20px"),
        ("left", "50%"),
        ("transform", "translateX(-50%)"),
        ("background", "rgba(0, 0, 0, 0.8)"),
        ("color", "#fff"),
        ("padding", "10px 20px"),
        ("border-radius", "4px"),
        ("z-index", "10000"),
        ("font-family", "Roboto, Arial, sans-serif"),
    ] {
        style.set_property(property, value).ok();
    }

    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            toast.remove();
        });
    }
}

/// Builds the upload selection for a file chosen in the picker.
///
/// Called from `update.rs` when the hidden `<input type="file">` fires
/// `change`. The name and size are read through `gloo_file` so the view can
/// render the picker label without touching the DOM again.
///
/// # Arguments
/// * `file` - The first entry of the input's `FileList`.
///
/// # Returns
/// An `UploadSelection` holding the file handle, its name and its size in bytes.
pub fn selection_from_file(file: web_sys::File) -> UploadSelection<web_sys::File> {
    let meta = gloo_file::File::from(file.clone());
    UploadSelection {
        name: meta.name(),
        size: meta.size(),
        file,
    }
}

/// Clears the value of the hidden file input.
///
/// Run after a successful upload. The workflow keeps its selection, so the
/// file can be uploaded again with the button; clearing the input makes a
/// later pick of the same file fire `change` and start a new document.
///
/// # Arguments
/// * `input_ref` - Reference attached to the `<input type="file">` in `view.rs`.
pub fn reset_file_input(input_ref: &NodeRef) {
    if let Some(input) = input_ref.cast::<HtmlInputElement>() {
        input.set_value("");
    }
}

/// `12345` → `"12.1 KB (12,345 bytes)"`.
pub fn format_file_size(bytes: u64) -> String {
    let exact = bytes.to_formatted_string(&Locale::en);
    match bytes {
        0..=1023 => format!("{} bytes", exact),
        1024..=1_048_575 => format!("{:.1} KB ({} bytes)", bytes as f64 / 1024.0, exact),
        _ => format!("{:.1} MB ({} bytes)", bytes as f64 / 1_048_576.0, exact),
    }
}

/// Formats a balance for the extracted-data summary.
///
/// The value is rounded to cents before grouping, so `1499.999` renders as
/// `1,500.00`.
///
/// # Arguments
/// * `amount` - The `available_balance` read from a financial document.
///
/// # Returns
/// The amount with `en` thousands separators and two decimals, e.g. `1,500.25`.
pub fn format_amount(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 { "-" } else { "" };
    format!(
        "{}{}.{:02}",
        sign,
        (cents / 100).to_formatted_string(&Locale::en),
        cents % 100
    )
}

/// Serializes a value for the raw JSON preview and the record dialog.
///
/// Object keys keep the order the server sent them in.
///
/// # Arguments
/// * `value` - Any serializable value, usually the extracted payload or a
///   `DocumentRecord`.
///
/// # Returns
/// Indented JSON, or a short placeholder naming the serializer error.
pub fn pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|err| format!("<unprintable: {}>", err))
}
