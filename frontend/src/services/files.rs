//! File picker plumbing.
//!
//! The chosen file is only described (name + size). Its content is never
//! read.

use filechain::FileSelection;
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlInputElement};

use crate::{AppError, AppResult};

/// Describe the first file of a `<input type="file">` change event.
///
/// The input is cleared afterwards so choosing the same file again still
/// fires a change event.
pub fn read_selection(ev: &Event) -> AppResult<FileSelection> {
    let input: HtmlInputElement = event_target(ev);
    let files = input
        .files()
        .ok_or_else(|| AppError::FileInput("input has no file list".into()))?;

    let selection = match files.get(0) {
        Some(file) => FileSelection::named(file.name(), file.size() as u64),
        None => FileSelection::empty(),
    };
    input.set_value("");
    Ok(selection)
}

/// Same as [`read_selection`], logging failures and treating them as a
/// cancelled picker.
pub fn selection_or_empty(ev: &Event) -> FileSelection {
    read_selection(ev).unwrap_or_else(|e| {
        log::warn!("{}", e);
        FileSelection::empty()
    })
}

/// Open the file picker behind a hidden `<input type="file">`.
pub fn click_file_input(id: &str) -> AppResult<()> {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
        .ok_or_else(|| AppError::Dom(format!("#{} not found", id)))?;
    let input = input
        .dyn_into::<HtmlInputElement>()
        .map_err(|_| AppError::Dom(format!("#{} is not an input", id)))?;
    input.click();
    Ok(())
}
