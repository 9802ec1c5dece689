//! Loader and error banner helpers for the setup phase.

use crate::constants::{ERROR_MESSAGE_ID, LOADER_ID, LOADING_MESSAGE_ID};
use web_sys as web;

/// Update the loading message shown while the webcam and detector spin up.
pub fn set_loading_message(document: &web::Document, message: &str) {
    if let Some(el) = document.get_element_by_id(LOADING_MESSAGE_ID) {
        el.set_text_content(Some(message));
    }
}

#[inline]
pub fn hide_loader(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADER_ID) {
        _ = el.set_attribute("style", "display:none");
    }
}

/// Hide the loader and surface a setup failure to the user.
pub fn show_error(document: &web::Document, message: &str) {
    hide_loader(document);
    if let Some(el) = document.get_element_by_id(ERROR_MESSAGE_ID) {
        el.set_text_content(Some(message));
        _ = el.set_attribute("style", "display:block");
    }
}
