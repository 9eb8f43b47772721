//! Toast notifications

use std::cell::Cell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::consts::TOAST_DURATION_MS;

thread_local! {
    // Only the newest toast's timer may hide it
    static GENERATION: Cell<u32> = const { Cell::new(0) };
}

/// Show `message` for a few seconds
pub fn show_toast(message: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(toast) = window
        .document()
        .and_then(|d| d.get_element_by_id("toast"))
    else {
        log::info!("Toast: {}", message);
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("show");

    let generation = GENERATION.with(|g| {
        g.set(g.get().wrapping_add(1));
        g.get()
    });
    let closure = Closure::once(move || {
        if GENERATION.with(|g| g.get()) == generation {
            toast.set_class_name("");
        }
    });
    let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        TOAST_DURATION_MS,
    );
    closure.forget();
}
