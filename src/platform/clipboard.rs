//! Share sheet and clipboard delivery
//!
//! Tries `navigator.share`, then the async clipboard, then a hidden
//! textarea with `execCommand("copy")`.

use js_sys::{Function, Object, Promise, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlDocument, HtmlTextAreaElement};

use crate::share::{SHARE_TITLE, ShareOutcome};

/// Hand the message to the best mechanism the browser offers
pub async fn deliver(message: &str) -> ShareOutcome {
    match share_sheet(message).await {
        Ok(()) => return ShareOutcome::Shared,
        Err(e) => log::debug!("Share sheet unavailable: {:?}", e),
    }

    match clipboard_write(message).await {
        Ok(()) => return ShareOutcome::Copied,
        Err(e) => log::debug!("Clipboard API failed: {:?}", e),
    }

    match fallback_copy(message) {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            log::warn!("Could not copy progress: {:?}", e);
            ShareOutcome::Failed
        }
    }
}

fn navigator() -> Result<web_sys::Navigator, JsValue> {
    Ok(web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .navigator())
}

/// Call `target[method](arg)` and await the returned promise
async fn call_async(target: &JsValue, method: &str, arg: &JsValue) -> Result<(), JsValue> {
    let func: Function = Reflect::get(target, &method.into())?.dyn_into()?;
    let promise: Promise = func.call1(target, arg)?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}

async fn share_sheet(message: &str) -> Result<(), JsValue> {
    let navigator = navigator()?;
    let data = Object::new();
    Reflect::set(&data, &"title".into(), &SHARE_TITLE.into())?;
    Reflect::set(&data, &"text".into(), &message.into())?;
    call_async(&navigator, "share", &data).await
}

async fn clipboard_write(message: &str) -> Result<(), JsValue> {
    let navigator = navigator()?;
    let clipboard = Reflect::get(&navigator, &"clipboard".into())?;
    if clipboard.is_undefined() {
        return Err(JsValue::from_str("clipboard API missing"));
    }
    call_async(&clipboard, "writeText", &message.into()).await
}

fn fallback_copy(message: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

    let textarea: HtmlTextAreaElement = document.create_element("textarea")?.dyn_into()?;
    textarea.set_value(message);
    let style = textarea.style();
    style.set_property("position", "fixed")?;
    style.set_property("opacity", "0")?;
    body.append_child(&textarea)?;
    textarea.select();

    let copied = document
        .dyn_ref::<HtmlDocument>()
        .ok_or_else(|| JsValue::from_str("not an HTML document"))
        .and_then(|html| html.exec_command("copy"));
    let _ = body.remove_child(&textarea);

    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(JsValue::from_str("copy command rejected")),
        Err(e) => Err(e),
    }
}
