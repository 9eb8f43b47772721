//! Window-level helpers

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

/// Native confirm dialog; a missing window or a blocked dialog counts as "no"
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// `prefers-color-scheme: dark`
pub fn prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// RNG seed from the wall clock
pub fn time_seed() -> u64 {
    js_sys::Date::now() as u64
}

/// Register the offline cache worker once the page has loaded
pub fn register_service_worker(script: &'static str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let navigator = window.navigator();
    if !Reflect::has(&navigator, &"serviceWorker".into()).unwrap_or(false) {
        log::info!("Service workers not supported");
        return;
    }

    let closure = Closure::<dyn FnMut()>::new(move || {
        if let Err(e) = register(script) {
            log::warn!("Service Worker registration failed: {:?}", e);
        }
    });
    let _ = window.add_event_listener_with_callback("load", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn register(script: &str) -> Result<(), JsValue> {
    let navigator = web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .navigator();
    let container = Reflect::get(&navigator, &"serviceWorker".into())?;
    let register: Function = Reflect::get(&container, &"register".into())?.dyn_into()?;

    // The worker imports the wasm bundle as an ES module
    let options = Object::new();
    Reflect::set(&options, &"type".into(), &"module".into())?;

    let promise: js_sys::Promise = register
        .call2(&container, &JsValue::from_str(script), &options)?
        .dyn_into()?;

    wasm_bindgen_futures::spawn_local(async move {
        match wasm_bindgen_futures::JsFuture::from(promise).await {
            Ok(_) => log::info!("Service Worker registered"),
            Err(e) => log::warn!("Service Worker registration failed: {:?}", e),
        }
    });
    Ok(())
}
