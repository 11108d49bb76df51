use std::time::Duration;

use js_sys::Reflect;
use leptos::prelude::set_timeout;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::HtmlScriptElement;

use crate::{
    config::{AppConfig, SDK_READY_CALLBACK},
    error::MapError,
    maps::bindings::sdk_present,
};

pub const SCRIPT_ID: &str = "google-maps-sdk";
pub const LOAD_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStep {
    Ready,
    AwaitExisting,
    Inject,
}

/// Decides how to acquire the SDK. The script tag doubles as the guard, so
/// remounts and re-renders never inject a second copy.
pub fn next_step(sdk_present: bool, script_present: bool) -> LoadStep {
    match (sdk_present, script_present) {
        (true, _) => LoadStep::Ready,
        (false, true) => LoadStep::AwaitExisting,
        (false, false) => LoadStep::Inject,
    }
}

/// Maps "is the whole SDK defined?" to a load outcome. Every path that can
/// observe readiness goes through here, so an earlier failure never
/// prevents a later success from being reported.
pub fn settle(sdk_present: bool, pending_reason: &str) -> Result<(), MapError> {
    if sdk_present {
        Ok(())
    } else {
        Err(MapError::ScriptLoad(pending_reason.to_string()))
    }
}

/// Loads the SDK once and reports the outcome through `on_done`.
///
/// `on_done` may run more than once: an error or timeout can be followed
/// by a late successful load.
pub fn load_sdk(config: &AppConfig, on_done: impl Fn(Result<(), MapError>) + Clone + 'static) {
    let Some(window) = web_sys::window() else {
        on_done(Err(MapError::SdkUnavailable));
        return;
    };
    let Some(document) = window.document() else {
        on_done(Err(MapError::SdkUnavailable));
        return;
    };

    // Registered on every call so a remount waiting on an existing script
    // still hears about readiness.
    let on_ready_done = on_done.clone();
    let on_ready: Closure<dyn FnMut()> = Closure::new(move || {
        on_ready_done(settle(
            sdk_present(),
            "SDK callback ran before libraries were defined",
        ));
    });
    if let Err(e) = Reflect::set(
        &window,
        &JsValue::from_str(SDK_READY_CALLBACK),
        on_ready.as_ref(),
    ) {
        leptos::logging::warn!("Failed to register {}: {:?}", SDK_READY_CALLBACK, e);
    }
    on_ready.forget();

    let existing = document.get_element_by_id(SCRIPT_ID);
    let script: HtmlScriptElement = match next_step(sdk_present(), existing.is_some()) {
        LoadStep::Ready => {
            on_done(Ok(()));
            return;
        }
        LoadStep::AwaitExisting => match existing.and_then(|el| el.dyn_into().ok()) {
            Some(script) => script,
            None => {
                on_done(Err(MapError::ScriptLoad(format!(
                    "#{} is not a script element",
                    SCRIPT_ID
                ))));
                return;
            }
        },
        LoadStep::Inject => match inject_script(&document, config) {
            Ok(script) => script,
            Err(e) => {
                on_done(Err(e));
                return;
            }
        },
    };

    let on_error_done = on_done.clone();
    let on_error = Closure::once_into_js(move || {
        on_error_done(Err(MapError::ScriptLoad("network error".to_string())));
    });
    if let Err(e) = script.add_event_listener_with_callback("error", on_error.unchecked_ref()) {
        leptos::logging::warn!("Failed to listen for SDK script errors: {:?}", e);
    }

    set_timeout(
        move || {
            let outcome = settle(sdk_present(), "timed out");
            if outcome.is_err() {
                leptos::logging::warn!(
                    "Mapping SDK not ready after {}s",
                    LOAD_TIMEOUT.as_secs()
                );
            }
            on_done(outcome);
        },
        LOAD_TIMEOUT,
    );
}

fn inject_script(
    document: &web_sys::Document,
    config: &AppConfig,
) -> Result<HtmlScriptElement, MapError> {
    let script: HtmlScriptElement = document
        .create_element("script")
        .map_err(|e| MapError::ScriptLoad(format!("{:?}", e)))?
        .dyn_into()
        .map_err(|_| MapError::ScriptLoad("created element is not a script".to_string()))?;
    script.set_id(SCRIPT_ID);
    script.set_src(&config.sdk_url());
    script.set_async(true);

    let head = document
        .head()
        .ok_or_else(|| MapError::ScriptLoad("document has no <head>".to_string()))?;
    head.append_child(&script)
        .map_err(|e| MapError::ScriptLoad(format!("{:?}", e)))?;

    leptos::logging::log!("Injected mapping SDK script");
    Ok(script)
}
