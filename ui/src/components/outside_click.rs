//! Outside-interaction notifier.
//!
//! The dropdown subscribes to the document-level pointer stream to find out
//! about clicks landing outside its root. The subscription lives exactly as
//! long as the component: registered at setup, removed in `on_cleanup`.

use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Calls `handler` for every `mousedown` whose target is outside `root`.
pub fn on_outside_click(root: NodeRef<leptos::html::Div>, handler: impl Fn() + 'static) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::error!("outside-click listener requires a browser document");
        return;
    };

    let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |event: web_sys::Event| {
        let Some(root) = root.get_untracked() else {
            return;
        };
        let inside = event
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Node>().ok())
            .map(|node| root.contains(Some(&node)))
            .unwrap_or(false);
        if !inside {
            handler();
        }
    });

    if let Err(error) =
        document.add_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref())
    {
        log::error!("failed to register outside-click listener: {error:?}");
        return;
    }

    on_cleanup(move || {
        let _ = document
            .remove_event_listener_with_callback("mousedown", listener.as_ref().unchecked_ref());
    });
}
