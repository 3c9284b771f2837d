//! Event listeners tied to Rust ownership
//!
//! A `Closure` passed to `addEventListener` must outlive the listener. Rather
//! than `Closure::forget()`, which leaks the closure and leaves the listener
//! attached forever, [`EventListener`] owns the closure and removes the
//! listener when dropped:
//!
//! ```ignore
//! let listener = EventListener::new(&button, "click", move |_| { /* ... */ });
//!
//! // Listener is removed here
//! drop(listener);
//! ```
//!
//! The page keeps every listener it registers for its whole lifetime.

use wasm_bindgen_x::prelude::*;

pub struct EventListener {
    target: web_sys_x::EventTarget,
    event_name: &'static str,
    capture: bool,
    callback: Closure<dyn FnMut(web_sys_x::Event)>,
}

impl EventListener {
    /// Attaches a bubbling-phase listener to `target`.
    pub fn new(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(web_sys_x::Event) + 'static,
    ) -> Self {
        Self::attach(target, event_name, false, callback)
    }

    /// Attaches a capture-phase listener, which also sees events that do not
    /// bubble, such as `focus`.
    pub fn capture(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        callback: impl FnMut(web_sys_x::Event) + 'static,
    ) -> Self {
        Self::attach(target, event_name, true, callback)
    }

    fn attach(
        target: &web_sys_x::EventTarget,
        event_name: &'static str,
        capture: bool,
        callback: impl FnMut(web_sys_x::Event) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(web_sys_x::Event)> = Closure::wrap(Box::new(callback));

        target
            .add_event_listener_with_callback_and_bool(
                event_name,
                callback.as_ref().unchecked_ref(),
                capture,
            )
            .ok();

        Self {
            target: target.clone(),
            event_name,
            capture,
            callback,
        }
    }
}

impl Drop for EventListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback_and_bool(
            self.event_name,
            self.callback.as_ref().unchecked_ref(),
            self.capture,
        );
    }
}
