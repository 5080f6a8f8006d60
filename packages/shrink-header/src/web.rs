//! Browser host backed by `web-sys`

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Window};

use crate::listener::{HostError, ScrollCallback, ScrollHost, ScrollSubscription};
use crate::tree::PresentationTree;

fn js_error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// The live page, as seen through `document`
#[derive(Clone, Debug)]
pub struct WebDocument {
    document: Document,
}

impl WebDocument {
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// The document of the global `window`
    pub fn from_window() -> Result<Self, HostError> {
        let window = web_sys::window().ok_or(HostError::NoWindow)?;
        let document = window.document().ok_or(HostError::NoDocument)?;
        Ok(Self::new(document))
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl PresentationTree for WebDocument {
    type ElementId = Element;

    fn query_selector(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(element) => element,
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Invalid selector {selector:?}: {}", js_error_message(&_err));
                None
            }
        }
    }

    fn add_class(&mut self, element: Element, class: &str) {
        if let Err(_err) = element.class_list().add_1(class) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to add class {class:?}: {}", js_error_message(&_err));
        }
    }

    fn remove_class(&mut self, element: Element, class: &str) {
        if let Err(_err) = element.class_list().remove_1(class) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to remove class {class:?}: {}", js_error_message(&_err));
        }
    }

    fn set_body_padding_top(&mut self, px: f64) {
        // `document.body` is null while the parser is still in <head>
        let Some(body) = self.document.body() else {
            #[cfg(feature = "tracing")]
            tracing::trace!("No <body> yet, skipping padding-top");
            return;
        };
        if let Err(_err) = body.style().set_property("padding-top", &format!("{px}px")) {
            #[cfg(feature = "tracing")]
            tracing::warn!("Failed to set padding-top: {}", js_error_message(&_err));
        }
    }
}

/// Delivers the global `window`'s scroll events
#[derive(Clone, Debug)]
pub struct WebScrollHost {
    window: Window,
}

impl WebScrollHost {
    pub fn new(window: Window) -> Self {
        Self { window }
    }

    pub fn from_window() -> Result<Self, HostError> {
        web_sys::window().map(Self::new).ok_or(HostError::NoWindow)
    }
}

fn read_scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or_else(|_err| {
        #[cfg(feature = "tracing")]
        tracing::warn!("Failed to read scrollY: {}", js_error_message(&_err));
        0.0
    })
}

impl ScrollHost for WebScrollHost {
    fn scroll_offset(&self) -> f64 {
        read_scroll_y(&self.window)
    }

    fn register_scroll_listener(
        &mut self,
        mut callback: ScrollCallback,
    ) -> Result<ScrollSubscription, HostError> {
        let window = self.window.clone();
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            callback(read_scroll_y(&window));
        });

        self.window
            .add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref())
            .map_err(|err| HostError::Listener(js_error_message(&err)))?;

        let window = self.window.clone();
        Ok(ScrollSubscription::new(move || {
            let removed = window
                .remove_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
            if let Err(_err) = removed {
                #[cfg(feature = "tracing")]
                tracing::warn!("Failed to remove scroll listener: {}", js_error_message(&_err));
            }
            drop(closure);
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ShrinkConfig, attach};
    use std::cell::RefCell;
    use std::rc::Rc;

    // Only checks that the browser types fit `attach`; running them needs a browser.
    fn attach_to_window(
        host: &mut WebScrollHost,
        document: WebDocument,
    ) -> Result<ScrollSubscription, HostError> {
        attach(host, Rc::new(RefCell::new(document)), ShrinkConfig::default())
    }

    fn assert_tree<T: PresentationTree<ElementId = Element> + 'static>() {}
    fn assert_host<H: ScrollHost + ?Sized>() {}

    #[test]
    fn browser_types_satisfy_host_bounds() {
        assert_tree::<WebDocument>();
        assert_host::<WebScrollHost>();
        let _ = attach_to_window;
    }

    #[test]
    fn host_error_messages() {
        assert_eq!(HostError::NoWindow.to_string(), "no global `window` object");
        assert_eq!(
            HostError::Listener("TypeError".into()).to_string(),
            "failed to register scroll listener: TypeError"
        );
    }
}
