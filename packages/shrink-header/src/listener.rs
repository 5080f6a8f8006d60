use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::config::ShrinkConfig;
use crate::controller::ScrollStateController;
use crate::tree::PresentationTree;

/// Callback invoked with the document's vertical scroll offset
pub type ScrollCallback = Box<dyn FnMut(f64)>;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global `window` object")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("failed to register scroll listener: {0}")]
    Listener(String),
}

/// An embedder which delivers scroll notifications.
///
/// The host owns every registration. Notifications are delivered serially on the
/// host's event queue, each one running to completion before the next.
pub trait ScrollHost {
    /// The document's current vertical scroll offset, in logical pixels
    fn scroll_offset(&self) -> f64;

    /// Register `callback` to be run with the current offset whenever it changes.
    /// The listener stays registered until the returned subscription is dropped.
    fn register_scroll_listener(
        &mut self,
        callback: ScrollCallback,
    ) -> Result<ScrollSubscription, HostError>;
}

/// A registered scroll listener. Dropping it unregisters the listener.
#[must_use = "dropping a ScrollSubscription unregisters the listener"]
pub struct ScrollSubscription {
    unregister: Option<Box<dyn FnOnce()>>,
}

impl ScrollSubscription {
    pub fn new(unregister: impl FnOnce() + 'static) -> Self {
        Self {
            unregister: Some(Box::new(unregister)),
        }
    }

    /// Keep the listener registered for the rest of the host's lifetime.
    ///
    /// The unregister hook often owns the listener itself (e.g. a JS closure),
    /// so it is forgotten rather than dropped.
    pub fn leak(mut self) {
        if let Some(unregister) = self.unregister.take() {
            std::mem::forget(unregister);
        }
    }
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(unregister) = self.unregister.take() {
            unregister();
        }
    }
}

impl fmt::Debug for ScrollSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSubscription")
            .field("active", &self.unregister.is_some())
            .finish()
    }
}

/// Drive `tree`'s header from `host`'s scroll notifications
pub fn attach<H, T>(
    host: &mut H,
    tree: Rc<RefCell<T>>,
    config: ShrinkConfig,
) -> Result<ScrollSubscription, HostError>
where
    H: ScrollHost + ?Sized,
    T: PresentationTree + 'static,
{
    let controller = ScrollStateController::new();

    if config.sync_on_attach {
        controller.on_scroll_signal(&mut *tree.borrow_mut(), host.scroll_offset());
    }

    host.register_scroll_listener(Box::new(move |offset| {
        controller.on_scroll_signal(&mut *tree.borrow_mut(), offset);
    }))
}
