use crate::state::{HEADER_SELECTOR, HeaderVisualState, SHRUNKEN_CLASS};
use crate::tree::PresentationTree;

/// Maps scroll signals onto the header's class list and the body's top padding.
///
/// Holds no state of its own: every signal re-derives the header state from the
/// offset it carries, so the outcome never depends on earlier signals.
#[derive(Default, Debug, Clone, Copy)]
pub struct ScrollStateController;

impl ScrollStateController {
    pub fn new() -> Self {
        Self
    }

    /// Handle a scroll signal carrying the document's current vertical offset.
    ///
    /// Returns the state that was applied, or `None` if the tree has no header.
    /// A missing header is not an error: nothing is mutated and the lookup is
    /// simply retried on the next signal.
    pub fn on_scroll_signal<T: PresentationTree + ?Sized>(
        &self,
        tree: &mut T,
        current_offset: f64,
    ) -> Option<HeaderVisualState> {
        let Some(header) = tree.query_selector(HEADER_SELECTOR) else {
            #[cfg(feature = "tracing")]
            tracing::trace!("No <{HEADER_SELECTOR}> element, ignoring scroll to {current_offset}");
            return None;
        };

        let state = HeaderVisualState::from_scroll_offset(current_offset);
        self.apply(tree, header, state);
        Some(state)
    }

    /// Apply an already derived `state` to a known header element
    pub fn apply<T: PresentationTree + ?Sized>(
        &self,
        tree: &mut T,
        header: T::ElementId,
        state: HeaderVisualState,
    ) {
        #[cfg(feature = "tracing")]
        tracing::trace!("Header {state}");

        match state {
            HeaderVisualState::Shrunken => tree.add_class(header, SHRUNKEN_CLASS),
            HeaderVisualState::Expanded => tree.remove_class(header, SHRUNKEN_CLASS),
        }
        tree.set_body_padding_top(state.body_padding_top());
    }
}
