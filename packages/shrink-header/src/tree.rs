/// The slice of a rendered document the controller mutates.
///
/// Implementations are expected to make `add_class` and `remove_class` idempotent,
/// as `DOMTokenList` does.
pub trait PresentationTree {
    /// Handle to an element in the tree
    type ElementId;

    /// Find the first element matching `selector` (if one exists)
    fn query_selector(&self, selector: &str) -> Option<Self::ElementId>;

    fn add_class(&mut self, element: Self::ElementId, class: &str);

    fn remove_class(&mut self, element: Self::ElementId, class: &str);

    /// Set the document body's inline `padding-top`, in logical pixels
    fn set_body_padding_top(&mut self, px: f64);
}
