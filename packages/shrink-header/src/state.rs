use std::fmt;

/// Scroll offset (in logical pixels) the document must exceed before the header shrinks.
pub const SHRINK_THRESHOLD: f64 = 50.0;

/// Selector for the page's single header landmark
pub const HEADER_SELECTOR: &str = "header";

/// Class toggled on the header while it is shrunken. Purely a style hook.
pub const SHRUNKEN_CLASS: &str = "shrunken";

/// Body `padding-top` matching the shrunken header's height
pub const SHRUNKEN_PADDING_TOP: f64 = 60.0;

/// Body `padding-top` matching the expanded header's height
pub const EXPANDED_PADDING_TOP: f64 = 150.0;

/// The visual state of the header. Never stored: it is re-derived from the scroll
/// offset on every scroll signal.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderVisualState {
    #[default]
    Expanded,
    Shrunken,
}

impl HeaderVisualState {
    /// `Shrunken` iff `offset` is strictly greater than [`SHRINK_THRESHOLD`].
    ///
    /// NaN compares false and therefore maps to `Expanded`.
    pub fn from_scroll_offset(offset: f64) -> Self {
        if offset > SHRINK_THRESHOLD {
            HeaderVisualState::Shrunken
        } else {
            HeaderVisualState::Expanded
        }
    }

    pub fn is_shrunken(self) -> bool {
        matches!(self, HeaderVisualState::Shrunken)
    }

    /// The body `padding-top` (in logical pixels) that keeps content clear of the header
    pub fn body_padding_top(self) -> f64 {
        match self {
            HeaderVisualState::Expanded => EXPANDED_PADDING_TOP,
            HeaderVisualState::Shrunken => SHRUNKEN_PADDING_TOP,
        }
    }
}

impl fmt::Display for HeaderVisualState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderVisualState::Expanded => f.write_str("expanded"),
            HeaderVisualState::Shrunken => f.write_str("shrunken"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_up_to_threshold_are_expanded() {
        for offset in [0.0, 1.0, 25.5, 49.999, 50.0] {
            assert_eq!(
                HeaderVisualState::from_scroll_offset(offset),
                HeaderVisualState::Expanded,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn offsets_past_threshold_are_shrunken() {
        for offset in [50.0001, 51.0, 100.0, 10_000.0, f64::INFINITY] {
            assert_eq!(
                HeaderVisualState::from_scroll_offset(offset),
                HeaderVisualState::Shrunken,
                "offset {offset}"
            );
        }
    }

    #[test]
    fn negative_and_nan_offsets_are_expanded() {
        // Elastic overscroll reports negative offsets on some platforms
        assert_eq!(
            HeaderVisualState::from_scroll_offset(-20.0),
            HeaderVisualState::Expanded
        );
        assert_eq!(
            HeaderVisualState::from_scroll_offset(f64::NAN),
            HeaderVisualState::Expanded
        );
    }

    #[test]
    fn padding_follows_state() {
        assert_eq!(HeaderVisualState::Expanded.body_padding_top(), 150.0);
        assert_eq!(HeaderVisualState::Shrunken.body_padding_top(), 60.0);
        assert!(HeaderVisualState::Shrunken.is_shrunken());
        assert!(!HeaderVisualState::default().is_shrunken());
    }

    #[test]
    fn display() {
        assert_eq!(HeaderVisualState::Expanded.to_string(), "expanded");
        assert_eq!(HeaderVisualState::Shrunken.to_string(), "shrunken");
    }
}
