/// Options used when attaching a [`ScrollStateController`](crate::ScrollStateController)
/// to a [`ScrollHost`](crate::ScrollHost) with [`attach`](crate::attach)
#[derive(Debug, Clone, Copy)]
pub struct ShrinkConfig {
    /// Apply the host's current scroll offset immediately instead of waiting for
    /// the first scroll event. Pages restored mid-scroll otherwise keep the
    /// expanded header until the user scrolls.
    pub sync_on_attach: bool,
}

impl Default for ShrinkConfig {
    fn default() -> Self {
        Self {
            sync_on_attach: true,
        }
    }
}
