#![cfg_attr(docsrs, feature(doc_cfg))]

//! Shrink a page's `<header>` once the document has scrolled past a fixed offset.
//!
//! The crate is split into a pure mapping from scroll offset to [`HeaderVisualState`],
//! a [`ScrollStateController`] which applies that state to anything implementing
//! [`PresentationTree`], and a [`ScrollHost`] seam through which the embedder delivers
//! scroll notifications. Two hosts are provided:
//!
//!  - [`MemoryDocument`] / [`MemoryScrollHost`]: a headless tree, used by tests and native embedders.
//!  - `WebDocument` / `WebScrollHost` (feature `web`): the live browser DOM via `web-sys`.
//!
//! ## Feature flags
//!  - `default`: Enables the features listed below.
//!  - `tracing`: Enables tracing support.
//!  - `web`: Enables the browser host.

mod config;
mod controller;
mod listener;
mod memory;
mod state;
mod tree;

#[cfg(feature = "web")]
#[cfg_attr(docsrs, doc(cfg(feature = "web")))]
pub mod web;

pub use config::ShrinkConfig;
pub use controller::ScrollStateController;
pub use listener::{HostError, ScrollCallback, ScrollHost, ScrollSubscription, attach};
pub use memory::{MemoryDocument, MemoryScrollHost};
pub use state::{
    EXPANDED_PADDING_TOP, HEADER_SELECTOR, HeaderVisualState, SHRINK_THRESHOLD,
    SHRUNKEN_CLASS, SHRUNKEN_PADDING_TOP,
};
pub use tree::PresentationTree;
