//! # UI Module
//!
//! The page side of the sync client.
//!
//! - [`page`]: `Page` trait, in-memory `Document`, class and form names
//! - [`render`]: view model -> page
//! - [`shutdown`]: the shutdown notice body

pub mod page;
pub mod render;
pub mod shutdown;

pub use page::{Document, Page, SharedPage};
pub use render::render;
