//! # Daemon API
//!
//! - [`client`]: `ApiClient`, the reqwest-backed [`crate::core::GuiApi`]
//! - [`gui`]: endpoint paths and reply decoding

pub mod client;
pub mod gui;

pub use client::ApiClient;
