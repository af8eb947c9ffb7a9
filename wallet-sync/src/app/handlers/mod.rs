//! # View Update Handlers
//!
//! Pure functions applying one poll reply to the [`ViewModel`](crate::app::state::ViewModel).
//! They never touch the page; the app renders afterwards.

pub mod balance;
pub mod block_height;
pub mod downloader;
pub mod heartbeat;

use crate::app::state::Redirect;

/// What applying a reply did to the view model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Update {
    /// Any displayed value differs from before
    pub changed: bool,
    /// Onboarding finished; submit this redirect's form
    pub redirect: Option<Redirect>,
}

impl Update {
    pub fn changed(changed: bool) -> Self {
        Self {
            changed,
            redirect: None,
        }
    }

    pub fn with_redirect(mut self, redirect: Option<Redirect>) -> Self {
        self.redirect = redirect;
        self
    }
}

/// Store `value` in `slot`; true if it differs from what was there.
pub(crate) fn replace<T: PartialEq>(slot: &mut Option<T>, value: T) -> bool {
    if slot.as_ref() == Some(&value) {
        return false;
    }
    *slot = Some(value);
    true
}
