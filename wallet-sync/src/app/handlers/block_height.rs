//! Block height and sync status updates, plus the post-onboarding redirect.

use chrono::{DateTime, Utc};
use shared::dto::gui::BlockHeightReply;

use super::{replace, Update};
use crate::app::state::{Redirect, SyncStatus, ViewModel};

/// Pages shown while a seed is being created or restored. Once the wallet
/// reports "Synchronized" there, the page is refreshed into the wallet.
pub const ONBOARDING_PATHS: [&str; 2] = ["/gui/initializeSeed", "/gui/restoreSeed"];

pub fn apply(view: &mut ViewModel, reply: BlockHeightReply, now: DateTime<Utc>) -> Update {
    let redirect = (reply.is_synchronized()
        && ONBOARDING_PATHS.contains(&view.page_path.as_str())
        && view.can_redirect())
    .then_some(Redirect::Scanner);

    let status = SyncStatus {
        text: reply.status,
        color: reply.color,
    };
    let height_changed = replace(&mut view.block_height, reply.height);
    let status_changed = replace(&mut view.sync_status, status);
    view.last_updated.chain = Some(now);

    Update::changed(height_changed || status_changed).with_redirect(redirect)
}
