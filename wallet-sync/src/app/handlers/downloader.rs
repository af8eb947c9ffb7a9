//! Initial download progress updates, plus the download-complete redirect.

use chrono::{DateTime, Utc};
use shared::dto::gui::DownloaderProgressReply;

use super::{replace, Update};
use crate::app::state::{Redirect, ViewModel};

/// The daemon serves its downloading page at the root path.
pub const DOWNLOADING_PATH: &str = "/";

pub fn apply(view: &mut ViewModel, reply: DownloaderProgressReply, now: DateTime<Utc>) -> Update {
    let redirect = (reply.is_complete()
        && view.page_path == DOWNLOADING_PATH
        && view.can_redirect())
    .then_some(Redirect::Downloader);

    let changed = replace(&mut view.downloader_progress, reply.status);
    view.last_updated.downloader = Some(now);
    Update::changed(changed).with_redirect(redirect)
}
