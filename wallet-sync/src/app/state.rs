//! # View Model
//!
//! Everything the sync client knows about the daemon, kept separate from the
//! page so update logic can be tested without rendering. Handlers in
//! [`crate::app::handlers`] mutate it; [`crate::ui::render`] writes it to a page.

use chrono::{DateTime, Utc};

use crate::ui::page::form;

/// Sync status badge: text plus its color class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncStatus {
    pub text: String,
    pub color: String,
}

impl SyncStatus {
    /// Class list the status elements get, e.g. `"status blue"`.
    pub fn class_name(&self) -> String {
        format!("status {}", self.color)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Balances {
    pub confirmed: String,
    pub unconfirmed: String,
    pub spf_funds: String,
    pub claim: Option<String>,
}

/// Daemon liveness as seen through the heartbeat. `Dead` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Liveness {
    #[default]
    Alive,
    Dead,
}

/// Page transition triggered once onboarding is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Seed initialized or restored and the wallet finished syncing
    Scanner,
    /// Initial blockchain download finished
    Downloader,
}

impl Redirect {
    pub fn form_id(self) -> &'static str {
        match self {
            Redirect::Scanner => form::REFRESH_SCANNER,
            Redirect::Downloader => form::REFRESH_DOWNLOADER,
        }
    }
}

/// Time of the last successful poll per section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LastUpdated {
    pub chain: Option<DateTime<Utc>>,
    pub balance: Option<DateTime<Utc>>,
    pub downloader: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    /// Path of the page being kept in sync
    pub page_path: String,
    pub block_height: Option<String>,
    pub sync_status: Option<SyncStatus>,
    pub balances: Option<Balances>,
    pub downloader_progress: Option<String>,
    pub liveness: Liveness,
    /// Set once a redirect form was submitted; the page is navigating away
    pub navigating: Option<Redirect>,
    pub last_updated: LastUpdated,
}

impl ViewModel {
    pub fn new(page_path: impl Into<String>) -> Self {
        Self {
            page_path: page_path.into(),
            ..Default::default()
        }
    }

    pub fn is_dead(&self) -> bool {
        self.liveness == Liveness::Dead
    }

    /// Redirects fire at most once per page.
    pub fn can_redirect(&self) -> bool {
        self.navigating.is_none() && !self.is_dead()
    }

    /// Age of the oldest section that has been polled at least once.
    pub fn staleness(&self, now: DateTime<Utc>) -> Option<chrono::Duration> {
        [
            self.last_updated.chain,
            self.last_updated.balance,
            self.last_updated.downloader,
        ]
        .into_iter()
        .flatten()
        .min()
        .map(|oldest| now - oldest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_status_class_name() {
        let status = SyncStatus {
            text: "Rescanning".to_string(),
            color: "cyan".to_string(),
        };
        assert_eq!(status.class_name(), "status cyan");
    }

    #[test]
    fn test_redirect_forms() {
        assert_eq!(Redirect::Scanner.form_id(), "refreshScanner");
        assert_eq!(Redirect::Downloader.form_id(), "refreshDownloader");
    }

    #[test]
    fn test_redirect_allowed_until_navigating_or_dead() {
        let mut view = ViewModel::new("/");
        assert!(view.can_redirect());

        view.navigating = Some(Redirect::Downloader);
        assert!(!view.can_redirect());

        let mut view = ViewModel::new("/");
        view.liveness = Liveness::Dead;
        assert!(!view.can_redirect());
    }

    #[test]
    fn test_staleness_uses_oldest_section() {
        let t0 = Utc.with_ymd_and_hms(2026, 1, 1, 12, 0, 0).unwrap();
        let mut view = ViewModel::new("/");
        assert_eq!(view.staleness(t0), None);

        view.last_updated.chain = Some(t0);
        view.last_updated.balance = Some(t0 + chrono::Duration::seconds(4));

        let now = t0 + chrono::Duration::seconds(10);
        assert_eq!(view.staleness(now), Some(chrono::Duration::seconds(10)));
    }
}
