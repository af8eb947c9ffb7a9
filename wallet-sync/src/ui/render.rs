//! # Rendering
//!
//! Writes the view model into a [`Page`]. Sections that were never polled are
//! left as the server rendered them. Rendering the same view twice leaves the
//! page unchanged the second time.

use crate::app::state::ViewModel;
use crate::ui::page::{class, Page};

/// Render every polled section; returns the number of elements that changed.
pub fn render(view: &ViewModel, page: &mut dyn Page) -> usize {
    render_chain(view, page) + render_balances(view, page) + render_downloader(view, page)
}

fn render_chain(view: &ViewModel, page: &mut dyn Page) -> usize {
    let mut changed = 0;
    if let Some(height) = &view.block_height {
        changed += page.set_text(class::BLOCK_HEIGHT, height);
    }
    if let Some(status) = &view.sync_status {
        changed += page.set_text(class::STATUS, &status.text);
        changed += page.set_class_name(class::STATUS, &status.class_name());
    }
    changed
}

fn render_balances(view: &ViewModel, page: &mut dyn Page) -> usize {
    let Some(balances) = &view.balances else {
        return 0;
    };
    let mut changed = page.set_text(class::CONFIRMED, &balances.confirmed)
        + page.set_text(class::UNCONFIRMED, &balances.unconfirmed)
        + page.set_text(class::SPF_FUNDS, &balances.spf_funds);
    if let Some(claim) = &balances.claim {
        changed += page.set_text(class::CLAIM_BALANCE, claim);
    }
    changed
}

fn render_downloader(view: &ViewModel, page: &mut dyn Page) -> usize {
    match &view.downloader_progress {
        Some(progress) => page.set_text(class::DOWNLOADER_PROGRESS, progress),
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::{Balances, SyncStatus};
    use crate::ui::page::Document;

    fn synced_view() -> ViewModel {
        let mut view = ViewModel::new("/gui");
        view.block_height = Some("12345".to_string());
        view.sync_status = Some(SyncStatus {
            text: "Synchronized".to_string(),
            color: "blue".to_string(),
        });
        view.balances = Some(Balances {
            confirmed: "1.5".to_string(),
            unconfirmed: "0.2".to_string(),
            spf_funds: "3.0".to_string(),
            claim: None,
        });
        view
    }

    #[test]
    fn test_render_writes_every_polled_section() {
        let mut doc = Document::dashboard("/gui");
        render(&synced_view(), &mut doc);

        assert_eq!(doc.texts(class::BLOCK_HEIGHT), vec!["12345"]);
        assert_eq!(doc.texts(class::STATUS), vec!["Synchronized"]);
        assert_eq!(doc.class_names(class::STATUS), vec!["status blue"]);
        assert_eq!(doc.texts(class::CONFIRMED), vec!["1.5"]);
        assert_eq!(doc.texts(class::UNCONFIRMED), vec!["0.2"]);
        assert_eq!(doc.texts(class::SPF_FUNDS), vec!["3.0"]);
        // not polled yet: left as rendered by the server
        assert_eq!(doc.texts(class::CLAIM_BALANCE), vec!["?"]);
        assert_eq!(doc.texts(class::DOWNLOADER_PROGRESS), vec!["0%"]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut doc = Document::dashboard("/gui");
        let view = synced_view();

        assert!(render(&view, &mut doc) > 0);
        let first = doc.elements().to_vec();

        assert_eq!(render(&view, &mut doc), 0);
        assert_eq!(doc.elements(), first.as_slice());
    }

    #[test]
    fn test_render_on_empty_page_is_harmless() {
        let mut doc = Document::new("/gui");
        assert_eq!(render(&synced_view(), &mut doc), 0);
        assert!(doc.elements().is_empty());
    }
}
