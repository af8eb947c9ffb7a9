//! Shutdown notice shown once the daemon stops answering the heartbeat.

use crate::services::api::gui::LOGO;

/// Body of the page after the daemon is gone. Replaces everything, so no
/// poll guard matches afterwards.
pub fn shutdown_notice() -> String {
    format!(
        r#"
    <div class="col-5 left top no-wrap">
      <div>
        <img class="scprime-logo" alt="ScPrime Wallet" src="{logo}"/>
      </div>
    </div>
    <div id="popup" class="popup center">
      <h2 class="uppercase">Shutdown Notice</h2>
      <div class="middle pad blue-dashed" id="popup_content">Wallet was shutdown.</div>
    </div>
    <div id="fade" class="fade"></div>
  "#,
        logo = LOGO
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_references_logo() {
        let html = shutdown_notice();
        assert!(html.contains(r#"src="/gui/logo.png""#));
        assert!(html.contains("Shutdown Notice"));
        assert!(html.contains("Wallet was shutdown."));
    }
}
