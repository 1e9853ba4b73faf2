use tracing::debug;
use tradier_core::json;

use super::with_root;
use crate::presentation::view_models::Report;

/// Streaming session handshake.
pub fn present_session(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(s) = json::descend(root, &["stream"]) else {
            debug!("session response has no stream envelope; printing it as received");
            return Report::raw(bytes);
        };

        Report::new().with_key_values(vec![
            ("Session ID", json::text(s, "sessionid")),
            ("URL", json::text(s, "url")),
        ])
    })
}
