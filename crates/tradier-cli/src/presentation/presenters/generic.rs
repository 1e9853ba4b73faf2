use tracing::debug;
use tradier_core::json::{self, Object};

use super::with_root;
use crate::presentation::view_models::Report;

/// `status` at the top level, or inside a lone envelope such as
/// `{"result": {"status": "ok"}}`.
fn status(root: &Object) -> Option<String> {
    let top = json::text(root, "status");
    if !top.is_empty() {
        return Some(top);
    }

    let mut values = root.values();
    match (values.next(), values.next()) {
        (Some(envelope), None) => envelope
            .as_object()
            .map(|inner| json::text(inner, "status"))
            .filter(|s| !s.is_empty()),
        _ => None,
    }
}

/// Responses with no dedicated layout: a status line, else every top-level
/// field, else a bare acknowledgement.
pub fn present_generic(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        if let Some(status) = status(root) {
            return Report::notice(format!("Status: {}", status));
        }

        if root.is_empty() {
            return Report::notice("OK");
        }

        debug!(fields = root.len(), "no status field; dumping top-level fields");
        let mut pairs: Vec<(String, String)> = root
            .iter()
            .map(|(key, value)| (key.clone(), json::display_value(value)))
            .collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));
        Report::new().with_key_values(pairs)
    })
}
