use tracing::debug;
use tradier_core::json::{self, Object};

use super::{rows_under, with_root};
use crate::presentation::view_models::Report;

pub fn present_watchlists(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(wl) = json::descend(root, &["watchlists"]) else {
            return Report::notice("No watchlists found.");
        };

        let rows = rows_under(wl, "watchlist")
            .into_iter()
            .map(|l| vec![json::text(l, "id"), json::text(l, "name")])
            .collect();

        Report::new().with_table(&["ID", "NAME"], rows)
    })
}

type WatchlistLookup = fn(&Object) -> Option<&Object>;

fn enveloped(root: &Object) -> Option<&Object> {
    json::descend(root, &["watchlist"])
}

fn bare(root: &Object) -> Option<&Object> {
    (!json::text(root, "id").is_empty()).then_some(root)
}

pub fn present_watchlist(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let candidates: [WatchlistLookup; 2] = [enveloped, bare];
        let Some(wl) = json::first_of(root, &candidates) else {
            debug!("no watchlist in response; treating it as an acknowledgement");
            return Report::notice("Watchlist updated.");
        };

        let report = Report::new().with_heading(format!(
            "Watchlist: {} ({})",
            json::text(wl, "name"),
            json::text(wl, "id")
        ));

        let Some(items) = json::descend(wl, &["items"]) else {
            return report;
        };
        let symbols = rows_under(items, "item");
        if symbols.is_empty() {
            return report;
        }

        let rows = symbols
            .into_iter()
            .map(|s| vec![json::text(s, "symbol")])
            .collect();
        report.with_blank().with_table(&["SYMBOL"], rows)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::test_support::{cells, present_json};
    use crate::presentation::view_models::Block;
    use serde_json::json;

    #[test]
    fn test_watchlists() {
        let report = present_json(
            present_watchlists,
            json!({"watchlists": {"watchlist": [
                {"name": "default", "id": "default", "public_id": "public-1"},
                {"name": "Tech", "id": "tech", "public_id": "public-2"}
            ]}}),
        );
        let (_, rows) = report.table().unwrap();
        assert_eq!(rows, &[cells(&["default", "default"]), cells(&["tech", "Tech"])]);
    }

    #[test]
    fn test_watchlists_missing() {
        let report = present_json(present_watchlists, json!({"watchlists": "null"}));
        assert_eq!(report.first_notice(), Some("No watchlists found."));
    }

    #[test]
    fn test_watchlist_with_items() {
        let report = present_json(
            present_watchlist,
            json!({"watchlist": {
                "name": "Tech",
                "id": "tech",
                "items": {"item": [{"symbol": "AAPL", "id": "aapl"}, {"symbol": "MSFT", "id": "msft"}]}
            }}),
        );
        assert_eq!(
            report.blocks[0],
            Block::Heading {
                text: "Watchlist: Tech (tech)".to_string()
            }
        );
        assert_eq!(report.blocks[1], Block::Blank);
        let (_, rows) = report.table().unwrap();
        assert_eq!(rows, &[cells(&["AAPL"]), cells(&["MSFT"])]);
    }

    #[test]
    fn test_watchlist_at_root_without_items() {
        let report = present_json(present_watchlist, json!({"id": "tech", "name": "Tech", "items": "null"}));
        assert_eq!(
            report,
            Report::new().with_heading("Watchlist: Tech (tech)")
        );
    }

    #[test]
    fn test_watchlist_acknowledgement() {
        let report = present_json(present_watchlist, json!({"name": "no id here"}));
        assert_eq!(report, Report::notice("Watchlist updated."));
    }
}
