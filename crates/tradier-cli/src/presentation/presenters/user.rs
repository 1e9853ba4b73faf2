use tradier_core::json;

use super::{rows_under, with_root};
use crate::presentation::view_models::Report;

pub fn present_profile(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(p) = json::descend(root, &["profile"]) else {
            return Report::notice("No profile data found.");
        };

        let report = Report::new()
            .with_heading(format!(
                "User: {} ({})",
                json::text(p, "name"),
                json::text(p, "id")
            ))
            .with_blank();

        let accounts = rows_under(p, "account");
        if accounts.is_empty() {
            return report;
        }

        let rows = accounts
            .into_iter()
            .map(|a| {
                vec![
                    json::text(a, "account_number"),
                    json::text(a, "classification"),
                    json::text(a, "status"),
                    json::text(a, "type"),
                    json::text(a, "option_level"),
                    json::text(a, "day_trader"),
                ]
            })
            .collect();

        report.with_table(
            &[
                "ACCOUNT",
                "CLASSIFICATION",
                "STATUS",
                "TYPE",
                "OPTION LEVEL",
                "DAY TRADER",
            ],
            rows,
        )
    })
}
