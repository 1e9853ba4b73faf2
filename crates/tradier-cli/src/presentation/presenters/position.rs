use tracing::debug;
use tradier_core::json::{self, Object};

use super::{rows_under, with_root};
use crate::presentation::formatters::{money, short_date};
use crate::presentation::view_models::Report;

type RowSetLookup = fn(&Object) -> Option<Vec<&Object>>;
type ObjectLookup = fn(&Object) -> Option<&Object>;

pub fn present_positions(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(p) = json::descend(root, &["positions"]) else {
            return Report::notice("No positions found.");
        };

        let rows = rows_under(p, "position")
            .into_iter()
            .map(|pos| {
                vec![
                    json::text(pos, "symbol"),
                    json::text(pos, "quantity"),
                    money(json::number(pos, "cost_basis")),
                    short_date(&json::text(pos, "date_acquired")),
                ]
            })
            .collect();

        Report::new().with_table(&["SYMBOL", "QTY", "COST BASIS", "DATE ACQUIRED"], rows)
    })
}

// --------------------------------------------------------
// Position Groups
// --------------------------------------------------------

fn groups_flat(root: &Object) -> Option<Vec<&Object>> {
    json::row_set(root.get("position_groups"))
}

fn groups_nested(root: &Object) -> Option<Vec<&Object>> {
    json::row_set(json::descend(root, &["positiongroups"])?.get("positiongroup"))
}

pub fn present_position_groups(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let candidates: [RowSetLookup; 2] = [groups_flat, groups_nested];
        let Some(groups) = json::first_of(root, &candidates) else {
            return Report::notice("No position groups found.");
        };

        let rows = groups
            .into_iter()
            .map(|g| vec![json::text(g, "id"), json::text(g, "label")])
            .collect();

        Report::new().with_table(&["ID", "LABEL"], rows)
    })
}

fn group_snake(root: &Object) -> Option<&Object> {
    json::descend(root, &["position_group"])
}

fn group_joined(root: &Object) -> Option<&Object> {
    json::descend(root, &["positiongroup"])
}

/// Some endpoints return the group's fields at the top level.
fn group_at_root(root: &Object) -> Option<&Object> {
    let has_identity = !json::text(root, "id").is_empty() || !json::text(root, "label").is_empty();
    has_identity.then_some(root)
}

pub fn present_position_group(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let candidates: [ObjectLookup; 3] = [group_snake, group_joined, group_at_root];
        let Some(group) = json::first_of(root, &candidates) else {
            debug!("no position group in response; treating it as an acknowledgement");
            return Report::notice("Position group updated.");
        };

        Report::new().with_key_values(vec![
            ("ID", json::text(group, "id")),
            ("Label", json::text(group, "label")),
        ])
    })
}
