use tracing::debug;
use tradier_core::humanize;
use tradier_core::json::{self, Object};

use super::{rows_under, with_root};
use crate::presentation::formatters::{fixed2, money, short_date};
use crate::presentation::view_models::Report;

/// Printed after an orders table that abbreviates at least one multileg order.
pub const MULTILEG_FOOTNOTE: &str = "  * = multileg order. View the single order to see all legs.";

pub fn present_order(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(o) = json::descend(root, &["order"]) else {
            return Report::notice("No order data found.");
        };

        let report = Report::new().with_key_values(vec![
            ("Order ID", json::text(o, "id")),
            ("Class", json::text(o, "class")),
            ("Symbol", json::text(o, "symbol")),
            ("Option Symbol", humanize(&json::text(o, "option_symbol"))),
            ("Side", json::text(o, "side")),
            ("Quantity", json::text(o, "quantity")),
            ("Type", json::text(o, "type")),
            ("Price", fixed2(json::number(o, "price"))),
            ("Stop", fixed2(json::number(o, "stop_price"))),
            ("Status", json::text(o, "status")),
            ("Duration", json::text(o, "duration")),
            ("Avg Fill Price", money(json::number(o, "avg_fill_price"))),
            ("Exec Quantity", json::text(o, "exec_quantity")),
            ("Remaining", json::text(o, "remaining_quantity")),
            ("Created", short_date(&json::text(o, "create_date"))),
        ]);

        let legs = rows_under(o, "leg");
        if legs.is_empty() {
            return report;
        }

        let rows = legs
            .into_iter()
            .map(|leg| {
                vec![
                    humanize(&json::text(leg, "option_symbol")),
                    json::text(leg, "side"),
                    json::text(leg, "quantity"),
                    json::text(leg, "type"),
                    fixed2(json::number(leg, "price")),
                    json::text(leg, "status"),
                    money(json::number(leg, "avg_fill_price")),
                ]
            })
            .collect();

        report.with_blank().with_heading("Legs:").with_table(
            &["OPTION SYMBOL", "SIDE", "QTY", "TYPE", "PRICE", "STATUS", "AVG FILL"],
            rows,
        )
    })
}

/// `limit`, `stop`, or `limit/stop`, skipping whichever is zero.
fn price_label(order: &Object) -> String {
    let prices: Vec<String> = [json::number(order, "price"), json::number(order, "stop_price")]
        .into_iter()
        .filter(|p| *p != 0.0)
        .map(fixed2)
        .collect();
    prices.join("/")
}

/// The order's own option symbol, or its first leg's, starred when the
/// order has more than one leg. The flag reports whether a star was added.
fn option_label(order: &Object) -> (String, bool) {
    let own = humanize(&json::text(order, "option_symbol"));
    if !own.is_empty() {
        return (own, false);
    }

    let legs = rows_under(order, "leg");
    let Some(first) = legs.first() else {
        return (own, false);
    };
    let label = humanize(&json::text(first, "option_symbol"));
    if legs.len() > 1 {
        (format!("{} *", label), true)
    } else {
        (label, false)
    }
}

pub fn present_orders(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(o) = json::descend(root, &["orders"]) else {
            return Report::notice("No orders found.");
        };

        let mut multileg = false;
        let rows = rows_under(o, "order")
            .into_iter()
            .map(|ord| {
                let (option, starred) = option_label(ord);
                multileg |= starred;
                vec![
                    json::text(ord, "id"),
                    json::text(ord, "class"),
                    json::text(ord, "symbol"),
                    option,
                    json::text(ord, "side"),
                    json::text(ord, "quantity"),
                    json::text(ord, "type"),
                    price_label(ord),
                    json::text(ord, "status"),
                    json::text(ord, "duration"),
                    money(json::number(ord, "avg_fill_price")),
                    short_date(&json::text(ord, "create_date")),
                ]
            })
            .collect();

        let report = Report::new().with_table(
            &[
                "ID",
                "CLASS",
                "SYMBOL",
                "OPTION SYMBOL",
                "SIDE",
                "QTY",
                "TYPE",
                "PRICE",
                "STATUS",
                "DURATION",
                "AVG FILL",
                "CREATED",
            ],
            rows,
        );

        if multileg {
            report.with_footnote(MULTILEG_FOOTNOTE)
        } else {
            report
        }
    })
}

/// Acknowledgement of a placed, modified, or cancelled order.
pub fn present_order_result(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(o) = json::descend(root, &["order"]) else {
            debug!("order result has no order envelope; printing it as received");
            return Report::raw(bytes);
        };

        let mut pairs = vec![
            ("Order ID", json::text(o, "id")),
            ("Status", json::text(o, "status")),
        ];
        let partner_id = json::text(o, "partner_id");
        if !partner_id.is_empty() {
            pairs.push(("Partner ID", partner_id));
        }
        Report::new().with_key_values(pairs)
    })
}
