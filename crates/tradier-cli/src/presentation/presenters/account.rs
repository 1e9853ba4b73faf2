use tracing::debug;
use tradier_core::json::{self, Object};
use tradier_core::humanize;

use super::{rows_under, with_root};
use crate::presentation::formatters::{money, percent, short_date, whole};
use crate::presentation::view_models::Report;

// --------------------------------------------------------
// Balances
// --------------------------------------------------------

/// Probed in this order when the account's own type key is missing.
const BUYING_POWER_FALLBACKS: [&str; 3] = ["pdt", "margin", "cash"];

pub fn present_balance(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(b) = json::descend(root, &["balances"]) else {
            return Report::notice("No balance data found.");
        };

        let mut report = Report::new().with_key_values(vec![
            ("Account", json::text(b, "account_number")),
            ("Type", json::text(b, "account_type")),
            ("Total Equity", money(json::number(b, "total_equity"))),
            ("Total Cash", money(json::number(b, "total_cash"))),
            ("Market Value", money(json::number(b, "market_value"))),
            ("Open P/L", money(json::number(b, "open_pl"))),
            ("Close P/L", money(json::number(b, "close_pl"))),
            ("Stock Long Value", money(json::number(b, "stock_long_value"))),
            ("Option Long Value", money(json::number(b, "option_long_value"))),
            ("Option Short Value", money(json::number(b, "option_short_value"))),
            ("Short Market Value", money(json::number(b, "short_market_value"))),
            ("Current Requirement", money(json::number(b, "current_requirement"))),
            ("Uncleared Funds", money(json::number(b, "uncleared_funds"))),
            ("Pending Cash", money(json::number(b, "pending_cash"))),
            ("Pending Orders", json::text(b, "pending_orders_count")),
        ]);

        if let Some(bp) = buying_power(b) {
            report = report
                .with_blank()
                .with_heading("Buying Power:")
                .with_key_values(buying_power_pairs(bp));
        }
        report
    })
}

/// The buying-power object sits under a key named by `account_type`.
fn buying_power(balances: &Object) -> Option<&Object> {
    let account_type = json::text(balances, "account_type");
    if let Some(bp) = json::descend(balances, &[account_type.as_str()]) {
        return Some(bp);
    }

    debug!(%account_type, "no buying power under account type; probing known types");
    BUYING_POWER_FALLBACKS
        .into_iter()
        .find_map(|key| json::descend(balances, &[key]))
}

fn buying_power_pairs(bp: &Object) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
        ("Stock Buying Power", money(json::number(bp, "stock_buying_power"))),
        ("Option Buying Power", money(json::number(bp, "option_buying_power"))),
    ];
    let day_trade = json::number(bp, "day_trade_buying_power");
    if day_trade != 0.0 {
        pairs.push(("Day Trade Buying Power", money(day_trade)));
    }
    pairs.push(("Fed Call", money(json::number(bp, "fed_call"))));
    pairs.push(("Maintenance Call", money(json::number(bp, "maintenance_call"))));
    let short_value = json::number(bp, "stock_short_value");
    if short_value != 0.0 {
        pairs.push(("Stock Short Value", money(short_value)));
    }
    pairs
}

// --------------------------------------------------------
// Gain / Loss
// --------------------------------------------------------

pub fn present_gain_loss(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(gl) = json::descend(root, &["gainloss"]) else {
            return Report::notice("No gain/loss data found.");
        };

        let rows = rows_under(gl, "closed_position")
            .into_iter()
            .map(|p| {
                vec![
                    json::text(p, "symbol"),
                    json::text(p, "quantity"),
                    money(json::number(p, "cost")),
                    money(json::number(p, "proceeds")),
                    money(json::number(p, "gain_loss")),
                    percent(json::number(p, "gain_loss_percent")),
                    short_date(&json::text(p, "open_date")),
                    short_date(&json::text(p, "close_date")),
                ]
            })
            .collect();

        Report::new().with_table(
            &[
                "SYMBOL",
                "QTY",
                "COST",
                "PROCEEDS",
                "GAIN/LOSS",
                "GAIN%",
                "OPEN DATE",
                "CLOSE DATE",
            ],
            rows,
        )
    })
}

// --------------------------------------------------------
// Historical Balances
// --------------------------------------------------------

pub fn present_historical_balances(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        // An empty list is a table with no rows; a missing one is "no data".
        let Some(balances) = json::row_set(root.get("balances")) else {
            return Report::notice("No historical balance data found.");
        };

        let rows = balances
            .into_iter()
            .map(|b| {
                vec![
                    short_date(&json::text(b, "date")),
                    money(json::number(b, "value")),
                ]
            })
            .collect();

        Report::new().with_table(&["DATE", "VALUE"], rows)
    })
}

// --------------------------------------------------------
// History
// --------------------------------------------------------

/// Event types the API documents. Any other type is still read from the
/// key it names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EventKind {
    Trade,
    Option,
    Ach,
    Wire,
    Dividend,
    Fee,
    Tax,
    Journal,
    Check,
    Transfer,
    Adjustment,
    Interest,
}

impl EventKind {
    fn from_type(event_type: &str) -> Option<Self> {
        match event_type {
            "trade" => Some(EventKind::Trade),
            "option" => Some(EventKind::Option),
            "ach" => Some(EventKind::Ach),
            "wire" => Some(EventKind::Wire),
            "dividend" => Some(EventKind::Dividend),
            "fee" => Some(EventKind::Fee),
            "tax" => Some(EventKind::Tax),
            "journal" => Some(EventKind::Journal),
            "check" => Some(EventKind::Check),
            "transfer" => Some(EventKind::Transfer),
            "adjustment" => Some(EventKind::Adjustment),
            "interest" => Some(EventKind::Interest),
            _ => None,
        }
    }

    fn detail_key(self) -> &'static str {
        match self {
            EventKind::Trade => "trade",
            EventKind::Option => "option",
            EventKind::Ach => "ach",
            EventKind::Wire => "wire",
            EventKind::Dividend => "dividend",
            EventKind::Fee => "fee",
            EventKind::Tax => "tax",
            EventKind::Journal => "journal",
            EventKind::Check => "check",
            EventKind::Transfer => "transfer",
            EventKind::Adjustment => "adjustment",
            EventKind::Interest => "interest",
        }
    }
}

/// Detail cells of one history row. All empty when the event has no details.
#[derive(Debug, Default, PartialEq)]
struct EventDetail {
    symbol: String,
    quantity: String,
    price: String,
    description: String,
}

impl EventDetail {
    fn extract(event: &Object, event_type: &str) -> Self {
        if event_type.is_empty() {
            return Self::default();
        }
        let key = match EventKind::from_type(event_type) {
            Some(kind) => kind.detail_key(),
            None => {
                debug!(%event_type, "unrecognized history event type; reading details under it");
                event_type
            }
        };
        let Some(detail) = json::descend(event, &[key]) else {
            return Self::default();
        };

        let quantity = json::number(detail, "quantity");
        let symbol = json::text(detail, "symbol");
        Self {
            symbol: humanize(&symbol),
            quantity: if quantity != 0.0 {
                whole(quantity)
            } else {
                String::new()
            },
            price: money(json::number(detail, "price")),
            description: json::text(detail, "description"),
        }
    }
}

pub fn present_history(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(h) = json::descend(root, &["history"]) else {
            return Report::notice("No history data found.");
        };

        let rows = rows_under(h, "event")
            .into_iter()
            .map(|e| {
                let event_type = json::text(e, "type");
                let detail = EventDetail::extract(e, &event_type);
                vec![
                    short_date(&json::text(e, "date")),
                    event_type,
                    detail.symbol,
                    detail.quantity,
                    detail.price,
                    money(json::number(e, "amount")),
                    detail.description,
                ]
            })
            .collect();

        Report::new().with_table(
            &["DATE", "TYPE", "SYMBOL", "QTY", "PRICE", "AMOUNT", "DESCRIPTION"],
            rows,
        )
    })
}
