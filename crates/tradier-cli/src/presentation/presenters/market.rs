use tradier_core::json;

use super::{rows_under, text_in, with_root};
use crate::presentation::formatters::{fixed2, percent, short_date, signed2};
use crate::presentation::view_models::Report;

pub fn present_quotes(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(q) = json::descend(root, &["quotes"]) else {
            return Report::notice("No quote data found.");
        };

        let rows = rows_under(q, "quote")
            .into_iter()
            .map(|qt| {
                vec![
                    json::text(qt, "symbol"),
                    fixed2(json::number(qt, "last")),
                    signed2(json::number(qt, "change")),
                    percent(json::number(qt, "change_percentage")),
                    json::text(qt, "volume"),
                    fixed2(json::number(qt, "bid")),
                    fixed2(json::number(qt, "ask")),
                    fixed2(json::number(qt, "open")),
                    fixed2(json::number(qt, "high")),
                    fixed2(json::number(qt, "low")),
                ]
            })
            .collect();

        Report::new().with_table(
            &[
                "SYMBOL", "LAST", "CHANGE", "CHG%", "VOLUME", "BID", "ASK", "OPEN", "HIGH", "LOW",
            ],
            rows,
        )
    })
}

const OHLCV: [&str; 5] = ["OPEN", "HIGH", "LOW", "CLOSE", "VOLUME"];

/// Leading cell followed by open/high/low/close/volume.
fn ohlcv_row(lead: String, bar: &json::Object) -> Vec<String> {
    vec![
        lead,
        fixed2(json::number(bar, "open")),
        fixed2(json::number(bar, "high")),
        fixed2(json::number(bar, "low")),
        fixed2(json::number(bar, "close")),
        json::text(bar, "volume"),
    ]
}

fn ohlcv_headers(lead: &'static str) -> Vec<&'static str> {
    std::iter::once(lead).chain(OHLCV).collect()
}

pub fn present_market_history(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(h) = json::descend(root, &["history"]) else {
            return Report::notice("No historical data found.");
        };

        let rows = rows_under(h, "day")
            .into_iter()
            .map(|d| ohlcv_row(short_date(&json::text(d, "date")), d))
            .collect();

        Report::new().with_table(&ohlcv_headers("DATE"), rows)
    })
}

pub fn present_time_sales(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(s) = json::descend(root, &["series"]) else {
            return Report::notice("No time and sales data found.");
        };

        let rows = rows_under(s, "data")
            .into_iter()
            .map(|e| ohlcv_row(json::text(e, "timestamp"), e))
            .collect();

        Report::new().with_table(&ohlcv_headers("TIMESTAMP"), rows)
    })
}

pub fn present_calendar(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(cal) = json::descend(root, &["calendar"]) else {
            return Report::notice("No calendar data found.");
        };
        let Some(days) = json::descend(cal, &["days"]) else {
            return Report::notice("No calendar days found.");
        };

        let rows = rows_under(days, "day")
            .into_iter()
            .map(|d| {
                // Session hours sit under "open"; closed days have none.
                let hours = json::descend(d, &["open"]);
                vec![
                    short_date(&json::text(d, "date")),
                    json::text(d, "status"),
                    json::text(d, "description"),
                    text_in(hours, "start"),
                    text_in(hours, "end"),
                ]
            })
            .collect();

        Report::new().with_table(&["DATE", "STATUS", "DESCRIPTION", "OPEN", "CLOSE"], rows)
    })
}

pub fn present_clock(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(c) = json::descend(root, &["clock"]) else {
            return Report::notice("No clock data found.");
        };

        Report::new().with_key_values(vec![
            ("Date", json::text(c, "date")),
            ("State", json::text(c, "state")),
            ("Description", json::text(c, "description")),
            ("Next State", json::text(c, "next_state")),
            ("Next Change", json::text(c, "next_change")),
        ])
    })
}

/// Easy-to-borrow list.
pub fn present_etb(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(sec) = json::descend(root, &["securities"]) else {
            return Report::notice("No ETB data found.");
        };

        let rows = rows_under(sec, "security")
            .into_iter()
            .map(|s| vec![json::text(s, "symbol")])
            .collect();

        Report::new().with_table(&["SYMBOL"], rows)
    })
}

/// Symbol lookup and company search results.
pub fn present_securities(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(sec) = json::descend(root, &["securities"]) else {
            return Report::notice("No securities found.");
        };

        let rows = rows_under(sec, "security")
            .into_iter()
            .map(|s| {
                vec![
                    json::text(s, "symbol"),
                    json::text(s, "exchange"),
                    json::text(s, "type"),
                    json::text(s, "description"),
                ]
            })
            .collect();

        Report::new().with_table(&["SYMBOL", "EXCHANGE", "TYPE", "DESCRIPTION"], rows)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::presenters::test_support::{cells, present_json};
    use serde_json::json;

    #[test]
    fn test_quotes_row() {
        let report = present_json(
            present_quotes,
            json!({"quotes": {"quote": {
                "symbol": "AAPL",
                "last": 187.5,
                "change": -1.25,
                "change_percentage": -0.66,
                "volume": 52436231,
                "bid": 187.49,
                "ask": 187.51,
                "open": 188,
                "high": 189.1,
                "low": 186.9
            }}}),
        );
        let (headers, rows) = report.table().unwrap();
        assert_eq!(headers.len(), 10);
        assert_eq!(
            rows[0],
            cells(&[
                "AAPL", "187.50", "-1.25", "-0.66%", "52436231", "187.49", "187.51", "188.00",
                "189.10", "186.90"
            ])
        );
    }

    #[test]
    fn test_quotes_unmatched_symbols_only() {
        let report = present_json(
            present_quotes,
            json!({"quotes": {"unmatched_symbols": {"symbol": "NOPE"}}}),
        );
        let (_, rows) = report.table().unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_market_history() {
        let report = present_json(
            present_market_history,
            json!({"history": {"day": [
                {"date": "2026-01-02", "open": 1, "high": 2, "low": 0.5, "close": 1.5, "volume": 100},
                {"date": "2026-01-05", "open": 1.5, "high": 1.5, "low": 1.5, "close": 1.5, "volume": 0}
            ]}}),
        );
        let (headers, rows) = report.table().unwrap();
        assert_eq!(headers, cells(&["DATE", "OPEN", "HIGH", "LOW", "CLOSE", "VOLUME"]));
        assert_eq!(rows[0], cells(&["2026-01-02", "1.00", "2.00", "0.50", "1.50", "100"]));
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_market_history_null() {
        let report = present_json(present_market_history, json!({"history": null}));
        assert_eq!(report.first_notice(), Some("No historical data found."));
    }

    #[test]
    fn test_time_sales_keeps_full_timestamp() {
        let report = present_json(
            present_time_sales,
            json!({"series": {"data": {
                "timestamp": "2026-02-17T09:30:00",
                "open": 10, "high": 11, "low": 9, "close": 10.5, "volume": 1200
            }}}),
        );
        let (headers, rows) = report.table().unwrap();
        assert_eq!(headers[0], "TIMESTAMP");
        assert_eq!(rows[0][0], "2026-02-17T09:30:00");
    }

    #[test]
    fn test_calendar_open_and_closed_days() {
        let report = present_json(
            present_calendar,
            json!({"calendar": {"month": 2, "year": 2026, "days": {"day": [
                {"date": "2026-02-16", "status": "closed", "description": "Market is closed for Presidents Day"},
                {"date": "2026-02-17", "status": "open", "description": "Market is open",
                 "open": {"start": "09:30", "end": "16:00"}}
            ]}}}),
        );
        let (_, rows) = report.table().unwrap();
        assert_eq!(
            rows[0],
            cells(&["2026-02-16", "closed", "Market is closed for Presidents Day", "", ""])
        );
        assert_eq!(rows[1], cells(&["2026-02-17", "open", "Market is open", "09:30", "16:00"]));
    }

    #[test]
    fn test_calendar_missing_levels() {
        let report = present_json(present_calendar, json!({}));
        assert_eq!(report.first_notice(), Some("No calendar data found."));

        let report = present_json(present_calendar, json!({"calendar": {"month": 2}}));
        assert_eq!(report.first_notice(), Some("No calendar days found."));
    }

    #[test]
    fn test_clock() {
        let report = present_json(
            present_clock,
            json!({"clock": {
                "date": "2026-02-17",
                "description": "Market is open from 09:30 to 16:00",
                "state": "open",
                "timestamp": 1771338600,
                "next_change": "16:00",
                "next_state": "postmarket"
            }}),
        );
        assert_eq!(report.value_of("State"), Some("open"));
        assert_eq!(report.value_of("Next State"), Some("postmarket"));
        assert_eq!(report.key_values(0).map(<[_]>::len), Some(5));
    }

    #[test]
    fn test_etb_and_securities_share_envelope() {
        let body = json!({"securities": {"security": [
            {"symbol": "AAPL", "exchange": "Q", "type": "stock", "description": "Apple Inc"},
            {"symbol": "AMZN", "exchange": "Q", "type": "stock", "description": "Amazon.com Inc"}
        ]}});

        let etb = present_json(present_etb, body.clone());
        let (headers, rows) = etb.table().unwrap();
        assert_eq!(headers, cells(&["SYMBOL"]));
        assert_eq!(rows[1], cells(&["AMZN"]));

        let securities = present_json(present_securities, body);
        let (_, rows) = securities.table().unwrap();
        assert_eq!(rows[0], cells(&["AAPL", "Q", "stock", "Apple Inc"]));
    }

    #[test]
    fn test_securities_notices_differ() {
        let etb = present_json(present_etb, json!({"securities": "null"}));
        assert_eq!(etb.first_notice(), Some("No ETB data found."));

        let securities = present_json(present_securities, json!({"securities": "null"}));
        assert_eq!(securities.first_notice(), Some("No securities found."));
    }
}
