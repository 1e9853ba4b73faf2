use serde_json::Value;
use tracing::debug;
use tradier_core::json::{self, Object};
use tradier_core::{OptionKind, OptionSymbol, humanize};

use super::{rows_under, with_root};
use crate::presentation::formatters::{fixed2, short_date};
use crate::presentation::view_models::Report;

pub fn present_chains(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(o) = json::descend(root, &["options"]) else {
            return Report::notice("No options chain data found.");
        };

        let rows = rows_under(o, "option")
            .into_iter()
            .map(|opt| {
                vec![
                    humanize(&json::text(opt, "symbol")),
                    json::text(opt, "option_type"),
                    fixed2(json::number(opt, "strike")),
                    fixed2(json::number(opt, "last")),
                    fixed2(json::number(opt, "bid")),
                    fixed2(json::number(opt, "ask")),
                    json::text(opt, "volume"),
                    json::text(opt, "open_interest"),
                ]
            })
            .collect();

        Report::new().with_table(
            &["OPTION", "TYPE", "STRIKE", "LAST", "BID", "ASK", "VOLUME", "OPEN INT"],
            rows,
        )
    })
}

/// Display strings for a list that collapses to a bare scalar when it has
/// one element.
fn scalar_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(scalar @ (Value::String(_) | Value::Number(_))) => vec![json::display_value(scalar)],
        other => json::strings(other),
    }
}

fn one_column(values: Vec<String>) -> Vec<Vec<String>> {
    values.into_iter().map(|v| vec![v]).collect()
}

pub fn present_expirations(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(exp) = json::descend(root, &["expirations"]) else {
            return Report::notice("No expiration data found.");
        };

        let mut dates = scalar_list(exp.get("date"));
        if dates.is_empty() {
            // Requests that include strikes return each date as an object.
            dates = rows_under(exp, "expiration")
                .into_iter()
                .map(|e| short_date(&json::text(e, "date")))
                .collect();
        }

        Report::new().with_table(&["EXPIRATION"], one_column(dates))
    })
}

pub fn present_strikes(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        let Some(s) = json::descend(root, &["strikes"]) else {
            return Report::notice("No strikes data found.");
        };

        let strikes = scalar_list(s.get("strike"));
        Report::new().with_table(&["STRIKE"], one_column(strikes))
    })
}

// --------------------------------------------------------
// Lookup
// --------------------------------------------------------

type SymbolsLookup = fn(&Object) -> Option<Vec<&Object>>;

fn symbols_list(root: &Object) -> Option<Vec<&Object>> {
    json::row_set(root.get("symbols").filter(|v| v.is_array()))
}

fn symbols_nested(root: &Object) -> Option<Vec<&Object>> {
    json::row_set(json::descend(root, &["symbols"])?.get("option"))
}

fn symbols_single(root: &Object) -> Option<Vec<&Object>> {
    json::row_set(root.get("symbols").filter(|v| v.is_object()))
}

/// Row for one contract described by explicit fields.
fn described_row(sym: &Object) -> Vec<String> {
    vec![
        humanize(&json::text(sym, "symbol")),
        json::text(sym, "rootSymbol"),
        fixed2(json::number(sym, "strike")),
        short_date(&json::text(sym, "expiration_date")),
        json::text(sym, "option_type"),
    ]
}

/// Row for one bare OCC code listed under a root.
fn decoded_row(root_symbol: &str, code: &str) -> Vec<String> {
    let Some(parsed) = OptionSymbol::parse(code) else {
        debug!(%code, "lookup entry is not an OCC code");
        return vec![
            code.to_string(),
            root_symbol.to_string(),
            String::new(),
            String::new(),
            String::new(),
        ];
    };

    let root = if root_symbol.is_empty() { parsed.root } else { root_symbol };
    let kind = match parsed.kind {
        OptionKind::Call => "call",
        OptionKind::Put => "put",
    };
    vec![
        parsed.to_string(),
        root.to_string(),
        fixed2(parsed.strike()),
        format!("20{:02}-{:02}-{:02}", parsed.year, parsed.month, parsed.day),
        kind.to_string(),
    ]
}

/// An entry either describes one contract or lists a root's codes under
/// `options`; the latter expands to one row per code.
fn lookup_rows(sym: &Object) -> Vec<Vec<String>> {
    match sym.get("options") {
        Some(Value::Array(_)) => {
            let root_symbol = json::text(sym, "rootSymbol");
            json::strings(sym.get("options"))
                .iter()
                .map(|code| decoded_row(&root_symbol, code))
                .collect()
        }
        _ => vec![described_row(sym)],
    }
}

pub fn present_lookup(bytes: &[u8]) -> Report {
    with_root(bytes, |root| {
        // A `symbols` object is probed for a nested `option` row set before it is
        // read as a single entry; taking it as a row first would hide that spelling.
        let candidates: [SymbolsLookup; 3] = [symbols_list, symbols_nested, symbols_single];
        let Some(symbols) = json::first_of(root, &candidates) else {
            return Report::notice("No options symbols found.");
        };

        let rows = symbols.into_iter().flat_map(lookup_rows).collect();
        Report::new().with_table(&["OPTION", "ROOT", "STRIKE", "EXPIRATION", "TYPE"], rows)
    })
}
