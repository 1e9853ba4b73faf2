//! One presenter per response kind.
//!
//! Every presenter follows the same steps: parse, descend to the envelope,
//! print a "no data" notice if it is missing, normalize to rows, map each row
//! to a fixed set of columns.

pub mod account;
pub mod generic;
pub mod market;
pub mod options;
pub mod order;
pub mod position;
pub mod streaming;
pub mod user;
pub mod watchlist;

use tracing::warn;
use tradier_core::json::{self, Object};

use crate::presentation::view_models::Report;
use crate::types::ResourceKind;

pub fn present(kind: ResourceKind, bytes: &[u8]) -> Report {
    match kind {
        ResourceKind::Balance => account::present_balance(bytes),
        ResourceKind::GainLoss => account::present_gain_loss(bytes),
        ResourceKind::HistoricalBalances => account::present_historical_balances(bytes),
        ResourceKind::History => account::present_history(bytes),
        ResourceKind::Order => order::present_order(bytes),
        ResourceKind::Orders => order::present_orders(bytes),
        ResourceKind::OrderResult => order::present_order_result(bytes),
        ResourceKind::Positions => position::present_positions(bytes),
        ResourceKind::PositionGroups => position::present_position_groups(bytes),
        ResourceKind::PositionGroup => position::present_position_group(bytes),
        ResourceKind::Quotes => market::present_quotes(bytes),
        ResourceKind::MarketHistory => market::present_market_history(bytes),
        ResourceKind::TimeSales => market::present_time_sales(bytes),
        ResourceKind::Calendar => market::present_calendar(bytes),
        ResourceKind::Clock => market::present_clock(bytes),
        ResourceKind::Etb => market::present_etb(bytes),
        ResourceKind::Securities => market::present_securities(bytes),
        ResourceKind::OptionsChains => options::present_chains(bytes),
        ResourceKind::OptionsExpirations => options::present_expirations(bytes),
        ResourceKind::OptionsStrikes => options::present_strikes(bytes),
        ResourceKind::OptionsLookup => options::present_lookup(bytes),
        ResourceKind::Profile => user::present_profile(bytes),
        ResourceKind::Watchlists => watchlist::present_watchlists(bytes),
        ResourceKind::Watchlist => watchlist::present_watchlist(bytes),
        ResourceKind::Session => streaming::present_session(bytes),
        ResourceKind::Generic => generic::present_generic(bytes),
    }
}

/// Parse `bytes` and hand the root object to `present`, or fall back to the
/// raw bytes when they are not a JSON object.
pub(crate) fn with_root(bytes: &[u8], present: impl FnOnce(&Object) -> Report) -> Report {
    match json::parse(bytes) {
        Some(root) => present(&root),
        None => {
            warn!(len = bytes.len(), "response is not a JSON object; printing it as received");
            Report::raw(bytes)
        }
    }
}

/// Row set stored under `field`.
pub(crate) fn rows_under<'a>(obj: &'a Object, field: &str) -> Vec<&'a Object> {
    json::rows(obj.get(field))
}

/// Text of `key` inside an optional object; `""` when the object is absent.
pub(crate) fn text_in(obj: Option<&Object>, key: &str) -> String {
    obj.map(|o| json::text(o, key)).unwrap_or_default()
}
