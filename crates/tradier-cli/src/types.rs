use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Every response shape the renderer knows how to lay out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum ResourceKind {
    Balance,
    GainLoss,
    HistoricalBalances,
    History,
    Order,
    Orders,
    Positions,
    PositionGroups,
    PositionGroup,
    Quotes,
    OptionsChains,
    OptionsExpirations,
    OptionsStrikes,
    OptionsLookup,
    MarketHistory,
    TimeSales,
    Calendar,
    Clock,
    Etb,
    Securities,
    OrderResult,
    Profile,
    Watchlists,
    Watchlist,
    Session,
    Generic,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 26] = [
        ResourceKind::Balance,
        ResourceKind::GainLoss,
        ResourceKind::HistoricalBalances,
        ResourceKind::History,
        ResourceKind::Order,
        ResourceKind::Orders,
        ResourceKind::Positions,
        ResourceKind::PositionGroups,
        ResourceKind::PositionGroup,
        ResourceKind::Quotes,
        ResourceKind::OptionsChains,
        ResourceKind::OptionsExpirations,
        ResourceKind::OptionsStrikes,
        ResourceKind::OptionsLookup,
        ResourceKind::MarketHistory,
        ResourceKind::TimeSales,
        ResourceKind::Calendar,
        ResourceKind::Clock,
        ResourceKind::Etb,
        ResourceKind::Securities,
        ResourceKind::OrderResult,
        ResourceKind::Profile,
        ResourceKind::Watchlists,
        ResourceKind::Watchlist,
        ResourceKind::Session,
        ResourceKind::Generic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ResourceKind::Balance => "balance",
            ResourceKind::GainLoss => "gain-loss",
            ResourceKind::HistoricalBalances => "historical-balances",
            ResourceKind::History => "history",
            ResourceKind::Order => "order",
            ResourceKind::Orders => "orders",
            ResourceKind::Positions => "positions",
            ResourceKind::PositionGroups => "position-groups",
            ResourceKind::PositionGroup => "position-group",
            ResourceKind::Quotes => "quotes",
            ResourceKind::OptionsChains => "options-chains",
            ResourceKind::OptionsExpirations => "options-expirations",
            ResourceKind::OptionsStrikes => "options-strikes",
            ResourceKind::OptionsLookup => "options-lookup",
            ResourceKind::MarketHistory => "market-history",
            ResourceKind::TimeSales => "time-sales",
            ResourceKind::Calendar => "calendar",
            ResourceKind::Clock => "clock",
            ResourceKind::Etb => "etb",
            ResourceKind::Securities => "securities",
            ResourceKind::OrderResult => "order-result",
            ResourceKind::Profile => "profile",
            ResourceKind::Watchlists => "watchlists",
            ResourceKind::Watchlist => "watchlist",
            ResourceKind::Session => "session",
            ResourceKind::Generic => "generic",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ResourceKind::Balance => "Account balances and buying power",
            ResourceKind::GainLoss => "Cost basis and gain/loss of closed positions",
            ResourceKind::HistoricalBalances => "Account value over time",
            ResourceKind::History => "Account activity (trades, transfers, fees)",
            ResourceKind::Order => "A single order, with legs for multileg orders",
            ResourceKind::Orders => "All orders on an account",
            ResourceKind::Positions => "Open positions",
            ResourceKind::PositionGroups => "All position groups",
            ResourceKind::PositionGroup => "A created or updated position group",
            ResourceKind::Quotes => "Stock and option quotes",
            ResourceKind::OptionsChains => "An option chain for one expiration",
            ResourceKind::OptionsExpirations => "Available option expirations",
            ResourceKind::OptionsStrikes => "Available strikes for one expiration",
            ResourceKind::OptionsLookup => "Option symbols for an underlying",
            ResourceKind::MarketHistory => "Daily OHLCV pricing",
            ResourceKind::TimeSales => "Intraday time and sales",
            ResourceKind::Calendar => "Market calendar for a month",
            ResourceKind::Clock => "Current market clock",
            ResourceKind::Etb => "Easy-to-borrow securities",
            ResourceKind::Securities => "Security lookup and search results",
            ResourceKind::OrderResult => "Result of placing, changing or cancelling an order",
            ResourceKind::Profile => "User profile and accounts",
            ResourceKind::Watchlists => "All watchlists",
            ResourceKind::Watchlist => "One watchlist and its symbols",
            ResourceKind::Session => "A streaming session id",
            ResourceKind::Generic => "Any other response (status or field dump)",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
