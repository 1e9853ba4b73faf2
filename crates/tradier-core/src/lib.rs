//! Response navigation and option-symbol decoding for the tradier CLI.
//!
//! The brokerage API answers with loosely-typed JSON whose shape varies with
//! the number of results, the account type and the order class. [`json`]
//! gives every caller a total, panic-free way to reach into such a document;
//! [`occ`] turns OCC option codes into something a human can read.

pub mod json;
pub mod occ;

pub use json::Object;
pub use occ::{OptionKind, OptionSymbol, humanize};
