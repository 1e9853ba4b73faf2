// NOTE: tradier CLI layout
//
// Responses are rendered schema-on-read:
// - The brokerage API is not self-describing. One result arrives as a bare
//   object, several as an array; detail fields hide under keys named by other
//   fields; the same envelope is spelled more than one way across endpoints.
// - Presenters read the raw document through tradier_core::json, whose
//   accessors never fail, and always produce *some* output: a table, a
//   "no data" notice, or the bytes exactly as received.
// - The HTTP transport is not part of this crate. `tradier render` takes a
//   saved response on disk or stdin.

mod args;
mod commands;
pub mod config;
pub mod error;
mod handlers;
pub mod presentation;
pub mod telemetry;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand};
pub use commands::run;
