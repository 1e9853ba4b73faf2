//! # Presentation Layer
//!
//! Turns raw API responses into terminal output.
//!
//! ## Data Flow
//!
//! ```text
//! [ Handler ] --> [ Renderer ] ==(json)==> [ tradier_core::json::to_pretty ] --> Output
//!                      |
//!                      +====(table)====> [ Presenter ] --> [ Report ] --> [ View ] --> Output
//!                                         (Converter)       (Data)       (Layout)
//! ```
//!
//! ## Rules
//!
//! ### 1. Presenters never fail
//! A presenter takes the response bytes and always returns a [`Report`]. If the
//! bytes are not a JSON object the report is the bytes themselves. If the
//! envelope is missing the report is a one-line notice.
//!
//! ### 2. Reports hold final strings
//! Unlike a JSON API, a [`Report`] is the last stop before the terminal. Cells
//! are already formatted (money, percents, humanized option symbols), so views
//! only do layout.
//!
//! ### 3. Raw mode bypasses presenters
//! `--json` re-serialises the document with two-space indentation and never
//! touches a presenter.
//!
//! ## Directory Guide
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Support a new response kind | **`presenters/`** + `ResourceKind` |
//! | Change a column set or notice | **`presenters/`** |
//! | Change how money or dates look | **`formatters/`** |
//! | Change table borders or colours | **`views/`** |
//! | Change where output goes | **`renderers/`** |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

// Re-exports for convenience
pub use renderers::ConsoleRenderer;
pub use view_models::{Block, Report};
