// Views turn a Report into text. They only do layout; every cell arrives
// already formatted.

pub mod report;
pub mod table;

pub use report::{BlockView, ReportView};
pub use table::{NO_RESULTS, render_key_value, render_table};
