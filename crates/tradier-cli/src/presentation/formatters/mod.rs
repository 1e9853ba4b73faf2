pub mod number;
pub mod text;

pub use number::{fixed2, money, percent, signed2, whole};
pub use text::short_date;
