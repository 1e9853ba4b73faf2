//! OCC option symbols.
//!
//! An OCC code is a root ticker followed by a fixed 15-character tail:
//! `YYMMDD` expiry, `C` or `P`, and an 8-digit strike in thousandths of a
//! dollar. `UNG260220P00014000` is the UNG put expiring 2026-02-20 at $14.

use std::fmt;

/// Width of the date + type + strike tail.
pub const SUFFIX_LEN: usize = 15;

const DATE_LEN: usize = 6;
const STRIKE_LEN: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    Call,
    Put,
}

impl OptionKind {
    fn from_code(code: u8) -> Option<Self> {
        match code {
            b'C' => Some(OptionKind::Call),
            b'P' => Some(OptionKind::Put),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            OptionKind::Call => 'C',
            OptionKind::Put => 'P',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OptionKind::Call => "Call",
            OptionKind::Put => "Put",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded OCC symbol borrowing its root from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSymbol<'a> {
    pub root: &'a str,
    pub year: u8,
    pub month: u8,
    pub day: u8,
    pub kind: OptionKind,
    pub strike_thousandths: u32,
}

impl<'a> OptionSymbol<'a> {
    /// Decode `symbol`, or `None` if its tail is not a valid OCC suffix.
    ///
    /// Checks run in order: six date digits, then `C`/`P`, then eight strike
    /// digits. Calendar validity of the date is not checked.
    pub fn parse(symbol: &'a str) -> Option<Self> {
        let bytes = symbol.as_bytes();
        let split = bytes.len().checked_sub(SUFFIX_LEN)?;
        let suffix = &bytes[split..];

        let (date, rest) = suffix.split_at(DATE_LEN);
        if !date.iter().all(u8::is_ascii_digit) {
            return None;
        }
        let kind = OptionKind::from_code(rest[0])?;
        let strike = &rest[1..];
        debug_assert_eq!(strike.len(), STRIKE_LEN);
        if !strike.iter().all(u8::is_ascii_digit) {
            return None;
        }

        // The suffix is ASCII, so `split` is always a char boundary.
        let root = symbol.get(..split)?;

        Some(Self {
            root,
            year: digits(&date[0..2]) as u8,
            month: digits(&date[2..4]) as u8,
            day: digits(&date[4..6]) as u8,
            kind,
            strike_thousandths: digits(strike),
        })
    }

    pub fn strike(&self) -> f64 {
        f64::from(self.strike_thousandths) / 1000.0
    }

    /// `$14` for whole-dollar strikes, `$27.05` otherwise.
    pub fn strike_label(&self) -> String {
        if self.strike_thousandths % 1000 == 0 {
            format!("${}", self.strike_thousandths / 1000)
        } else {
            format!("${:.2}", self.strike())
        }
    }

    /// Reassemble the fixed-width OCC code.
    pub fn to_occ(&self) -> String {
        format!(
            "{}{:02}{:02}{:02}{}{:0width$}",
            self.root,
            self.year,
            self.month,
            self.day,
            self.kind.code(),
            self.strike_thousandths,
            width = STRIKE_LEN
        )
    }
}

impl fmt::Display for OptionSymbol<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:02}/{:02}/{:02} {} {}",
            self.root,
            self.month,
            self.day,
            self.year,
            self.strike_label(),
            self.kind
        )
    }
}

/// Readable form of an OCC symbol, or `symbol` unchanged when it is not one.
///
/// Humanizing an already humanized string is a no-op.
pub fn humanize(symbol: &str) -> String {
    match OptionSymbol::parse(symbol) {
        Some(parsed) => parsed.to_string(),
        None => symbol.to_string(),
    }
}

fn digits(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_humanize_call() {
        assert_eq!(humanize("AAPL220617C00270000"), "AAPL 06/17/22 $270 Call");
    }

    #[test]
    fn test_humanize_put_whole_strike() {
        assert_eq!(humanize("UNG260220P00014000"), "UNG 02/20/26 $14 Put");
    }

    #[test]
    fn test_humanize_fractional_strike() {
        assert_eq!(humanize("SPY240119C00027050"), "SPY 01/19/24 $27.05 Call");
        assert_eq!(humanize("F240119P00012500"), "F 01/19/24 $12.50 Put");
    }

    #[test]
    fn test_short_input_is_unchanged() {
        assert_eq!(humanize(""), "");
        assert_eq!(humanize("AAPL"), "AAPL");
        assert_eq!(humanize("20617C00270000"), "20617C00270000");
    }

    #[test]
    fn test_bare_suffix_has_empty_root() {
        let parsed = OptionSymbol::parse("220617C00270000").unwrap();
        assert_eq!(parsed.root, "");
        assert_eq!(parsed.to_string(), " 06/17/22 $270 Call");
    }

    #[test]
    fn test_invalid_suffix_is_unchanged() {
        // letter in the date
        assert_eq!(humanize("AAPL22O617C00270000"), "AAPL22O617C00270000");
        // unknown type code
        assert_eq!(humanize("AAPL220617X00270000"), "AAPL220617X00270000");
        // lowercase type code
        assert_eq!(humanize("AAPL220617c00270000"), "AAPL220617c00270000");
        // non-digit strike
        assert_eq!(humanize("AAPL220617C0027000A"), "AAPL220617C0027000A");
    }

    #[test]
    fn test_humanize_is_idempotent() {
        let once = humanize("AAPL220617C00270000");
        assert_eq!(humanize(&once), once);
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert_eq!(humanize("ÄÖÜ220617C0027000é"), "ÄÖÜ220617C0027000é");
        assert_eq!(humanize("ÄÖÜ220617C00270000"), "ÄÖÜ 06/17/22 $270 Call");
    }

    #[test]
    fn test_parse_fields() {
        let parsed = OptionSymbol::parse("UNG260220P00014000").unwrap();
        assert_eq!(parsed.root, "UNG");
        assert_eq!((parsed.year, parsed.month, parsed.day), (26, 2, 20));
        assert_eq!(parsed.kind, OptionKind::Put);
        assert_eq!(parsed.strike_thousandths, 14_000);
        assert_eq!(parsed.strike(), 14.0);
        assert_eq!(parsed.to_occ(), "UNG260220P00014000");
    }
}
