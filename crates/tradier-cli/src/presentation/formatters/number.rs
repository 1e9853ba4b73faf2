// JSON can carry -0.0; print it as zero.
fn unsigned_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Dollar amount with the sign ahead of the `$`: `-$1234.50`, `$0.00`.
pub fn money(value: f64) -> String {
    let value = unsigned_zero(value);
    if value < 0.0 {
        format!("-${:.2}", -value)
    } else {
        format!("${:.2}", value)
    }
}

/// Percentage with an explicit sign: `+3.50%`, `-2.00%`.
pub fn percent(value: f64) -> String {
    let value = unsigned_zero(value);
    if value >= 0.0 {
        format!("+{:.2}%", value)
    } else {
        format!("{:.2}%", value)
    }
}

pub fn fixed2(value: f64) -> String {
    format!("{:.2}", unsigned_zero(value))
}

/// Two decimals with an explicit sign: `+1.25`, `-0.40`.
pub fn signed2(value: f64) -> String {
    format!("{:+.2}", unsigned_zero(value))
}

/// Rounded to a whole number: `10`, `-3`.
pub fn whole(value: f64) -> String {
    format!("{:.0}", unsigned_zero(value))
}
