//! Number formatting for cards and tables

/// Group thousands with commas and keep at most three fraction digits
///
/// `1234567` → `"1,234,567"`, `1234.5` → `"1,234.5"`.
pub fn grouped(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let scaled = (value.abs() * 1000.0).round();
    let whole = (scaled / 1000.0).trunc();
    let fraction = (scaled - whole * 1000.0) as u64;

    let digits = format!("{:.0}", whole);
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 5);
    if value < 0.0 && scaled > 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    if fraction > 0 {
        let frac = format!("{:03}", fraction);
        out.push('.');
        out.push_str(frac.trim_end_matches('0'));
    }

    out
}

/// Fixed two-decimal kWh value
pub fn kwh(value: f64) -> String {
    format!("{:.2}", value)
}
