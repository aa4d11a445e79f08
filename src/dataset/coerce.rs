//! Lenient property coercion
//!
//! Source properties arrive as loosely typed JSON. Numeric fields fall back
//! to 0 whenever they are missing, blank, or not a number. Infinite values
//! also become 0 so averages and JSON output stay finite.

use serde_json::Value;

/// Coerce a property to a finite number, or 0
pub fn number(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                0.0
            } else {
                parse_numeric(trimmed).unwrap_or(0.0)
            }
        }
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };

    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Decimal or exponent notation, or an unsigned `0x`/`0o`/`0b` integer
fn parse_numeric(s: &str) -> Option<f64> {
    let prefixed = [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)];
    for (prefix, radix) in prefixed {
        if let Some(digits) = s.strip_prefix(prefix) {
            if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
                return None;
            }
            return u128::from_str_radix(digits, radix).ok().map(|v| v as f64);
        }
    }

    s.parse::<f64>().ok()
}

/// Coerce a property to text: strings verbatim, numbers in decimal form
///
/// Whole floats render without a fraction so `5.0` and `5` both become `"5"`.
pub fn text(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) => Some(s.clone()),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| {
                    if f.fract() == 0.0 && f.abs() < 1e15 {
                        format!("{}", f as i64)
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_number_passthrough_and_strings() {
        assert_eq!(number(Some(&json!(12.5))), 12.5);
        assert_eq!(number(Some(&json!("42"))), 42.0);
        assert_eq!(number(Some(&json!(" 7.25 "))), 7.25);
    }

    #[test]
    fn test_number_defaults_to_zero() {
        assert_eq!(number(None), 0.0);
        assert_eq!(number(Some(&Value::Null)), 0.0);
        assert_eq!(number(Some(&json!(""))), 0.0);
        assert_eq!(number(Some(&json!("n/a"))), 0.0);
        assert_eq!(number(Some(&json!("1,234"))), 0.0);
        assert_eq!(number(Some(&json!("NaN"))), 0.0);
        assert_eq!(number(Some(&json!([1, 2]))), 0.0);
        assert_eq!(number(Some(&json!(false))), 0.0);
        assert_eq!(number(Some(&json!(true))), 1.0);
    }

    #[test]
    fn test_number_radix_prefixes() {
        assert_eq!(number(Some(&json!("0x10"))), 16.0);
        assert_eq!(number(Some(&json!("0XfF"))), 255.0);
        assert_eq!(number(Some(&json!("0o17"))), 15.0);
        assert_eq!(number(Some(&json!("0b101"))), 5.0);
        assert_eq!(number(Some(&json!("0x"))), 0.0);
        assert_eq!(number(Some(&json!("0x1g"))), 0.0);
        assert_eq!(number(Some(&json!("0x+1"))), 0.0);
        assert_eq!(number(Some(&json!("-0x10"))), 0.0);
    }

    #[test]
    fn test_number_infinity_is_zero() {
        assert_eq!(number(Some(&json!("Infinity"))), 0.0);
        assert_eq!(number(Some(&json!("-Infinity"))), 0.0);
        assert_eq!(number(Some(&json!("1e400"))), 0.0);
    }

    #[test]
    fn test_text() {
        assert_eq!(text(Some(&json!("5"))), Some("5".to_string()));
        assert_eq!(text(Some(&json!(5))), Some("5".to_string()));
        assert_eq!(text(Some(&json!(5.0))), Some("5".to_string()));
        assert_eq!(text(Some(&json!(5.5))), Some("5.5".to_string()));
        assert_eq!(text(Some(&Value::Null)), None);
        assert_eq!(text(None), None);
    }
}
