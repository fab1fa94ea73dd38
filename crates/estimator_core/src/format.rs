/// Formats a currency amount as whole US dollars, e.g. `$220,000` or `-$1,235`.
pub fn format_currency(value: f64) -> String {
    let (sign, digits) = whole_digits(value);
    format!("{sign}${digits}")
}

/// Formats a count or area as a whole number with thousands separators.
pub fn format_count(value: f64) -> String {
    let (sign, digits) = whole_digits(value);
    format!("{sign}{digits}")
}

/// Rounds half away from zero and groups the integer digits.
fn whole_digits(value: f64) -> (&'static str, String) {
    if value.is_nan() {
        return ("", "NaN".to_string());
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    if rounded.is_infinite() {
        return (sign, "∞".to_string());
    }
    (sign, group_thousands(&format!("{:.0}", rounded.abs())))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
