//! Display formatters for avatars, clocks and money.

/// Avatar initials for a display name or email address.
///
/// - Blank input yields `"U"`.
/// - Emails use their first two characters.
/// - Names use the first letter of the first two words.
pub fn initials(name_or_email: &str) -> String {
    let s = name_or_email.trim();
    if s.is_empty() {
        return "U".to_string();
    }
    if s.contains('@') {
        return s.chars().take(2).collect::<String>().to_uppercase();
    }

    let mut words = s.split_whitespace();
    let first = words.next().and_then(|w| w.chars().next()).unwrap_or('U');
    let second = words.next().and_then(|w| w.chars().next());

    let mut out: String = first.to_uppercase().collect();
    if let Some(c) = second {
        out.extend(c.to_uppercase());
    }
    out
}

/// Zero-padded `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_hms(total_secs: u64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

/// Group an integer with `,` every three digits.
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// US dollars rounded to whole units, e.g. `$1,235` or `-$40`.
pub fn format_currency(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", format_thousands(rounded.abs() as u64))
}

/// Price as the backend sent it, without rounding or grouping, e.g. `$19.99`
/// or `$49`.
pub fn format_price(amount: f64) -> String {
    format!("${amount}")
}
