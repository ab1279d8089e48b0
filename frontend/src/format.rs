//! Japanese date and time labels for the event tables.
//!
//! Malformed input is never an error: it is handed back unchanged so the
//! template still shows something.

/// `YYYY-MM-DD` to `YYYY年M月D日`.
///
/// ```
/// use print_calendar_ui::format_date;
///
/// assert_eq!(format_date("2024-09-07"), "2024年9月7日");
/// assert_eq!(format_date("2024/09/07"), "2024/09/07");
/// ```
pub fn format_date(date: &str) -> String {
    if date.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = date.split('-').collect();
    let [year, month, day] = parts.as_slice() else {
        return date.to_string();
    };

    match (leading_int(month), leading_int(day)) {
        (Some(month), Some(day)) => format!("{year}年{month}月{day}日"),
        _ => date.to_string(),
    }
}

/// `HH:MM` to `H時M分`.
///
/// ```
/// use print_calendar_ui::format_time;
///
/// assert_eq!(format_time("09:05"), "9時5分");
/// ```
pub fn format_time(time: &str) -> String {
    if time.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = time.split(':').collect();
    let [hour, minute] = parts.as_slice() else {
        return time.to_string();
    };

    match (leading_int(hour), leading_int(minute)) {
        (Some(hour), Some(minute)) => format!("{hour}時{minute}分"),
        _ => time.to_string(),
    }
}

/// Integer prefix of `s`, the way `parseInt(s)` reads it.
///
/// Without a radix `parseInt` treats a `0x`/`0X` prefix as hexadecimal, so
/// `"0x1"` reads as `1`. Decimal runs are kept as text so they never
/// overflow; hex runs wider than 128 bits are rejected.
fn leading_int(s: &str) -> Option<String> {
    let s = s.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = match rest.get(..2) {
        Some("0x") | Some("0X") => hex_prefix(&rest[2..])?,
        _ => decimal_prefix(rest)?,
    };

    if magnitude == "0" || !negative {
        Some(magnitude)
    } else {
        Some(format!("-{magnitude}"))
    }
}

fn decimal_prefix(s: &str) -> Option<String> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    let trimmed = digits.trim_start_matches('0');
    Some(if trimmed.is_empty() { "0" } else { trimmed }.to_string())
}

fn hex_prefix(s: &str) -> Option<String> {
    let end = s.find(|c: char| !c.is_ascii_hexdigit()).unwrap_or(s.len());
    let digits = &s[..end];
    if digits.is_empty() {
        return None;
    }

    u128::from_str_radix(digits, 16).ok().map(|value| value.to_string())
}
