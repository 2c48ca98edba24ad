use chrono::{DateTime, Datelike, Utc};

/// Placeholder for an empty field the operator chose not to fill
pub const NOT_SPECIFIED: &str = "غير محدد";

/// Placeholder for an empty table cell
pub const DASH: &str = "-";

/// Fixed currency suffix (Libyan dinar)
pub const CURRENCY: &str = "د.ل";

/// `day/month/year` without zero padding, from the render instant
pub fn format_day_month_year(at: DateTime<Utc>) -> String {
    format!("{}/{}/{}", at.day(), at.month(), at.year())
}

/// Minimal escaping for operator-entered text interpolated into markup
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Escaped text, or the "not specified" placeholder when empty
pub fn or_not_specified(text: &str) -> String {
    if text.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        escape_html(text)
    }
}

/// Escaped text, or a dash when empty
pub fn or_dash(text: &str) -> String {
    if text.is_empty() {
        DASH.to_string()
    } else {
        escape_html(text)
    }
}

/// Escaped amount with the currency suffix, or the placeholder when empty
pub fn amount_or_not_specified(amount: &str) -> String {
    if amount.is_empty() {
        NOT_SPECIFIED.to_string()
    } else {
        format!("{} {}", escape_html(amount), CURRENCY)
    }
}
