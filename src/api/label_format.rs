use chrono::{DateTime, Utc};

/// Placeholder shown when a value cannot be formatted.
pub const MISSING_LABEL: &str = "--";

#[must_use]
pub fn format_percent(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return MISSING_LABEL.to_owned();
    }
    format!("{value:.digits$}%")
}

/// Groups an unsigned digit string as `xx,xx,xxx` (lakh/crore style).
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::with_capacity(head.len() / 2 + 2);
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

/// Whole-rupee amount with Indian digit grouping, e.g. `₹1,23,45,678`.
#[must_use]
pub fn format_currency_inr(value: f64) -> String {
    if value.is_nan() {
        return MISSING_LABEL.to_owned();
    }
    if value.is_infinite() {
        let sign = if value < 0.0 { "-" } else { "" };
        return format!("{sign}₹∞");
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}₹{}", group_indian(&digits))
}

/// Tooltip readout such as `NAV:₹101.25`.
#[must_use]
pub fn format_nav_value(value: f64, currency_symbol: &str) -> String {
    format!("NAV:{currency_symbol}{value:.2}")
}

/// `02 Jan 2024`.
#[must_use]
pub fn format_date_long(instant: DateTime<Utc>) -> String {
    instant.format("%d %b %Y").to_string()
}

/// `02 Jan 24`.
#[must_use]
pub fn format_date_short(instant: DateTime<Utc>) -> String {
    instant.format("%d %b %y").to_string()
}

#[cfg(test)]
mod tests {
    use super::{format_currency_inr, format_percent, group_indian};

    #[test]
    fn indian_grouping_splits_lakhs_and_crores() {
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1000"), "1,000");
        assert_eq!(group_indian("100000"), "1,00,000");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn currency_rounds_to_whole_units() {
        assert_eq!(format_currency_inr(11_200.4), "₹11,200");
        assert_eq!(format_currency_inr(-1_500.5), "-₹1,501");
        assert_eq!(format_currency_inr(0.2), "₹0");
        assert_eq!(format_currency_inr(f64::NAN), "--");
    }

    #[test]
    fn percent_honours_digits() {
        assert_eq!(format_percent(12.0, 2), "12.00%");
        assert_eq!(format_percent(7.456, 0), "7%");
        assert_eq!(format_percent(f64::NAN, 2), "--");
    }
}
