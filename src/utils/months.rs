use chrono::{Datelike, NaiveDate};

/// Whether `month` has the zero-padded `"YYYY-MM"` shape the provider
/// promises. Grouping and label formatting both rely on it.
pub fn is_valid_month(month: &str) -> bool {
    parse_month(month).is_some()
}

fn parse_month(month: &str) -> Option<NaiveDate> {
    if month.len() != 7 || month.as_bytes().get(4) != Some(&b'-') {
        return None;
    }
    NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").ok()
}

/// Short axis label for a month, e.g. `"2024-03"` -> `"Mar '24"`.
///
/// Falls back to the raw string for unparseable input; labels are
/// presentation, never a reason to fail.
pub fn month_label(month: &str) -> String {
    match parse_month(month) {
        Some(date) => date.format("%b '%y").to_string(),
        None => month.to_string(),
    }
}

/// Full label for a month, e.g. `"2024-03"` -> `"March 2024"`.
pub fn month_label_full(month: &str) -> String {
    match parse_month(month) {
        Some(date) => date.format("%B %Y").to_string(),
        None => month.to_string(),
    }
}

/// The month string exactly twelve months earlier, e.g. `"2024-03"` ->
/// `"2023-03"`, or `None` for unparseable input.
pub fn year_earlier(month: &str) -> Option<String> {
    let date = parse_month(month)?;
    let prior = date.with_year(date.year() - 1)?;
    Some(prior.format("%Y-%m").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_month_labels() {
        assert_eq!(month_label("2024-03"), "Mar '24");
        assert_eq!(month_label_full("2024-03"), "March 2024");
        assert_eq!(month_label("2023-12"), "Dec '23");
    }

    #[test]
    fn test_label_falls_back_to_raw_string() {
        assert_eq!(month_label("latest"), "latest");
        assert_eq!(month_label_full("2024-13"), "2024-13");
    }

    #[test]
    fn test_is_valid_month() {
        assert!(is_valid_month("2024-01"));
        assert!(!is_valid_month("2024-1"));
        assert!(!is_valid_month("2024-00"));
        assert!(!is_valid_month(""));
        assert!(!is_valid_month("202401"));
    }

    #[test]
    fn test_year_earlier() {
        assert_eq!(year_earlier("2024-03").as_deref(), Some("2023-03"));
        assert_eq!(year_earlier("2024-01").as_deref(), Some("2023-01"));
        assert_eq!(year_earlier("garbage"), None);
    }
}
