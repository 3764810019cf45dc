/// Normalizes a spreadsheet date (`M/D/YY` or `M/D/YYYY`) to `YYYY-MM-DD`.
///
/// Returns an empty string for blank input or anything that does not split
/// into exactly three `/`-separated parts. Calendar validity is not checked,
/// and two-digit years are always placed in the 2000s.
pub fn parse_date(date_str: &str) -> String {
    let trimmed = date_str.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let parts: Vec<&str> = trimmed.split('/').collect();
    let [month, day, year] = parts.as_slice() else {
        return String::new();
    };

    let year = if year.chars().count() == 2 {
        format!("20{}", year)
    } else {
        year.to_string()
    };

    format!("{}-{:0>2}-{:0>2}", year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_digit_year() {
        assert_eq!(parse_date("3/4/25"), "2025-03-04");
        assert_eq!(parse_date("11/30/24"), "2024-11-30");
    }

    #[test]
    fn test_four_digit_year() {
        assert_eq!(parse_date("12/1/1999"), "1999-12-01");
        assert_eq!(parse_date("06/15/2026"), "2026-06-15");
    }

    #[test]
    fn test_blank_and_malformed() {
        assert_eq!(parse_date(""), "");
        assert_eq!(parse_date("   "), "");
        assert_eq!(parse_date("bad"), "");
        assert_eq!(parse_date("1/2"), "");
        assert_eq!(parse_date("1/2/3/4"), "");
        assert_eq!(parse_date("2025-03-04"), "");
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        assert_eq!(parse_date("  7/9/25 \r"), "2025-07-09");
    }

    #[test]
    fn test_no_calendar_validation() {
        assert_eq!(parse_date("13/45/99"), "2099-13-45");
    }

    #[test]
    fn test_two_digit_years_always_land_in_2000s() {
        assert_eq!(parse_date("1/1/98"), "2098-01-01");
    }

    #[test]
    fn test_padding_keeps_longer_parts() {
        assert_eq!(parse_date("003/4/2025"), "2025-003-04");
    }

    #[test]
    fn test_empty_parts_are_structurally_valid() {
        assert_eq!(parse_date("1/2/"), "-01-02");
    }
}
