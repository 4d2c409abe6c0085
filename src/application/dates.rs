use chrono::DateTime;

/// Best-effort reformat of a feed pub date. RSS dates are RFC-2822,
/// e.g. "Mon, 02 Jun 2025 10:00:00 GMT"; a successful parse is
/// re-emitted as "YYYY-MM-DD HH:MM:SS" in the date's own offset.
/// Anything unparseable passes through unchanged so one odd feed entry
/// cannot abort a scan.
pub fn normalize_pub_date(raw: &str) -> String {
    match DateTime::parse_from_rfc2822(raw) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rfc2822_date_is_reformatted() {
        assert_eq!(
            normalize_pub_date("Mon, 02 Jun 2025 10:00:00 GMT"),
            "2025-06-02 10:00:00"
        );
    }

    #[test]
    fn test_numeric_offset_keeps_local_time() {
        assert_eq!(
            normalize_pub_date("Tue, 03 Jun 2025 23:59:59 +0200"),
            "2025-06-03 23:59:59"
        );
    }

    #[test]
    fn test_garbage_passes_through_unchanged() {
        assert_eq!(normalize_pub_date("garbage"), "garbage");
        assert_eq!(normalize_pub_date(""), "");
        assert_eq!(normalize_pub_date("2025-06-02"), "2025-06-02");
    }
}
