use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};

/// Accepts RFC3339, offset or naive `%Y-%m-%d %H:%M:%S`, and raw epoch
/// seconds or milliseconds (the Binance export writes milliseconds).
pub(crate) fn parse_timestamp(value: &str) -> Result<i64, String> {
    let trimmed = value.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.timestamp());
    }
    if let Ok(dt) = DateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%z") {
        return Ok(dt.timestamp());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&naive).timestamp());
    }
    if let Ok(epoch) = trimmed.parse::<i64>() {
        // Millisecond timestamps for any date after 2001 exceed 1e12.
        if epoch >= 1_000_000_000_000 {
            return Ok(epoch / 1000);
        }
        return Ok(epoch);
    }

    Err(format!("unsupported timestamp format: {value}"))
}

#[cfg(test)]
mod tests {
    use super::parse_timestamp;

    #[test]
    fn parses_rfc3339() {
        assert_eq!(parse_timestamp("1970-01-01T01:00:00Z").expect("parse"), 3600);
    }

    #[test]
    fn parses_naive_as_utc() {
        assert_eq!(parse_timestamp("1970-01-01 00:01:00").expect("parse"), 60);
    }

    #[test]
    fn parses_epoch_millis() {
        assert_eq!(parse_timestamp("1651363200000").expect("parse"), 1_651_363_200);
        assert_eq!(parse_timestamp("1651363200").expect("parse"), 1_651_363_200);
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_timestamp("yesterday").is_err());
    }
}
