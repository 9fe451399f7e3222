/// Current UTC timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Parse a path segment into a record id.
///
/// Ids travel as decimal strings in URLs; anything else is rejected so
/// handlers can answer with a client error.
pub fn parse_id(raw: &str) -> Result<i64, crate::error::AppError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|id| *id > 0)
        .ok_or_else(|| crate::error::AppError::invalid_id(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn parse_id_accepts_decimal() {
        assert_eq!(parse_id("12345").unwrap(), 12345);
    }

    #[test]
    fn parse_id_rejects_garbage() {
        for raw in ["", "abc", "65a1f0c2e4b0", "-4", "0", "1.5"] {
            let err = parse_id(raw).unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidId, "input {raw:?}");
        }
    }
}
