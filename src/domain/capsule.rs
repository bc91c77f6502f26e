use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, UtcOffset};
use uuid::Uuid;

/// A message to a future self. `open_date` is informational only and does not
/// gate reads; it is validated against the clock at write time.
#[derive(Debug, Clone)]
pub struct TimeCapsule {
    pub id: Uuid,
    pub user_id: Uuid,
    pub message: String,
    pub open_date: OffsetDateTime,
    pub created_at: OffsetDateTime,
}

const DATE_ONLY: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// Parses an open date from RFC 3339, falling back to a bare `YYYY-MM-DD`
/// (interpreted as midnight UTC). The result is always normalized to UTC, so
/// the stored text form sorts by instant regardless of the offset sent.
///
/// # Errors
/// Returns a human-readable message when neither format matches.
pub fn parse_open_date(raw: &str) -> Result<OffsetDateTime, String> {
    if let Ok(datetime) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Ok(datetime.to_offset(UtcOffset::UTC));
    }
    Date::parse(raw, DATE_ONLY)
        .map(|date| date.midnight().assume_utc())
        .map_err(|_| "Invalid open date. Use an ISO-8601 timestamp or YYYY-MM-DD.".to_string())
}

/// # Errors
/// Returns a human-readable message when the message is empty.
pub fn validate_message(message: &str) -> Result<(), String> {
    if message.is_empty() {
        return Err("Message cannot be empty.".to_string());
    }
    Ok(())
}

/// # Errors
/// Returns a human-readable message unless `open_date` is strictly after `now`.
pub fn validate_open_date(open_date: OffsetDateTime, now: OffsetDateTime) -> Result<(), String> {
    if open_date <= now {
        return Err("Open date must be in the future.".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn parses_rfc3339() {
        let parsed = parse_open_date("2099-06-15T10:30:00Z").unwrap();
        assert_eq!(parsed, datetime!(2099-06-15 10:30:00 UTC));
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let parsed = parse_open_date("2099-06-15T14:00:00+05:00").unwrap();
        assert_eq!(parsed, datetime!(2099-06-15 09:00:00 UTC));
        assert_eq!(parsed.offset(), UtcOffset::UTC);
    }

    #[test]
    fn parses_date_only_as_midnight_utc() {
        let parsed = parse_open_date("2099-06-15").unwrap();
        assert_eq!(parsed, datetime!(2099-06-15 00:00:00 UTC));
    }

    #[test]
    fn rejects_garbage_dates() {
        assert!(parse_open_date("soon").is_err());
        assert!(parse_open_date("2099-13-40").is_err());
        assert!(parse_open_date("").is_err());
    }

    #[test]
    fn open_date_must_be_strictly_future() {
        let now = datetime!(2026-01-01 12:00:00 UTC);
        assert!(validate_open_date(datetime!(2026-01-01 12:00:01 UTC), now).is_ok());
        assert!(validate_open_date(now, now).is_err());
        assert!(validate_open_date(datetime!(2025-12-31 12:00:00 UTC), now).is_err());
    }
}
