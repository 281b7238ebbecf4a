//! Row-to-entity parsing helpers.
//!
//! Every repo needs to convert `libsql::Row` (column-indexed) into typed entity
//! structs. These helpers isolate the parsing logic and handle the dual datetime
//! format issue (`SQLite`'s `datetime('now')` vs Rust's `to_rfc3339()`).

use std::str::FromStr;

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use hato_core::errors::CoreError;

use crate::error::DatabaseError;

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00+00:00"`) and `SQLite`'s default
/// format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a required TEXT column as `DateTime<FixedOffset>`.
///
/// Logbook timestamps keep the offset they were written with, so unlike
/// [`parse_datetime`] this does not renormalize to UTC. Offset-less strings
/// from older rows are read back as UTC.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_stamped(s: &str) -> Result<DateTime<FixedOffset>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc().fixed_offset())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Parse a required TEXT column as `NaiveDate` (`"2026-02-09"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string is not an ISO calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DatabaseError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| DatabaseError::Query(format!("Failed to parse date '{s}': {e}")))
}

/// Parse an optional TEXT column as `Option<NaiveDate>`.
///
/// # Errors
///
/// Returns `DatabaseError::Query` if a non-empty string cannot be parsed.
pub fn parse_optional_date(s: Option<&str>) -> Result<Option<NaiveDate>, DatabaseError> {
    match s {
        Some(s) if !s.is_empty() => Ok(Some(parse_date(s)?)),
        _ => Ok(None),
    }
}

/// Parse a TEXT column into one of the hato-core string enums
/// (`Sex`, `AnimalStatus`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string does not match any variant.
pub fn parse_tagged<T>(s: &str) -> Result<T, DatabaseError>
where
    T: FromStr<Err = CoreError>,
{
    s.parse::<T>()
        .map_err(|e| DatabaseError::Query(format!("Bad enum value in column: {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
/// You must use `get::<Option<String>>()` for nullable columns.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Rowid of the most recent INSERT on this connection.
///
/// # Errors
///
/// Returns `DatabaseError` if the query fails or returns no rows.
pub async fn last_insert_id(conn: &libsql::Connection) -> Result<i64, DatabaseError> {
    let mut rows = conn.query("SELECT last_insert_rowid()", ()).await?;
    let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
    Ok(row.get::<i64>(0)?)
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("2026-02-09T14:30:00+00:00", 14)]
    #[case("2026-02-09T14:30:00-06:00", 20)]
    #[case("2026-02-09 14:30:00", 14)]
    fn datetime_accepts_both_storage_formats(#[case] raw: &str, #[case] utc_hour: u32) {
        let dt = parse_datetime(raw).unwrap();
        assert_eq!(dt.hour(), utc_hour);
    }

    #[rstest]
    #[case("2026-02-09T14:30:00-06:00", -6 * 3600)]
    #[case("2026-02-09T14:30:00+00:00", 0)]
    #[case("2026-02-09 14:30:00", 0)]
    fn stamped_keeps_the_written_offset(#[case] raw: &str, #[case] offset_secs: i32) {
        let dt = parse_stamped(raw).unwrap();
        assert_eq!(dt.offset().local_minus_utc(), offset_secs);
        assert_eq!(dt.hour(), 14);
    }

    #[test]
    fn garbage_datetime_is_a_query_error() {
        let err = parse_datetime("not a date").unwrap_err();
        assert!(matches!(err, DatabaseError::Query(_)));
    }

    #[test]
    fn optional_date_treats_empty_as_none() {
        assert_eq!(parse_optional_date(None).unwrap(), None);
        assert_eq!(parse_optional_date(Some("")).unwrap(), None);
        assert_eq!(
            parse_optional_date(Some("2026-02-09")).unwrap(),
            NaiveDate::from_ymd_opt(2026, 2, 9)
        );
    }
}
