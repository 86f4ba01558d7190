//! Date helper functions

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone};

/// Parse a frontmatter date string in the formats portfolio content
/// actually uses. Returns `None` for anything unrecognized; callers
/// decide how unparseable dates sort.
pub fn parse_date_string(s: &str) -> Option<DateTime<Local>> {
    let s = s.trim();

    let datetime_formats = [
        "%Y-%m-%d %H:%M:%S",
        "%Y/%m/%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return naive_to_local(dt);
        }
    }

    let date_formats = ["%Y-%m-%d", "%Y/%m/%d"];
    for fmt in date_formats {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return naive_to_local(d.and_hms_opt(0, 0, 0)?);
        }
    }

    // Try RFC 3339 / ISO 8601 with offset
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Local));
    }

    None
}

/// Interpret a naive datetime as local wall-clock time. Ambiguous
/// times (DST fold) take the earlier instant; times skipped by a DST
/// gap shift forward an hour.
fn naive_to_local(dt: NaiveDateTime) -> Option<DateTime<Local>> {
    Local
        .from_local_datetime(&dt)
        .earliest()
        .or_else(|| Local.from_local_datetime(&(dt + Duration::hours(1))).earliest())
}
