use crate::error::{HeatfillError, Result};
use crate::model::Window;
use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, Timelike};

pub const DEFAULT_WINDOW_DAYS: u32 = 90;

/// Current local time without sub-second precision.
pub fn now_local() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Parse a window boundary relative to `now`.
///
/// Accepts RFC3339, `YYYY-MM-DD` (keeps the time of day of `now`),
/// `N days|weeks|months ago`, and humantime durations such as `90d` or `12weeks`
/// which are subtracted from `now`.
pub fn parse_boundary(input: &str, now: NaiveDateTime) -> Result<NaiveDateTime> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.with_timezone(&Local).naive_local());
    }

    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(now.time()));
    }

    let duration = parse_natural_duration(input)
        .or_else(|| humantime::parse_duration(input).ok())
        .ok_or_else(|| HeatfillError::InvalidDate(format!("Unrecognized date or duration '{input}'")))?;

    let duration = Duration::from_std(duration)
        .map_err(|_| HeatfillError::InvalidDate(format!("Duration overflow for '{input}'")))?;
    now.checked_sub_signed(duration)
        .ok_or_else(|| HeatfillError::InvalidDate(format!("Duration overflow for '{input}'")))
}

/// Resolve `--days`, `--since` and `--until` into a window ending at `until` (or `now`).
pub fn resolve_window(
    days: Option<u32>,
    since: Option<&str>,
    until: Option<&str>,
    now: NaiveDateTime,
) -> Result<Window> {
    let end = match until {
        Some(u) => parse_boundary(u, now)?,
        None => now,
    };

    let window = match since {
        Some(s) => Window::new(parse_boundary(s, now)?, end),
        None => Window::days_back(end, days.unwrap_or(DEFAULT_WINDOW_DAYS))?,
    };

    if window.start > window.end {
        return Err(HeatfillError::InvalidDate(format!(
            "Invalid range: since ({}) is after until ({})",
            window.start, window.end
        )));
    }

    Ok(window)
}

fn parse_natural_duration(input: &str) -> Option<std::time::Duration> {
    let input = input.trim().to_lowercase();

    if let Some(days) = input.strip_suffix(" days ago") {
        if let Ok(n) = days.trim().parse::<u64>() {
            return n.checked_mul(86400).map(std::time::Duration::from_secs);
        }
    }

    if let Some(weeks) = input.strip_suffix(" weeks ago") {
        if let Ok(n) = weeks.trim().parse::<u64>() {
            return n.checked_mul(7 * 86400).map(std::time::Duration::from_secs);
        }
    }

    if let Some(months) = input.strip_suffix(" months ago") {
        if let Ok(n) = months.trim().parse::<u64>() {
            return n.checked_mul(30 * 86400).map(std::time::Duration::from_secs);
        }
    }

    None
}
