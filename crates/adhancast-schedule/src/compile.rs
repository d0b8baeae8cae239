//! Prayer-time to cron-entry compilation.
//!
//! The provider emits 12-hour `"H:MM"` strings with no AM/PM marker, so
//! hours are disambiguated with a hardcoded list of names known to fall in
//! the afternoon/evening. This heuristic is inherited from the upstream
//! format — names outside the list whose true time passes 12:00 would come
//! out wrong, a known limitation kept on purpose until the provider emits
//! qualified times.

use chrono::{DateTime, Datelike, Local, Timelike};

use adhancast_core::{AdhanError, PrayerTimes, Result};

use crate::command::CastCommand;
use crate::entry::CronEntry;

/// Prayer names always shifted to PM when the parsed hour is 1–11.
const PM_PRAYERS: [&str; 3] = ["dhuhr", "sunset", "maghrib"];

/// Parse a provider `"H:MM"` value into (hour, minute).
fn parse_clock(raw: &str) -> Result<(u32, u32)> {
    let (h, m) = raw
        .trim()
        .split_once(':')
        .ok_or_else(|| AdhanError::InvalidTime(raw.into()))?;
    let hour: u32 = h.parse().map_err(|_| AdhanError::InvalidTime(raw.into()))?;
    let minute: u32 = m.parse().map_err(|_| AdhanError::InvalidTime(raw.into()))?;
    // A value that can't land in a crontab field would poison the whole
    // table write, so out-of-range counts as malformed too.
    if hour > 23 || minute > 59 {
        return Err(AdhanError::InvalidTime(raw.into()));
    }
    Ok((hour, minute))
}

/// Apply the PM heuristic: for the known-PM names, hours 1–11 become 13–23;
/// noon stays 12. Every other name passes through unchanged.
fn to_24h(name: &str, hour: u32) -> u32 {
    let lower = name.to_ascii_lowercase();
    if PM_PRAYERS.contains(&lower.as_str()) && (1..12).contains(&hour) {
        hour + 12
    } else {
        hour
    }
}

/// Compile the fetched map plus the user's selection into daily entries.
///
/// Matching is case-insensitive; names missing on either side are skipped.
/// One malformed time value fails the whole compilation, so nothing gets
/// installed over a half-built schedule.
pub fn compile(
    times: &PrayerTimes,
    selection: &[String],
    cast: &CastCommand,
) -> Result<Vec<CronEntry>> {
    let wanted: Vec<String> = selection.iter().map(|p| p.to_ascii_lowercase()).collect();

    let mut entries = Vec::new();
    for (prayer, raw) in times {
        if !wanted.contains(&prayer.to_ascii_lowercase()) {
            continue;
        }
        let (parsed_hour, minute) = parse_clock(raw)?;
        let hour = to_24h(prayer, parsed_hour);
        if hour != parsed_hour {
            tracing::debug!("Converted {prayer} time to PM: {hour}:{minute:02}");
        }
        tracing::info!("📅 Scheduled {prayer} at {raw} ({hour}:{minute:02})");
        entries.push(CronEntry::daily(minute, hour, cast.render(prayer)));
    }
    Ok(entries)
}

/// Test-mode override: one entry firing one minute after `now`, with day
/// and month pinned. It recurs yearly on that date — the table has no true
/// one-shot, a quirk inherited from the recurrence format.
pub fn compile_test(now: DateTime<Local>, cast: &CastCommand) -> CronEntry {
    let fire = now + chrono::Duration::minutes(1);
    tracing::info!(
        "🔔 Test trigger at {}:{:02} (1 minute from now)",
        fire.hour(),
        fire.minute()
    );
    CronEntry::pinned(
        fire.minute(),
        fire.hour(),
        fire.day(),
        fire.month(),
        cast.render("test"),
    )
}
