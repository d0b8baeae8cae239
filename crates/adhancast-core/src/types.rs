//! Provider data model — shared between the timings client and the schedule
//! compiler.

use std::collections::BTreeMap;

/// Flat mapping of prayer name to a 12-hour `"H:MM"` clock string, as
/// returned by the timings provider for the current day.
///
/// The upstream key set is `imsak`, `fajr`, `sunrise`, `dhuhr`, `sunset`,
/// `maghrib`, `midnight`. Values carry no AM/PM marker; disambiguation
/// happens in the schedule compiler.
pub type PrayerTimes = BTreeMap<String, String>;
