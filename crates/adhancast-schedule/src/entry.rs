//! Crontab entry model — the unit the compiler emits and the adapter
//! installs. Lines are 5-field recurrence-table format:
//! `MIN HOUR DOM MON DOW command`.

use serde::{Deserialize, Serialize};

/// Constant ownership marker appended to every line this tool writes, used
/// to identify and bulk-remove its own entries without disturbing unrelated
/// lines in the same table. It rides at end-of-command as a shell comment,
/// so cron executes the command unchanged.
pub const OWNER_TAG: &str = "adhancast";

/// One crontab line. `None` day/month render as `*`; weekday is always `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CronEntry {
    pub minute: u32,
    pub hour: u32,
    pub day: Option<u32>,
    pub month: Option<u32>,
    pub command: String,
}

impl CronEntry {
    /// Entry recurring every day at `hour:minute`.
    pub fn daily(minute: u32, hour: u32, command: impl Into<String>) -> Self {
        Self {
            minute,
            hour,
            day: None,
            month: None,
            command: command.into(),
        }
    }

    /// Entry pinned to an explicit day-of-month and month. Still recurs
    /// yearly on that date — the table format has no one-shot notion.
    pub fn pinned(minute: u32, hour: u32, day: u32, month: u32, command: impl Into<String>) -> Self {
        Self {
            minute,
            hour,
            day: Some(day),
            month: Some(month),
            command: command.into(),
        }
    }

    /// Render as a crontab line bearing `tag`.
    pub fn render(&self, tag: &str) -> String {
        format!(
            "{} {} {} {} * {} # {}",
            self.minute,
            self.hour,
            field(self.day),
            field(self.month),
            self.command,
            tag
        )
    }

    /// Whether a raw table line bears `tag`.
    pub fn line_has_tag(line: &str, tag: &str) -> bool {
        line.trim_end()
            .ends_with(&format!("# {tag}"))
    }

    /// Parse a line previously produced by [`render`](Self::render).
    /// Foreign or untagged lines return `None`.
    pub fn parse_tagged(line: &str, tag: &str) -> Option<Self> {
        let line = line.trim_end();
        let rest = line.strip_suffix(&format!("# {tag}"))?;
        let mut parts = rest.splitn(6, ' ');
        let minute = parts.next()?.parse().ok()?;
        let hour = parts.next()?.parse().ok()?;
        let day = parse_field(parts.next()?)?;
        let month = parse_field(parts.next()?)?;
        let _weekday = parts.next()?;
        let command = parts.next()?.trim().to_string();
        Some(Self {
            minute,
            hour,
            day,
            month,
            command,
        })
    }
}

fn field(v: Option<u32>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "*".into(),
    }
}

fn parse_field(s: &str) -> Option<Option<u32>> {
    if s == "*" {
        Some(None)
    } else {
        s.parse().ok().map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daily_entry_renders_five_fields_and_tag() {
        let entry = CronEntry::daily(23, 5, "catt -d Kitchen cast adhan.mp4");
        assert_eq!(
            entry.render(OWNER_TAG),
            "23 5 * * * catt -d Kitchen cast adhan.mp4 # adhancast"
        );
    }

    #[test]
    fn pinned_entry_carries_day_and_month() {
        let entry = CronEntry::pinned(1, 14, 9, 3, "true");
        assert_eq!(entry.render("t"), "1 14 9 3 * true # t");
    }

    #[test]
    fn tag_detection_ignores_foreign_lines() {
        assert!(CronEntry::line_has_tag("0 0 * * * backup.sh # adhancast", OWNER_TAG));
        assert!(!CronEntry::line_has_tag("0 0 * * * backup.sh", OWNER_TAG));
        assert!(!CronEntry::line_has_tag("0 0 * * * backup.sh # nightly", OWNER_TAG));
        assert!(!CronEntry::line_has_tag("MAILTO=ops@example.com", OWNER_TAG));
    }

    #[test]
    fn rendered_lines_parse_back() {
        let daily = CronEntry::daily(45, 23, "echo hi >> /var/log/x 2>&1 && catt cast a");
        let pinned = CronEntry::pinned(2, 19, 31, 12, "true");
        assert_eq!(
            CronEntry::parse_tagged(&daily.render(OWNER_TAG), OWNER_TAG),
            Some(daily)
        );
        assert_eq!(
            CronEntry::parse_tagged(&pinned.render(OWNER_TAG), OWNER_TAG),
            Some(pinned)
        );
    }

    #[test]
    fn foreign_lines_do_not_parse() {
        assert_eq!(CronEntry::parse_tagged("# a comment", OWNER_TAG), None);
        assert_eq!(
            CronEntry::parse_tagged("0 0 * * * backup.sh # nightly", OWNER_TAG),
            None
        );
    }
}
