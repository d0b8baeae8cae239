//! Cast command construction — pure string building, no execution.
//!
//! Each cron entry runs an optional timestamped log marker followed by a
//! `catt` cast invocation. Execution and its success or failure happen
//! entirely at cron's fire time, outside this tool.

/// Builder for the shell command embedded in each cron entry.
#[derive(Debug, Clone)]
pub struct CastCommand {
    /// Chromecast device name, passed to `catt -d`.
    pub device: String,
    /// Media to cast: a local file path or a streaming URL.
    pub sound: String,
    /// Seek offset into the media before playback, in seconds.
    pub seek_secs: u32,
    /// Log file the command appends to. `None` drops the log marker and the
    /// redirections entirely.
    pub log_file: Option<String>,
}

impl CastCommand {
    /// Render the full shell command for one trigger. `label` names the
    /// prayer (or "test") in the log marker.
    pub fn render(&self, label: &str) -> String {
        let cast = format!(
            "catt -d {} cast {} --seek-to {}",
            sh_quote(&self.device),
            sh_quote(&self.sound),
            self.seek_secs
        );
        match &self.log_file {
            Some(log) => {
                let log = sh_quote(log);
                // The marker sits inside double quotes so $(date) expands at
                // fire time; the label is filtered to keep that string inert.
                let label = safe_label(label);
                format!(
                    "echo \"$(date): Starting {label} prayer time cast\" >> {log} 2>&1 && {cast} >> {log} 2>&1"
                )
            }
            None => cast,
        }
    }
}

/// POSIX single-quote `s` so the shell sees it as exactly one word.
/// Plain path-like strings pass through unquoted.
pub fn sh_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "._-/:~".contains(c));
    if plain {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        if c == '\'' {
            out.push_str("'\\''");
        } else {
            out.push(c);
        }
    }
    out.push('\'');
    out
}

fn safe_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '_' | '-'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(log: Option<&str>) -> CastCommand {
        CastCommand {
            device: "Living Room".into(),
            sound: "/opt/adhan.mp4".into(),
            seek_secs: 45,
            log_file: log.map(String::from),
        }
    }

    #[test]
    fn logged_variant_has_marker_and_redirections() {
        let line = cmd(Some("/var/log/adhan.log")).render("fajr");
        assert_eq!(
            line,
            "echo \"$(date): Starting fajr prayer time cast\" >> /var/log/adhan.log 2>&1 \
             && catt -d 'Living Room' cast /opt/adhan.mp4 --seek-to 45 >> /var/log/adhan.log 2>&1"
        );
    }

    #[test]
    fn unlogged_variant_is_bare_catt() {
        let line = cmd(None).render("fajr");
        assert_eq!(line, "catt -d 'Living Room' cast /opt/adhan.mp4 --seek-to 45");
    }

    #[test]
    fn quoting_wraps_spaces_and_escapes_single_quotes() {
        assert_eq!(sh_quote("plain/path.mp4"), "plain/path.mp4");
        assert_eq!(sh_quote("Living Room"), "'Living Room'");
        assert_eq!(sh_quote("it's"), "'it'\\''s'");
        assert_eq!(sh_quote(""), "''");
        assert_eq!(
            sh_quote("https://example.com/adhan.mp3?x=1"),
            "'https://example.com/adhan.mp3?x=1'"
        );
    }

    #[test]
    fn label_is_kept_inert_inside_the_marker() {
        let line = cmd(Some("/tmp/l")).render("fajr\"; rm -rf $HOME");
        assert!(line.contains("Starting fajr rm -rf HOME prayer time cast"));
        assert!(!line.contains("$HOME"));
    }
}
