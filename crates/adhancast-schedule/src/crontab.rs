//! Host crontab adapter.
//!
//! Narrow surface over the user's periodic-task table: list this tool's
//! tagged lines, or replace them wholesale. The whole new table is always
//! submitted as one write — that single write is the only atomicity
//! boundary. Concurrent runs are not coordinated; the last writer wins.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use adhancast_core::{AdhanError, Result};

use crate::entry::CronEntry;

enum Backend {
    /// The invoking user's crontab, via the `crontab` binary.
    User,
    /// A plain file in crontab format (tests, or a project-specific table
    /// installed with `crontab <file>` out of band).
    File(PathBuf),
}

/// Handle on one periodic-task table.
pub struct Crontab {
    backend: Backend,
}

impl Crontab {
    /// The invoking user's crontab.
    pub fn user() -> Self {
        Self {
            backend: Backend::User,
        }
    }

    /// A file-backed table at `path`.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::File(path.into()),
        }
    }

    /// Entries currently owned by `tag`.
    pub fn list_tagged(&self, tag: &str) -> Result<Vec<CronEntry>> {
        Ok(self
            .read_table()?
            .iter()
            .filter_map(|line| CronEntry::parse_tagged(line, tag))
            .collect())
    }

    /// Drop every line bearing `tag` and append `entries`, as a single
    /// write. Unrelated lines pass through byte-for-byte.
    pub fn replace_all(&self, tag: &str, entries: &[CronEntry]) -> Result<()> {
        let mut lines: Vec<String> = self
            .read_table()?
            .into_iter()
            .filter(|line| !CronEntry::line_has_tag(line, tag))
            .collect();
        for entry in entries {
            lines.push(entry.render(tag));
        }
        tracing::debug!(
            "Writing table: {} line(s) total, {} owned by '{tag}'",
            lines.len(),
            entries.len()
        );
        self.write_table(&lines)
    }

    fn read_table(&self) -> Result<Vec<String>> {
        match &self.backend {
            Backend::User => {
                let out = Command::new("crontab")
                    .arg("-l")
                    .output()
                    .map_err(|e| AdhanError::Crontab(format!("Failed to run crontab -l: {e}")))?;
                if out.status.success() {
                    Ok(split_lines(&String::from_utf8_lossy(&out.stdout)))
                } else {
                    let stderr = String::from_utf8_lossy(&out.stderr);
                    // "no crontab for <user>" just means an empty table.
                    if stderr.contains("no crontab") {
                        Ok(Vec::new())
                    } else {
                        Err(AdhanError::Crontab(format!(
                            "crontab -l failed: {}",
                            stderr.trim()
                        )))
                    }
                }
            }
            Backend::File(path) => {
                if !path.exists() {
                    return Ok(Vec::new());
                }
                Ok(split_lines(&std::fs::read_to_string(path)?))
            }
        }
    }

    fn write_table(&self, lines: &[String]) -> Result<()> {
        let mut body = lines.join("\n");
        if !body.is_empty() {
            body.push('\n');
        }
        match &self.backend {
            Backend::User => {
                let mut child = Command::new("crontab")
                    .arg("-")
                    .stdin(Stdio::piped())
                    .stdout(Stdio::null())
                    .stderr(Stdio::piped())
                    .spawn()
                    .map_err(|e| AdhanError::Crontab(format!("Failed to run crontab -: {e}")))?;
                child
                    .stdin
                    .take()
                    .ok_or_else(|| AdhanError::Crontab("crontab - has no stdin".into()))?
                    .write_all(body.as_bytes())?;
                let out = child.wait_with_output()?;
                if !out.status.success() {
                    return Err(AdhanError::Crontab(format!(
                        "crontab rejected the new table: {}",
                        String::from_utf8_lossy(&out.stderr).trim()
                    )));
                }
                Ok(())
            }
            Backend::File(path) => {
                if let Some(parent) = path.parent() {
                    std::fs::create_dir_all(parent)?;
                }
                std::fs::write(path, body)?;
                Ok(())
            }
        }
    }
}

fn split_lines(s: &str) -> Vec<String> {
    s.lines().map(str::to_string).collect()
}
