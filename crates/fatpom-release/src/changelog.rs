//! Changelog release stamping.
//!
//! Turns the `## Unreleased` section heading of a keep-a-changelog style
//! file into a dated release heading.

use std::path::Path;
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::{ReleaseError, Result};

static UNRELEASED_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"## (Unreleased)").expect("Invalid regex"));

/// Replaces the `Unreleased` marker of the first matching heading with
/// `Version {version} ({date})`. The rest of the document is untouched.
pub fn stamp_unreleased(changelog: &str, version: &str, date: NaiveDate) -> Result<String> {
    let captures = UNRELEASED_PATTERN
        .captures(changelog)
        .ok_or(ReleaseError::HeadingNotFound)?;
    let marker = captures.get(1).ok_or(ReleaseError::HeadingNotFound)?;

    let stamp = format!("Version {} ({})", version, date.format("%Y-%m-%d"));
    let mut updated = String::with_capacity(changelog.len() + stamp.len());
    updated.push_str(&changelog[..marker.start()]);
    updated.push_str(&stamp);
    updated.push_str(&changelog[marker.end()..]);
    Ok(updated)
}

/// Stamps the changelog file in place, dating it with the local clock.
pub fn update_changelog_file(path: &Path, version: &str) -> Result<()> {
    let changelog = std::fs::read_to_string(path)?;
    let today = chrono::Local::now().date_naive();
    let updated = stamp_unreleased(&changelog, version, today)?;
    std::fs::write(path, updated)?;
    Ok(())
}
