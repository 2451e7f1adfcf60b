//! Version bumping for release preparation.
//!
//! After a release ships, the build's version property moves to the next
//! minor development version: `1.4.2` becomes `1.5.0`.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ReleaseError, Result};

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.(\d+)[\d.]+$").expect("Invalid regex"));

/// Bumps the minor component and resets the patch component to zero.
pub fn bump_minor(version: &str) -> Result<String> {
    tracing::info!("Bumping minor version for: {version}");
    let captures =
        VERSION_PATTERN
            .captures(version)
            .ok_or_else(|| ReleaseError::InvalidVersion {
                version: version.to_string(),
            })?;

    let minor: u64 = captures[2]
        .parse()
        .map_err(|_| ReleaseError::InvalidVersion {
            version: version.to_string(),
        })?;
    tracing::info!("Current minor version is: {minor}");

    let bumped = format!("{}.{}.0", &captures[1], minor + 1);
    tracing::info!("The new version is: {bumped}");
    Ok(bumped)
}

/// Looks up a key in `key=value` properties text. Comment lines starting
/// with `#` or `!` are ignored.
pub fn property_value<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    content.lines().find_map(|line| {
        let trimmed = line.trim_start();
        if trimmed.starts_with('#') || trimmed.starts_with('!') {
            return None;
        }
        let (k, v) = trimmed.split_once('=')?;
        (k.trim() == key).then(|| v.trim())
    })
}

/// Rewrites the `version` entry of properties text, leaving every other
/// line byte-for-byte intact. The entry is appended when absent.
pub fn set_version_property(content: &str, new_version: &str) -> String {
    let mut replaced = false;
    let mut lines: Vec<String> = content
        .lines()
        .map(|line| {
            if !replaced {
                let trimmed = line.trim_start();
                if !trimmed.starts_with('#')
                    && !trimmed.starts_with('!')
                    && let Some((key, _)) = trimmed.split_once('=')
                    && key.trim() == "version"
                {
                    replaced = true;
                    return format!("version={new_version}");
                }
            }
            line.to_string()
        })
        .collect();

    if !replaced {
        lines.push(format!("version={new_version}"));
    }

    let mut updated = lines.join("\n");
    if content.ends_with('\n') || content.is_empty() {
        updated.push('\n');
    }
    updated
}

/// Bumps the minor version stored in a properties file and returns the
/// new version string.
pub fn bump_version_file(path: &Path) -> Result<String> {
    let content = std::fs::read_to_string(path)?;
    let current =
        property_value(&content, "version").ok_or(ReleaseError::PropertyNotFound("version"))?;
    let bumped = bump_minor(current)?;
    std::fs::write(path, set_version_property(&content, &bumped))?;
    Ok(bumped)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_minor() {
        assert_eq!(bump_minor("1.4.2").unwrap(), "1.5.0");
        assert_eq!(bump_minor("0.9.0").unwrap(), "0.10.0");
        assert_eq!(bump_minor("2.0.0.1").unwrap(), "2.1.0");
    }

    #[test]
    fn test_bump_minor_rejects_unversioned_input() {
        assert!(bump_minor("abc").is_err());
        assert!(bump_minor("").is_err());
        // The pattern requires a component after the minor one
        assert!(bump_minor("1.2").is_err());

        let err = bump_minor("not-a-version").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Could not find minor version in: not-a-version"
        );
    }

    #[test]
    fn test_property_value() {
        let content = "# build settings\ngroup=com.acme\nversion=1.4.2\n";
        assert_eq!(property_value(content, "version"), Some("1.4.2"));
        assert_eq!(property_value(content, "group"), Some("com.acme"));
        assert_eq!(property_value(content, "missing"), None);
    }

    #[test]
    fn test_property_value_skips_comments() {
        let content = "# version=9.9.9\n! version=8.8.8\nversion=1.0.0\n";
        assert_eq!(property_value(content, "version"), Some("1.0.0"));
    }

    #[test]
    fn test_set_version_preserves_layout() {
        let content = "# build settings\ngroup=com.acme\nversion=1.4.2\nname=acme-tools\n";
        let updated = set_version_property(content, "1.5.0");
        assert_eq!(
            updated,
            "# build settings\ngroup=com.acme\nversion=1.5.0\nname=acme-tools\n"
        );
    }

    #[test]
    fn test_set_version_appends_when_absent() {
        let content = "group=com.acme\n";
        let updated = set_version_property(content, "1.0.0");
        assert_eq!(updated, "group=com.acme\nversion=1.0.0\n");
    }

    #[test]
    fn test_bump_version_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradle.properties");
        std::fs::write(&path, "# settings\ngroup=com.acme\nversion=1.4.2\n").unwrap();

        let bumped = bump_version_file(&path).unwrap();
        assert_eq!(bumped, "1.5.0");

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "# settings\ngroup=com.acme\nversion=1.5.0\n");
    }

    #[test]
    fn test_bump_version_file_without_property() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gradle.properties");
        std::fs::write(&path, "group=com.acme\n").unwrap();

        assert!(matches!(
            bump_version_file(&path),
            Err(ReleaseError::PropertyNotFound("version"))
        ));
    }
}
