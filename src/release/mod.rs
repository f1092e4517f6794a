//! Release metadata published by the game's updater feed.
//!
//! The feed uses the Tauri updater manifest format. Every field may be
//! missing while a release is rolling out, and a field of the wrong JSON
//! type is treated as missing instead of failing the whole document.

mod source;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

pub use source::{HttpReleaseSource, ReleaseSource};

#[cfg(test)]
pub use source::MockReleaseSource;

/// Build target identifiers used as keys of the `platforms` mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlatformKey {
    LinuxX86_64,
    WindowsX86_64,
    DarwinX86_64,
    DarwinAarch64,
}

impl PlatformKey {
    pub const ALL: [PlatformKey; 4] = [
        PlatformKey::LinuxX86_64,
        PlatformKey::WindowsX86_64,
        PlatformKey::DarwinX86_64,
        PlatformKey::DarwinAarch64,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PlatformKey::LinuxX86_64 => "linux-x86_64",
            PlatformKey::WindowsX86_64 => "windows-x86_64",
            PlatformKey::DarwinX86_64 => "darwin-x86_64",
            PlatformKey::DarwinAarch64 => "darwin-aarch64",
        }
    }
}

impl fmt::Display for PlatformKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One published artifact of a release.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct PlatformArtifact {
    #[serde(default, deserialize_with = "string_or_absent")]
    pub url: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub signature: Option<String>,
}

/// The latest release as described by `/api/version`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Default)]
pub struct ReleaseMetadata {
    #[serde(default, deserialize_with = "string_or_absent")]
    pub version: Option<String>,
    /// Publication date (RFC 3339)
    #[serde(default, deserialize_with = "string_or_absent")]
    pub pub_date: Option<String>,
    #[serde(default, deserialize_with = "string_or_absent")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "artifacts_or_empty")]
    pub platforms: BTreeMap<String, PlatformArtifact>,
}

impl ReleaseMetadata {
    /// Builds metadata from an arbitrary JSON document. Anything that is not
    /// an object (including `null`) yields empty metadata.
    pub fn from_json(value: serde_json::Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Self::default()
        }
    }

    /// Returns the artifact URL for `key` if it has been published.
    pub fn artifact_url(&self, key: PlatformKey) -> Option<&str> {
        self.platforms
            .get(key.as_str())
            .and_then(|artifact| artifact.url.as_deref())
    }

    /// Version string for display, empty when unknown.
    pub fn version_label(&self) -> &str {
        self.version.as_deref().unwrap_or_default()
    }

    /// Publication date formatted as an RFC 1123 UTC string
    /// (`Sat, 18 Oct 2026 12:00:00 GMT`). Empty when unknown; an unparseable
    /// date is returned verbatim.
    pub fn published_label(&self) -> String {
        match self.pub_date.as_deref() {
            None | Some("") => String::new(),
            Some(raw) => match DateTime::parse_from_rfc3339(raw) {
                Ok(date) => date
                    .with_timezone(&Utc)
                    .format("%a, %d %b %Y %H:%M:%S GMT")
                    .to_string(),
                Err(_) => raw.to_string(),
            },
        }
    }
}

fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_str().map(str::to_string))
}

// Entries that are not objects are dropped, the rest of the mapping survives.
fn artifacts_or_empty<'de, D>(
    deserializer: D,
) -> Result<BTreeMap<String, PlatformArtifact>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    let serde_json::Value::Object(entries) = value else {
        return Ok(BTreeMap::new());
    };

    Ok(entries
        .into_iter()
        .filter(|(_, artifact)| artifact.is_object())
        .filter_map(|(key, artifact)| {
            serde_json::from_value::<PlatformArtifact>(artifact)
                .ok()
                .map(|artifact| (key, artifact))
        })
        .collect())
}
