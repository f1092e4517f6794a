//! Download link derivation.
//!
//! Turns the release metadata into exactly four download buttons, one per
//! supported target, in a fixed order. A target whose artifact is not
//! published yet is reported as "updating" with an empty URL; it never fails
//! the other targets.
//!
//! The release feed only carries updater bundles, so the browser-facing
//! links are obtained by rewriting artifact URLs:
//!
//! | Target      | published when   | URL taken from   | rewrite                                  |
//! |-------------|------------------|------------------|------------------------------------------|
//! | Linux       | `linux-x86_64`   | `linux-x86_64`   | drop `.tar.gz`                           |
//! | MacOS M1    | `darwin-aarch64` | `windows-x86_64` | `_x64_en-US.msi.zip` → `_aarch64.dmg`    |
//! | MacOS Intel | `darwin-x86_64`  | `windows-x86_64` | `_en-US.msi.zip` → `.dmg`                |
//! | Windows     | `windows-x86_64` | `windows-x86_64` | drop `.zip`                              |
//!
//! The Mac rows follow [`LinkPolicy::FeedCompatible`]. With
//! [`LinkPolicy::SameKey`] the Mac targets read both facts from their own
//! `darwin-*` entry and drop `.tar.gz` from it.

use clap::ValueEnum;
use std::fmt;

use crate::release::{PlatformKey, ReleaseMetadata};

/// Which metadata entry drives the Mac download buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LinkPolicy {
    /// Availability from the `darwin-*` key, URL rewritten from the Windows
    /// artifact. Matches the links the release feed has always produced.
    #[default]
    FeedCompatible,
    /// Availability and URL both from the target's own key.
    SameKey,
}

impl fmt::Display for LinkPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LinkPolicy::FeedCompatible => write!(f, "feed-compatible"),
            LinkPolicy::SameKey => write!(f, "same-key"),
        }
    }
}

/// Operating system family, used to pick the button icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Linux,
    MacOs,
    Windows,
}

impl OsFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            OsFamily::Linux => "linux",
            OsFamily::MacOs => "macos",
            OsFamily::Windows => "windows",
        }
    }
}

/// A supported download target, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    Linux,
    MacOsAppleSilicon,
    MacOsIntel,
    Windows,
}

/// How a target's link is read out of the metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LinkRule {
    published: PlatformKey,
    source: PlatformKey,
    pattern: &'static str,
    replacement: &'static str,
}

impl Target {
    pub const ALL: [Target; 4] = [
        Target::Linux,
        Target::MacOsAppleSilicon,
        Target::MacOsIntel,
        Target::Windows,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Target::Linux => "Linux",
            Target::MacOsAppleSilicon => "MacOS-AppleSilicon",
            Target::MacOsIntel => "MacOS-Intel",
            Target::Windows => "Windows",
        }
    }

    pub fn os(&self) -> OsFamily {
        match self {
            Target::Linux => OsFamily::Linux,
            Target::MacOsAppleSilicon | Target::MacOsIntel => OsFamily::MacOs,
            Target::Windows => OsFamily::Windows,
        }
    }

    pub fn available_text(&self) -> &'static str {
        match self {
            Target::Linux => "Download for Linux",
            Target::MacOsAppleSilicon => "Download for Mac OS - M1",
            Target::MacOsIntel => "Download for Mac OS - Intel",
            Target::Windows => "Download for Windows",
        }
    }

    pub fn updating_text(&self) -> &'static str {
        match self {
            Target::Linux => "Updating for Linux...",
            Target::MacOsAppleSilicon => "Updating for Mac OS - M1...",
            Target::MacOsIntel => "Updating for Mac OS - Intel...",
            Target::Windows => "Updating for Windows...",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Target::Linux => ".AppImage",
            Target::MacOsAppleSilicon | Target::MacOsIntel => ".app",
            Target::Windows => ".msi",
        }
    }

    fn rule(&self, policy: LinkPolicy) -> LinkRule {
        match (self, policy) {
            (Target::Linux, _) => LinkRule {
                published: PlatformKey::LinuxX86_64,
                source: PlatformKey::LinuxX86_64,
                pattern: ".tar.gz",
                replacement: "",
            },
            (Target::Windows, _) => LinkRule {
                published: PlatformKey::WindowsX86_64,
                source: PlatformKey::WindowsX86_64,
                pattern: ".zip",
                replacement: "",
            },
            (Target::MacOsAppleSilicon, LinkPolicy::FeedCompatible) => LinkRule {
                published: PlatformKey::DarwinAarch64,
                source: PlatformKey::WindowsX86_64,
                pattern: "_x64_en-US.msi.zip",
                replacement: "_aarch64.dmg",
            },
            (Target::MacOsIntel, LinkPolicy::FeedCompatible) => LinkRule {
                published: PlatformKey::DarwinX86_64,
                source: PlatformKey::WindowsX86_64,
                pattern: "_en-US.msi.zip",
                replacement: ".dmg",
            },
            (Target::MacOsAppleSilicon, LinkPolicy::SameKey) => LinkRule {
                published: PlatformKey::DarwinAarch64,
                source: PlatformKey::DarwinAarch64,
                pattern: ".tar.gz",
                replacement: "",
            },
            (Target::MacOsIntel, LinkPolicy::SameKey) => LinkRule {
                published: PlatformKey::DarwinX86_64,
                source: PlatformKey::DarwinX86_64,
                pattern: ".tar.gz",
                replacement: "",
            },
        }
    }
}

/// Render-ready state of one download button.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadDescriptor {
    pub target: Target,
    /// Browser-facing link, empty when unavailable
    pub url: String,
    pub available: bool,
    pub available_text: &'static str,
    pub updating_text: &'static str,
    pub extension: &'static str,
}

impl DownloadDescriptor {
    fn new(target: Target, url: Option<String>) -> Self {
        let url = url.unwrap_or_default();
        Self {
            target,
            available: !url.is_empty(),
            url,
            available_text: target.available_text(),
            updating_text: target.updating_text(),
            extension: target.extension(),
        }
    }
}

/// Derives the four download descriptors, in [`Target::ALL`] order.
pub fn derive_downloads(metadata: &ReleaseMetadata, policy: LinkPolicy) -> [DownloadDescriptor; 4] {
    Target::ALL.map(|target| describe(metadata, target, policy))
}

fn describe(metadata: &ReleaseMetadata, target: Target, policy: LinkPolicy) -> DownloadDescriptor {
    let rule = target.rule(policy);

    let published = metadata
        .artifact_url(rule.published)
        .is_some_and(|url| !url.is_empty());

    let url = match metadata.artifact_url(rule.source) {
        Some(source) if published => Some(source.replacen(rule.pattern, rule.replacement, 1)),
        _ => None,
    };

    DownloadDescriptor::new(target, url)
}

/// True when no target is waiting for its artifact.
pub fn all_available(descriptors: &[DownloadDescriptor]) -> bool {
    descriptors.iter().all(|d| d.available)
}
