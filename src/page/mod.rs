//! Server-side rendering of the landing page.

mod markup;

pub use markup::escape;

use crate::download::{DownloadDescriptor, LinkPolicy, all_available, derive_downloads};
use crate::release::ReleaseMetadata;

pub const TITLE: &str = "Unforeseen Conspiracy Inc.";
pub const TAGLINE: &str = "Pigeons are watching you.";
pub const ABOUT: &str = "Unravel conspiracies both mundane and monstrous, from government \
cover-ups to why pigeons seem so... shifty. Click onward, the rabbit hole awaits!";

/// Fallback download location, independent of the release feed.
pub const RELEASES_URL: &str =
    "https://github.com/matthieu-locussol/unforeseen-conspiracy-inc/releases/latest";
pub const REPOSITORY_URL: &str = "https://github.com/matthieu-locussol/unforeseen-conspiracy-inc";

/// Everything the page shows, derived from one metadata fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct LandingPage {
    pub version: String,
    /// Publication date as an RFC 1123 string, or empty
    pub published: String,
    pub downloads: [DownloadDescriptor; 4],
}

impl LandingPage {
    pub fn new(metadata: &ReleaseMetadata, policy: LinkPolicy) -> Self {
        Self {
            version: metadata.version_label().to_string(),
            published: metadata.published_label(),
            downloads: derive_downloads(metadata, policy),
        }
    }

    /// The "Other downloads" link is only offered once every target is out.
    pub fn other_downloads_enabled(&self) -> bool {
        all_available(&self.downloads)
    }

    pub fn render(&self) -> String {
        let buttons: String = self.downloads.iter().map(download_button).collect();

        let other_downloads = if self.other_downloads_enabled() {
            format!(
                r#"<a class="button wide" href="{}" target="_blank" rel="noreferrer">Other downloads</a>"#,
                escape(RELEASES_URL)
            )
        } else {
            r#"<button class="button wide" disabled><em>Other downloads</em></button>"#.to_string()
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<header class="hero">
<h1>{title} <small class="version">{version}</small></h1>
<p class="tagline">{tagline}</p>
<p class="release-date"><em>Last release: {published}</em></p>
<nav class="downloads">
{buttons}{other_downloads}
</nav>
<a class="github" href="{repository}" target="_blank" rel="noopener noreferrer">GitHub</a>
</header>
<main>
<section id="about">
<p>{about}</p>
</section>
</main>
</body>
</html>
"#,
            title = escape(TITLE),
            version = escape(&self.version),
            tagline = escape(TAGLINE),
            published = escape(&self.published),
            buttons = buttons,
            other_downloads = other_downloads,
            repository = escape(REPOSITORY_URL),
            about = escape(ABOUT),
        )
    }
}

fn download_button(descriptor: &DownloadDescriptor) -> String {
    let os = descriptor.target.os().as_str();
    if descriptor.available {
        format!(
            "<a class=\"button {}\" href=\"{}\">{} ({})</a>\n",
            os,
            escape(&descriptor.url),
            escape(descriptor.available_text),
            escape(descriptor.extension)
        )
    } else {
        format!(
            "<button class=\"button {}\" disabled><em>{}</em></button>\n",
            os,
            escape(descriptor.updating_text)
        )
    }
}

/// Generic page shown when the release feed could not be read.
pub fn render_error_page() -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<h1>500 - Internal Server Error</h1>
<p>Something went wrong while loading the latest release. Please try again later.</p>
</body>
</html>
"#,
        title = escape(TITLE)
    )
}
