//! Target platforms recognized in mapping database headers

use serde::{Deserialize, Serialize};
use std::fmt;

/// A platform named by a `#<Name>` header line
///
/// The set is closed: any other header is an ordinary comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Linux,
    Windows,
    #[serde(rename = "Mac OS X")]
    MacOsX,
    Android,
    #[serde(rename = "iOS")]
    Ios,
    Web,
}

impl Platform {
    /// All recognized platforms
    pub const ALL: [Platform; 6] = [
        Platform::Linux,
        Platform::Windows,
        Platform::MacOsX,
        Platform::Android,
        Platform::Ios,
        Platform::Web,
    ];

    /// Name as written in a database header (e.g., "Mac OS X")
    pub fn header_name(self) -> &'static str {
        match self {
            Platform::Linux => "Linux",
            Platform::Windows => "Windows",
            Platform::MacOsX => "Mac OS X",
            Platform::Android => "Android",
            Platform::Ios => "iOS",
            Platform::Web => "Web",
        }
    }

    /// Symbol used in the `#ifdef <GUARD>_ENABLED` block for this platform
    pub fn guard(self) -> &'static str {
        match self {
            Platform::Linux => "LINUXBSD",
            Platform::Windows => "WINDOWS",
            Platform::MacOsX => "MACOS",
            Platform::Android => "ANDROID",
            Platform::Ios => "APPLE_EMBEDDED",
            Platform::Web => "WEB",
        }
    }

    /// Look up a platform by its exact header name
    ///
    /// Matching is case-sensitive; `"linux"` is not a platform.
    pub fn from_header_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.header_name() == name)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.header_name())
    }
}
