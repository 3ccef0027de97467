#![forbid(unsafe_code)]

//! Media format sniffing for base64 payloads.
//!
//! Preview overlays receive raw base64 text with no declared type. The format
//! is decided by the payload's leading characters alone; any file extension
//! the caller might know about is irrelevant.
//!
//! | Prefix | Format |
//! |--------|--------|
//! | `/9j/` | JPEG |
//! | `iVBOR` | PNG |
//! | `JVBERi0xL` | PDF |
//! | `PD94bWw` | SVG (`<?xml`) |
//!
//! Anything else is [`MediaFormat::Unknown`] and is not displayed.

use core::fmt;

/// Detected format of a base64 payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaFormat {
    Jpeg,
    Png,
    Pdf,
    Svg,
    Unknown,
}

const SIGNATURES: [(&str, MediaFormat); 4] = [
    ("/9j/", MediaFormat::Jpeg),
    ("iVBOR", MediaFormat::Png),
    ("JVBERi0xL", MediaFormat::Pdf),
    ("PD94bWw", MediaFormat::Svg),
];

impl MediaFormat {
    /// MIME type announced in the data URI, or `None` for unknown payloads.
    pub const fn mime(self) -> Option<&'static str> {
        match self {
            Self::Jpeg => Some("image/jpeg"),
            Self::Png => Some("image/png"),
            Self::Pdf => Some("application/pdf"),
            Self::Svg => Some("image/svg+xml"),
            Self::Unknown => None,
        }
    }

    #[inline]
    pub const fn is_renderable(self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl fmt::Display for MediaFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Jpeg => "jpeg",
            Self::Png => "png",
            Self::Pdf => "pdf",
            Self::Svg => "svg",
            Self::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// Detect the format of a base64 payload from its signature prefix.
pub fn detect_format(payload: &str) -> MediaFormat {
    SIGNATURES
        .iter()
        .find(|(prefix, _)| payload.starts_with(prefix))
        .map_or(MediaFormat::Unknown, |&(_, format)| format)
}

/// Build a displayable `data:` URI for a payload.
///
/// Returns `None` when the format is unknown (including the empty payload).
pub fn data_uri(payload: &str) -> Option<String> {
    let mime = detect_format(payload).mime()?;
    Some(format!("data:{mime};base64,{payload}"))
}
