#![forbid(unsafe_code)]

//! Preset dialogs for failed requests.
//!
//! The transport lives elsewhere; it hands over what it knows about a failure
//! and gets back the dialog to show, if any.
//!
//! | Failure | Dialog |
//! |---------|--------|
//! | Network (no status, "Network Error") | Network error |
//! | 401 | Network error |
//! | 404 | Application error |
//! | 500 | Server error |
//! | anything else | none |

use std::fmt;

use crate::overlay::OverlayConfig;

const UNAUTHORIZED: u16 = 401;
const NOT_FOUND: u16 = 404;
const INTERNAL_SERVER_ERROR: u16 = 500;

/// Message a transport reports for a connection-level failure.
pub const NETWORK_ERROR_MESSAGE: &str = "Network Error";

const RETRY_LATER: &str = "Please try again later.";

/// Classified request failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestFailure {
    /// No response reached us.
    Network,
    /// The server answered with an HTTP status.
    Status(u16),
    /// No status and no recognisable message.
    Unclassified,
}

impl RequestFailure {
    /// Classify the raw parts of a transport error.
    pub fn classify(status: Option<u16>, message: &str) -> Self {
        match status {
            Some(code) if code != 0 => Self::Status(code),
            _ if message == NETWORK_ERROR_MESSAGE => Self::Network,
            _ => Self::Unclassified,
        }
    }

    /// The dialog shown for this failure, if any.
    pub fn notice(self) -> Option<OverlayConfig> {
        let config = match self {
            Self::Network | Self::Status(UNAUTHORIZED) => {
                OverlayConfig::new("Network error").paragraph("You are currently offline.")
            }
            Self::Status(NOT_FOUND) => OverlayConfig::new("Application error").content([
                "There was an application error while talking to the server.",
                RETRY_LATER,
            ]),
            Self::Status(INTERNAL_SERVER_ERROR) => OverlayConfig::new("Server error").content([
                "There was a problem communicating with the server. \
                 It may be under maintenance or temporarily unavailable.",
                RETRY_LATER,
            ]),
            Self::Status(_) | Self::Unclassified => return None,
        };
        Some(config.on_accept(|_| true))
    }
}

impl fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network failure"),
            Self::Status(code) => write!(f, "HTTP status {code}"),
            Self::Unclassified => f.write_str("unclassified failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::DialogAction;

    #[test]
    fn classify_network() {
        assert_eq!(
            RequestFailure::classify(None, NETWORK_ERROR_MESSAGE),
            RequestFailure::Network
        );
        assert_eq!(
            RequestFailure::classify(Some(0), NETWORK_ERROR_MESSAGE),
            RequestFailure::Network
        );
    }

    #[test]
    fn classify_status_wins_over_message() {
        assert_eq!(
            RequestFailure::classify(Some(500), NETWORK_ERROR_MESSAGE),
            RequestFailure::Status(500)
        );
    }

    #[test]
    fn classify_unknown() {
        assert_eq!(
            RequestFailure::classify(None, "timeout"),
            RequestFailure::Unclassified
        );
    }

    #[test]
    fn unauthorized_reuses_network_notice() {
        let network = RequestFailure::Network.notice().unwrap();
        let unauthorized = RequestFailure::Status(401).notice().unwrap();
        assert_eq!(network.title(), unauthorized.title());
        assert_eq!(network.paragraphs(), unauthorized.paragraphs());
    }

    #[test]
    fn not_found_and_server_error_have_two_paragraphs() {
        let not_found = RequestFailure::Status(404).notice().unwrap();
        assert_eq!(not_found.title(), "Application error");
        assert_eq!(not_found.paragraphs().len(), 2);

        let server = RequestFailure::Status(500).notice().unwrap();
        assert_eq!(server.title(), "Server error");
        assert_eq!(server.paragraphs()[1], RETRY_LATER);
    }

    #[test]
    fn notices_close_on_accept() {
        let notice = RequestFailure::Network.notice().unwrap();
        assert!(notice.has_callback(DialogAction::Accept));
    }

    #[test]
    fn other_statuses_have_no_notice() {
        assert!(RequestFailure::Status(403).notice().is_none());
        assert!(RequestFailure::Status(502).notice().is_none());
        assert!(RequestFailure::Unclassified.notice().is_none());
    }

    #[test]
    fn display() {
        assert_eq!(RequestFailure::Status(404).to_string(), "HTTP status 404");
    }
}
