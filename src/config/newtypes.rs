//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use std::fmt;

/// A validated GuildHub bot token.
///
/// This newtype ensures the token is non-empty and masks its value in debug
/// output to prevent accidental exposure in logs.
///
/// # Security
///
/// The `Debug` implementation masks the token value, displaying only
/// `BotToken(*****)` instead of the actual token.
///
/// # Example
///
/// ```rust
/// use guildhub_api::BotToken;
///
/// let token = BotToken::new("my-bot-token").unwrap();
/// assert_eq!(token.as_ref(), "my-bot-token");
/// assert_eq!(format!("{:?}", token), "BotToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    /// Creates a new validated bot token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyBotToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ConfigError::EmptyBotToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for BotToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for BotToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BotToken(*****)")
    }
}

/// A validated API host URL.
///
/// The URL must carry an `http://` or `https://` scheme and a non-empty
/// host part. A trailing slash is stripped so the transport layer can
/// append request paths directly.
///
/// # Sandbox Routing
///
/// [`HostUrl::sandboxed`] produces the sandbox variant of the host by
/// inserting the `sandbox.` subdomain marker immediately after the scheme,
/// leaving the rest of the host untouched:
///
/// ```rust
/// use guildhub_api::HostUrl;
///
/// let host = HostUrl::new("https://api.example.com").unwrap();
/// assert_eq!(host.sandboxed().as_ref(), "https://sandbox.api.example.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl(String);

impl HostUrl {
    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no
    /// `http`/`https` scheme or no host part.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"));

        match rest {
            Some(host) if !host.is_empty() && !host.contains(char::is_whitespace) => {
                Ok(Self(url))
            }
            _ => Err(ConfigError::InvalidHostUrl { url }),
        }
    }

    /// Returns the sandbox variant of this host.
    ///
    /// The `sandbox.` subdomain marker is inserted immediately after the
    /// URL scheme; the rest of the host is left untouched.
    #[must_use]
    pub fn sandboxed(&self) -> Self {
        // Validation guarantees the scheme separator is present.
        match self.0.split_once("://") {
            Some((scheme, rest)) => Self(format!("{scheme}://sandbox.{rest}")),
            None => self.clone(),
        }
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HostUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bot_token_accepts_non_empty_value() {
        let token = BotToken::new("abc123").unwrap();
        assert_eq!(token.as_ref(), "abc123");
    }

    #[test]
    fn test_bot_token_rejects_empty_value() {
        assert!(matches!(BotToken::new(""), Err(ConfigError::EmptyBotToken)));
    }

    #[test]
    fn test_bot_token_debug_is_masked() {
        let token = BotToken::new("super-secret").unwrap();
        let debug = format!("{token:?}");
        assert_eq!(debug, "BotToken(*****)");
        assert!(!debug.contains("super-secret"));
    }

    #[test]
    fn test_host_url_accepts_https() {
        let host = HostUrl::new("https://api.guildhub.com").unwrap();
        assert_eq!(host.as_ref(), "https://api.guildhub.com");
    }

    #[test]
    fn test_host_url_accepts_http_for_local_testing() {
        let host = HostUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(host.as_ref(), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_host_url_strips_trailing_slash() {
        let host = HostUrl::new("https://api.guildhub.com/").unwrap();
        assert_eq!(host.as_ref(), "https://api.guildhub.com");
    }

    #[test]
    fn test_host_url_rejects_missing_scheme() {
        assert!(matches!(
            HostUrl::new("api.guildhub.com"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
    }

    #[test]
    fn test_host_url_rejects_empty_host() {
        assert!(matches!(
            HostUrl::new("https://"),
            Err(ConfigError::InvalidHostUrl { .. })
        ));
    }

    #[test]
    fn test_sandboxed_inserts_subdomain_after_scheme() {
        let host = HostUrl::new("https://api.example.com").unwrap();
        assert_eq!(host.sandboxed().as_ref(), "https://sandbox.api.example.com");

        let host = HostUrl::new("http://api.example.com").unwrap();
        assert_eq!(host.sandboxed().as_ref(), "http://sandbox.api.example.com");
    }

    #[test]
    fn test_sandboxed_leaves_path_and_port_untouched() {
        let host = HostUrl::new("https://api.example.com:8443").unwrap();
        assert_eq!(
            host.sandboxed().as_ref(),
            "https://sandbox.api.example.com:8443"
        );
    }
}
