//! Configuration types for the GuildHub API SDK.
//!
//! This module provides the core configuration types used to initialize
//! and configure the SDK for API communication with GuildHub.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`GuildHubConfig`]: The main configuration struct holding all SDK settings
//! - [`GuildHubConfigBuilder`]: A builder for constructing [`GuildHubConfig`] instances
//! - [`BotToken`]: A validated bot token newtype with masked debug output
//! - [`HostUrl`]: A validated API host URL with sandbox routing support
//!
//! # Example
//!
//! ```rust
//! use guildhub_api::{BotToken, GuildHubConfig};
//!
//! let config = GuildHubConfig::builder()
//!     .bot_token(BotToken::new("my-bot-token").unwrap())
//!     .sandbox(true)
//!     .build()
//!     .unwrap();
//!
//! assert!(config.sandbox());
//! ```

mod newtypes;

pub use newtypes::{BotToken, HostUrl};

use crate::error::ConfigError;

/// The default production API host.
pub const DEFAULT_HOST: &str = "https://api.guildhub.com";

/// Configuration for the GuildHub API SDK.
///
/// This struct holds all configuration needed for SDK operations: the bot
/// token used for authentication, the API host, and sandbox routing.
///
/// # Thread Safety
///
/// `GuildHubConfig` is `Clone`, `Send`, and `Sync`, making it safe to share
/// across threads and async tasks.
///
/// # Sandbox Mode
///
/// When `sandbox` is enabled, [`GuildHubConfig::effective_host`] rewrites
/// the configured host by inserting the `sandbox.` subdomain marker
/// immediately after the URL scheme. The rest of the host is untouched.
///
/// # Example
///
/// ```rust
/// use guildhub_api::{BotToken, GuildHubConfig, HostUrl};
///
/// let config = GuildHubConfig::builder()
///     .bot_token(BotToken::new("token").unwrap())
///     .host(HostUrl::new("https://api.example.com").unwrap())
///     .sandbox(true)
///     .build()
///     .unwrap();
///
/// assert_eq!(config.effective_host().as_ref(), "https://sandbox.api.example.com");
/// ```
#[derive(Clone, Debug)]
pub struct GuildHubConfig {
    bot_token: BotToken,
    host: HostUrl,
    sandbox: bool,
    user_agent_prefix: Option<String>,
}

impl GuildHubConfig {
    /// Creates a new builder for constructing a `GuildHubConfig`.
    #[must_use]
    pub fn builder() -> GuildHubConfigBuilder {
        GuildHubConfigBuilder::new()
    }

    /// Returns the bot token.
    #[must_use]
    pub const fn bot_token(&self) -> &BotToken {
        &self.bot_token
    }

    /// Returns the configured host, before any sandbox rewrite.
    #[must_use]
    pub const fn host(&self) -> &HostUrl {
        &self.host
    }

    /// Returns whether sandbox routing is enabled.
    #[must_use]
    pub const fn sandbox(&self) -> bool {
        self.sandbox
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the host that requests are actually sent to.
    ///
    /// In sandbox mode this is the sandbox variant of the configured host;
    /// otherwise it is the configured host itself.
    #[must_use]
    pub fn effective_host(&self) -> HostUrl {
        if self.sandbox {
            self.host.sandboxed()
        } else {
            self.host.clone()
        }
    }
}

// Verify GuildHubConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GuildHubConfig>();
};

/// Builder for constructing [`GuildHubConfig`] instances.
///
/// The only required field is `bot_token`. All other fields have sensible
/// defaults.
///
/// # Defaults
///
/// - `host`: [`DEFAULT_HOST`]
/// - `sandbox`: `false`
/// - `user_agent_prefix`: `None`
///
/// # Example
///
/// ```rust
/// use guildhub_api::{BotToken, GuildHubConfig, HostUrl};
///
/// let config = GuildHubConfig::builder()
///     .bot_token(BotToken::new("token").unwrap())
///     .host(HostUrl::new("https://api.example.com").unwrap())
///     .user_agent_prefix("MyBot/1.0")
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Default)]
pub struct GuildHubConfigBuilder {
    bot_token: Option<BotToken>,
    host: Option<HostUrl>,
    sandbox: Option<bool>,
    user_agent_prefix: Option<String>,
}

impl GuildHubConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the bot token (required).
    #[must_use]
    pub fn bot_token(mut self, token: BotToken) -> Self {
        self.bot_token = Some(token);
        self
    }

    /// Sets the API host.
    #[must_use]
    pub fn host(mut self, host: HostUrl) -> Self {
        self.host = Some(host);
        self
    }

    /// Enables or disables sandbox routing.
    #[must_use]
    pub const fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = Some(sandbox);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`GuildHubConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `bot_token` is not set.
    pub fn build(self) -> Result<GuildHubConfig, ConfigError> {
        let bot_token = self.bot_token.ok_or(ConfigError::MissingRequiredField {
            field: "bot_token",
        })?;

        let host = match self.host {
            Some(host) => host,
            None => HostUrl::new(DEFAULT_HOST)?,
        };

        Ok(GuildHubConfig {
            bot_token,
            host,
            sandbox: self.sandbox.unwrap_or(false),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_requires_bot_token() {
        let result = GuildHubConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "bot_token" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = GuildHubConfig::builder()
            .bot_token(BotToken::new("token").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.host().as_ref(), DEFAULT_HOST);
        assert!(!config.sandbox());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_effective_host_without_sandbox_is_configured_host() {
        let config = GuildHubConfig::builder()
            .bot_token(BotToken::new("token").unwrap())
            .host(HostUrl::new("https://api.example.com").unwrap())
            .build()
            .unwrap();

        assert_eq!(config.effective_host().as_ref(), "https://api.example.com");
    }

    #[test]
    fn test_effective_host_with_sandbox_inserts_marker() {
        let config = GuildHubConfig::builder()
            .bot_token(BotToken::new("token").unwrap())
            .host(HostUrl::new("https://api.example.com").unwrap())
            .sandbox(true)
            .build()
            .unwrap();

        assert_eq!(
            config.effective_host().as_ref(),
            "https://sandbox.api.example.com"
        );
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<GuildHubConfig>();
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = GuildHubConfig::builder()
            .bot_token(BotToken::new("very-secret-value").unwrap())
            .user_agent_prefix("MyBot/1.0")
            .build()
            .unwrap();

        let cloned = config.clone();
        assert_eq!(cloned.user_agent_prefix(), Some("MyBot/1.0"));

        // Debug output must not leak the token
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("GuildHubConfig"));
        assert!(!debug_str.contains("very-secret-value"));
    }
}
