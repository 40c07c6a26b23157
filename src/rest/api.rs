//! Root API accessor for the GuildHub REST surface.

use crate::clients::ApiClient;
use crate::config::GuildHubConfig;
use crate::rest::builder::ResourceBuilder;
use crate::rest::path::pluralize;

/// The entry point for addressing GuildHub REST resources.
///
/// `GuildHub` owns the configured [`ApiClient`] and hands out
/// [`ResourceBuilder`] chains rooted at the platform's top-level resources.
/// The declared surface is exposed as named methods (`guilds`, `guild`,
/// `users`, `user`, `channels`, `channel`, `me`); everything else hangs off
/// the current bot user via [`GuildHub::my`].
///
/// # Example
///
/// ```rust,ignore
/// use guildhub_api::{BotToken, GuildHub, GuildHubConfig};
/// use serde_json::json;
///
/// let config = GuildHubConfig::builder()
///     .bot_token(BotToken::new("my-bot-token").unwrap())
///     .build()
///     .unwrap();
/// let api = GuildHub::new(&config);
///
/// // GET /guilds/G1/members
/// let members = api.guild("G1").members().get().await?;
///
/// // GET /users/@me/guilds
/// let my_guilds = api.my("guild").get().await?;
///
/// // PATCH /channels/C1
/// api.channel("C1").update(json!({"name": "general"})).await?;
/// ```
///
/// # Thread Safety
///
/// `GuildHub` is `Send + Sync`. Builders only borrow the client, so any
/// number of chains can be built and resolved concurrently.
#[derive(Debug)]
pub struct GuildHub {
    client: ApiClient,
}

// Verify GuildHub is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GuildHub>();
};

impl GuildHub {
    /// Creates a new API accessor for the given configuration.
    #[must_use]
    pub fn new(config: &GuildHubConfig) -> Self {
        Self {
            client: ApiClient::new(config),
        }
    }

    /// Returns the underlying HTTP client.
    ///
    /// Useful for issuing a request to a path the builder surface does not
    /// cover.
    #[must_use]
    pub const fn client(&self) -> &ApiClient {
        &self.client
    }

    fn root(&self) -> ResourceBuilder<'_> {
        ResourceBuilder::new(&self.client, "")
    }

    /// The guilds collection (`/guilds`).
    pub fn guilds(&self) -> ResourceBuilder<'_> {
        self.root().sub("guilds")
    }

    /// A single guild by id (`/guilds/{id}`).
    pub fn guild(&self, id: &str) -> ResourceBuilder<'_> {
        self.root().item("guild", id)
    }

    /// The users collection (`/users`).
    pub fn users(&self) -> ResourceBuilder<'_> {
        self.root().sub("users")
    }

    /// A single user by id (`/users/{id}`).
    pub fn user(&self, id: &str) -> ResourceBuilder<'_> {
        self.root().item("user", id)
    }

    /// The channels collection (`/channels`).
    pub fn channels(&self) -> ResourceBuilder<'_> {
        self.root().sub("channels")
    }

    /// A single channel by id (`/channels/{id}`).
    pub fn channel(&self, id: &str) -> ResourceBuilder<'_> {
        self.root().item("channel", id)
    }

    /// The current bot user (`/users/@me`).
    pub fn me(&self) -> ResourceBuilder<'_> {
        self.root().sub("users").sub("@me")
    }

    /// A collection belonging to the current bot user
    /// (`/users/@me/{plural(name)}`).
    ///
    /// Takes the singular resource name; unknown names pass through
    /// unchanged and surface as a 404 at call time.
    ///
    /// ```rust,ignore
    /// // GET /users/@me/guilds
    /// let guilds = api.my("guild").get().await?;
    /// ```
    pub fn my(&self, name: &str) -> ResourceBuilder<'_> {
        self.me().sub(pluralize(name))
    }
}
