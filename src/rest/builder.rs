//! Chainable path builder for REST resources.
//!
//! This module provides [`ResourceBuilder`], the mechanism that lets a
//! caller address any resource in the GuildHub REST layout by chaining
//! accessors instead of hand-writing each endpoint method:
//!
//! ```rust,ignore
//! // GET /guilds/G1/members
//! let members = api.guild("G1").members().get().await?;
//!
//! // POST /channels/C1/announces with body {"message_id": "M1"}
//! let announce = api
//!     .channel("C1")
//!     .announces()
//!     .add(json!({"messageId": "M1"}))
//!     .await?;
//!
//! // POST /guilds/G1/members/U1/roles/R1 (bodiless)
//! api.guild("G1").member("U1").role("R1").add(None).await?;
//! ```
//!
//! # Design
//!
//! Each builder value is a **node**: an accumulated path plus a borrowed
//! reference to the shared [`ApiClient`]. Every chaining method consumes the
//! node and returns a fresh one; nothing is ever mutated in place, so
//! independent chains sharing one client are mutually safe. A chain is
//! completely inert until one of the terminal methods runs; dropping an
//! unterminated chain performs no I/O.
//!
//! Two chaining steps exist, mirroring the two shapes in the REST layout:
//!
//! - [`ResourceBuilder::sub`] appends a literal segment (a collection or a
//!   fixed path component)
//! - [`ResourceBuilder::item`] is a lookup-by-id: it appends the *plural*
//!   collection form of the singular resource name, then the identifier
//!
//! The named accessor methods (`members()`, `member(id)`, `role(id)`, …)
//! are thin wrappers over these two steps for the resources in the schema.
//!
//! # Terminals
//!
//! - [`ResourceBuilder::get`]: GET, returns the camelCased JSON body
//! - [`ResourceBuilder::fetch`]: GET plus typed deserialization
//! - [`ResourceBuilder::add`]: POST with an optional body
//! - [`ResourceBuilder::update`]: PATCH with a required body
//! - [`ResourceBuilder::delete`]: DELETE, no body

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::clients::{ApiClient, ApiError};
use crate::rest::path::pluralize;

/// A lazily-evaluated path into the GuildHub REST layout.
///
/// Builders are cheap to create and clone; they own only their accumulated
/// path string and borrow the client. No request is issued until a terminal
/// method (`get`, `fetch`, `add`, `update`, `delete`) is invoked.
#[must_use = "a resource builder does nothing until a terminal method is called"]
#[derive(Debug, Clone)]
pub struct ResourceBuilder<'a> {
    client: &'a ApiClient,
    path: String,
}

impl<'a> ResourceBuilder<'a> {
    /// Creates a builder rooted at the given path.
    pub(crate) fn new(client: &'a ApiClient, path: impl Into<String>) -> Self {
        Self {
            client,
            path: path.into(),
        }
    }

    /// Returns the path accumulated so far.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Appends a literal path segment, returning a new builder.
    pub fn sub(self, segment: &str) -> Self {
        Self {
            client: self.client,
            path: format!("{}/{}", self.path, segment),
        }
    }

    /// Looks up one resource by id within a collection, returning a new builder.
    ///
    /// The singular resource name is pluralized to its collection segment
    /// (`item("role", "R1")` appends `/roles/R1`). Unknown names pass
    /// through unchanged and surface as a 404 at call time.
    pub fn item(self, segment: &str, id: &str) -> Self {
        let collection = pluralize(segment);
        Self {
            client: self.client,
            path: format!("{}/{}/{}", self.path, collection, id),
        }
    }

    // === Named accessors for the schema surface ===

    /// The members collection under the current path.
    pub fn members(self) -> Self {
        self.sub("members")
    }

    /// A single member by user id.
    pub fn member(self, id: &str) -> Self {
        self.item("member", id)
    }

    /// The roles collection under the current path.
    pub fn roles(self) -> Self {
        self.sub("roles")
    }

    /// A single role by id.
    pub fn role(self, id: &str) -> Self {
        self.item("role", id)
    }

    /// The channels collection under the current path.
    pub fn channels(self) -> Self {
        self.sub("channels")
    }

    /// A single channel by id.
    pub fn channel(self, id: &str) -> Self {
        self.item("channel", id)
    }

    /// The messages collection under the current path.
    pub fn messages(self) -> Self {
        self.sub("messages")
    }

    /// A single message by id.
    pub fn message(self, id: &str) -> Self {
        self.item("message", id)
    }

    /// The announces collection under the current path.
    pub fn announces(self) -> Self {
        self.sub("announces")
    }

    /// A single announce by id.
    pub fn announce(self, id: &str) -> Self {
        self.item("announce", id)
    }

    /// The schedules collection under the current path.
    pub fn schedules(self) -> Self {
        self.sub("schedules")
    }

    /// A single schedule by id.
    pub fn schedule(self, id: &str) -> Self {
        self.item("schedule", id)
    }

    /// The emojis collection under the current path.
    pub fn emojis(self) -> Self {
        self.sub("emojis")
    }

    /// A single emoji by id.
    pub fn emoji(self, id: &str) -> Self {
        self.item("emoji", id)
    }

    /// The mutes collection under the current path.
    pub fn mutes(self) -> Self {
        self.sub("mutes")
    }

    /// A single mute by user id.
    pub fn mute(self, id: &str) -> Self {
        self.item("mute", id)
    }

    // === Terminals ===

    /// Issues a GET to the accumulated path and returns the response body.
    ///
    /// Body keys are camelCased by the transport before they reach the caller.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn get(self) -> Result<Value, ApiError> {
        let response = self.client.get(&self.path).await?;
        Ok(response.body)
    }

    /// Issues a GET and deserializes the response body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure, or [`ApiError::Decode`]
    /// if the body does not match `T`.
    pub async fn fetch<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        let body = self.get().await?;
        Ok(serde_json::from_value(body)?)
    }

    /// Issues a POST to the accumulated path with an optional JSON body.
    ///
    /// Body keys are snake_cased by the transport before transmission.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn add(self, body: impl Into<Option<Value>>) -> Result<Value, ApiError> {
        let response = self.client.post(&self.path, body.into()).await?;
        Ok(response.body)
    }

    /// Issues a PATCH to the accumulated path with the given JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn update(self, body: Value) -> Result<Value, ApiError> {
        let response = self.client.patch(&self.path, body).await?;
        Ok(response.body)
    }

    /// Issues a DELETE to the accumulated path.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] on any request failure.
    pub async fn delete(self) -> Result<Value, ApiError> {
        let response = self.client.delete(&self.path).await?;
        Ok(response.body)
    }
}
