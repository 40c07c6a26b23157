//! Path segment pluralization for REST resources.
//!
//! GuildHub's REST layout addresses a single resource by its plural
//! collection segment followed by an identifier (`/guilds/{id}`,
//! `/guilds/{id}/roles/{role_id}`). The SDK's builder methods take the
//! singular resource name, so this module maps each singular segment to
//! its plural collection form.
//!
//! The mapping is a fixed table covering the platform's schema, not general
//! English pluralization. Unknown segments are returned unchanged (fail
//! open): the REST layout is schema-fixed, so a miss is a configuration bug
//! that surfaces as a 404 at call time rather than an error here.

/// Singular-to-plural segment table for the GuildHub schema surface.
const PLURALS: &[(&str, &str)] = &[
    ("user", "users"),
    ("guild", "guilds"),
    ("member", "members"),
    ("role", "roles"),
    ("channel", "channels"),
    ("message", "messages"),
    ("announce", "announces"),
    ("schedule", "schedules"),
    ("emoji", "emojis"),
    ("mute", "mutes"),
];

/// Returns the plural collection segment for a singular resource name.
///
/// Unknown segments are returned unchanged.
///
/// # Example
///
/// ```rust
/// use guildhub_api::rest::pluralize;
///
/// assert_eq!(pluralize("guild"), "guilds");
/// assert_eq!(pluralize("emoji"), "emojis");
/// assert_eq!(pluralize("unknown"), "unknown");
/// ```
#[must_use]
pub fn pluralize(segment: &str) -> &str {
    PLURALS
        .iter()
        .find(|(singular, _)| *singular == segment)
        .map_or(segment, |(_, plural)| *plural)
}
