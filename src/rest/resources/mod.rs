//! Domain records for the GuildHub schema.
//!
//! These are plain serde records matching the external schema. On the wire
//! every key is camelCase (the transport converts to/from snake_case at the
//! boundary), so each record derives `#[serde(rename_all = "camelCase")]`
//! over snake_case Rust fields. The SDK does not validate or mutate these
//! shapes; use [`ResourceBuilder::fetch`](crate::rest::ResourceBuilder::fetch)
//! to deserialize a response body into one.

mod announce;
mod channel;
mod emoji;
mod guild;
mod member;
mod mute;
mod role;
mod schedule;
mod user;

pub use announce::Announce;
pub use channel::Channel;
pub use emoji::Emoji;
pub use guild::Guild;
pub use member::Member;
pub use mute::Mute;
pub use role::Role;
pub use schedule::Schedule;
pub use user::User;
