//! # Domain Models
//!
//! Public shapes served by the gateway.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Creature`] | Normalized creature detail |
//! | [`CreatureList`] | Paging envelope around [`CreatureListItem`]s |
//! | [`FavoriteEntry`] | A creature marked by one caller |
//! | [`CallerId`] | Identity selecting a favorites collection |
//! | [`UtcDateTime`] | UTC timestamp |
//!
//! Creature data is read-only and never retained past the call that fetched
//! it. Favorite entries are immutable once created.

mod creature;
mod favorite;
mod timestamp;

pub use creature::{
    AbilitySlot, Creature, CreatureList, CreatureListItem, NamedResource, Sprites, StatEntry,
    TypeSlot,
};
pub use favorite::{CallerId, FavoriteEntry};
pub use timestamp::UtcDateTime;
