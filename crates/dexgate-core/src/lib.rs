//! # Dexgate Core
//!
//! Aggregation layer over a third-party creature-data REST service with a
//! per-caller favorites list on top.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`adapters`] | Upstream adapters (PokeAPI) |
//! | [`config`] | Upstream connection settings |
//! | [`data_source`] | `CreatureSource` trait, paging and upstream errors |
//! | [`domain`] | Creature, list and favorite models |
//! | [`error`] | Validation and gateway errors |
//! | [`favorites`] | Per-caller favorites store |
//! | [`gateway`] | Public operation surface |
//! | [`http_client`] | HTTP transport abstraction |
//! | [`normalize`] | Upstream payload to domain mapping |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use dexgate_core::{CallerId, FavoritesStore, Gateway, PokeApiAdapter, UpstreamConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let source = Arc::new(PokeApiAdapter::new(UpstreamConfig::default())?);
//!     let gateway = Gateway::new(source, Arc::new(FavoritesStore::new()));
//!
//!     let pikachu = gateway.get_creature("pikachu").await?;
//!     let outcome = gateway
//!         .add_favorite(&CallerId::default(), pikachu.id, &pikachu.name)
//!         .await;
//!     assert!(outcome.success);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │  Transport      │  (dexgate-server)
//! └────────┬────────┘
//!          │ caller id + arguments
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │  Gateway        │────▶│ Favorites Store  │
//! └────────┬────────┘     └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐     ┌──────────────────┐
//! │ CreatureSource  │────▶│ HTTP Client      │
//! │ (PokeAPI)       │     │ (reqwest)        │
//! └────────┬────────┘     └──────────────────┘
//!          ▼
//! ┌─────────────────┐
//! │ Normalizer      │
//! └─────────────────┘
//! ```
//!
//! ## Error Handling
//!
//! The adapter reports a missing creature as `Ok(None)`. Only the gateway's
//! read operations turn that into [`GatewayError::NotFound`]; favorite
//! mutations report it in their outcome instead.

pub mod adapters;
pub mod config;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod favorites;
pub mod gateway;
pub mod http_client;
pub mod normalize;

pub use adapters::PokeApiAdapter;

pub use config::{ConfigError, UpstreamConfig};

pub use data_source::{
    CreatureSource, PageRequest, SourceFuture, UpstreamError, UpstreamErrorKind, SEARCH_CEILING,
};

pub use domain::{
    AbilitySlot, CallerId, Creature, CreatureList, CreatureListItem, FavoriteEntry,
    NamedResource, Sprites, StatEntry, TypeSlot, UtcDateTime,
};

pub use error::{GatewayError, ValidationError};

pub use favorites::{FavoritesError, FavoritesStore};

pub use gateway::{AddFavoriteOutcome, FavoriteOutcome, FavoriteWithCreature, Gateway};

pub use http_client::{
    HttpClient, HttpError, HttpErrorKind, HttpRequest, HttpResponse, ReqwestHttpClient,
};

pub use normalize::IdExtractor;
