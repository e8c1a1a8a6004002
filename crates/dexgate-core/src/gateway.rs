//! Public operation surface.
//!
//! [`Gateway`] validates arguments, delegates to the injected
//! [`CreatureSource`] and [`FavoritesStore`], and shapes the result.
//!
//! Read operations raise [`GatewayError`]. Favorite mutations never raise:
//! they report `success: false` with a message, so "the operation could not
//! run" stays distinct from "the operation ran and said no".

use std::sync::Arc;

use futures::future::try_join_all;
use serde::Serialize;
use tracing::{instrument, warn};

use crate::data_source::{CreatureSource, PageRequest};
use crate::favorites::FavoritesStore;
use crate::{
    CallerId, Creature, CreatureList, CreatureListItem, FavoriteEntry, GatewayError,
    ValidationError,
};

/// Result of `add_favorite`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddFavoriteOutcome {
    pub success: bool,
    pub message: String,
    pub favorite: Option<FavoriteEntry>,
}

impl AddFavoriteOutcome {
    fn added(favorite: FavoriteEntry) -> Self {
        Self {
            success: true,
            message: format!("{} added to favorites", favorite.name),
            favorite: Some(favorite),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            favorite: None,
        }
    }
}

/// Result of `remove_favorite` and `clear_favorites`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteOutcome {
    pub success: bool,
    pub message: String,
}

impl FavoriteOutcome {
    fn new(success: bool, message: impl Into<String>) -> Self {
        Self {
            success,
            message: message.into(),
        }
    }
}

/// A favorite alongside the creature it points at, resolved at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FavoriteWithCreature {
    #[serde(flatten)]
    pub favorite: FavoriteEntry,
    pub creature: Creature,
}

#[derive(Clone)]
pub struct Gateway {
    source: Arc<dyn CreatureSource>,
    favorites: Arc<FavoritesStore>,
}

impl Gateway {
    pub fn new(source: Arc<dyn CreatureSource>, favorites: Arc<FavoritesStore>) -> Self {
        Self { source, favorites }
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    /// # Errors
    ///
    /// Returns [`GatewayError::Upstream`] when the upstream call fails.
    #[instrument(skip(self))]
    pub async fn list_creatures(&self, page: PageRequest) -> Result<CreatureList, GatewayError> {
        Ok(self.source.list_creatures(page).await?)
    }

    /// # Errors
    ///
    /// - [`GatewayError::Validation`] for a blank identifier
    /// - [`GatewayError::NotFound`] when upstream has no such creature
    /// - [`GatewayError::Upstream`] when the upstream call fails
    #[instrument(skip(self))]
    pub async fn get_creature(&self, identifier: &str) -> Result<Creature, GatewayError> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(ValidationError::EmptyIdentifier.into());
        }

        self.source
            .get_creature(identifier)
            .await?
            .ok_or_else(|| GatewayError::not_found(identifier))
    }

    /// # Errors
    ///
    /// - [`GatewayError::Validation`] for a blank query, before any upstream call
    /// - [`GatewayError::Upstream`] when the upstream call fails
    #[instrument(skip(self))]
    pub async fn search_creatures(
        &self,
        query: &str,
    ) -> Result<Vec<CreatureListItem>, GatewayError> {
        if query.trim().is_empty() {
            return Err(ValidationError::EmptySearchQuery.into());
        }

        Ok(self.source.search_creatures(query).await?)
    }

    pub fn get_favorites(&self, caller: &CallerId) -> Vec<FavoriteEntry> {
        self.favorites.list(caller)
    }

    pub fn is_favorite(&self, caller: &CallerId, id: u32) -> bool {
        self.favorites.is_favorite(caller, id)
    }

    pub fn favorite_count(&self, caller: &CallerId) -> usize {
        self.favorites.count(caller)
    }

    /// Favorites a creature after checking that it exists upstream.
    #[instrument(skip(self))]
    pub async fn add_favorite(&self, caller: &CallerId, id: u32, name: &str) -> AddFavoriteOutcome {
        match self.source.get_creature(&id.to_string()).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return AddFavoriteOutcome::rejected(format!("creature with id {id} not found"));
            }
            Err(error) => {
                warn!(error = %error, "existence check failed");
                return AddFavoriteOutcome::rejected(error.to_string());
            }
        }

        match self.favorites.add(caller, id, name) {
            Ok(favorite) => AddFavoriteOutcome::added(favorite),
            Err(error) => AddFavoriteOutcome::rejected(error.to_string()),
        }
    }

    #[instrument(skip(self))]
    pub fn remove_favorite(&self, caller: &CallerId, id: u32) -> FavoriteOutcome {
        if self.favorites.remove(caller, id) {
            FavoriteOutcome::new(true, "creature removed from favorites")
        } else {
            FavoriteOutcome::new(false, format!("creature with id {id} not found in favorites"))
        }
    }

    #[instrument(skip(self))]
    pub fn clear_favorites(&self, caller: &CallerId) -> FavoriteOutcome {
        self.favorites.clear(caller);
        FavoriteOutcome::new(true, "all favorites cleared")
    }

    /// Re-fetches the creature behind a favorite; reflects current upstream data.
    ///
    /// # Errors
    ///
    /// - [`GatewayError::NotFound`] if upstream no longer has the creature
    /// - [`GatewayError::Upstream`] when the upstream call fails
    pub async fn favorite_creature(
        &self,
        favorite: &FavoriteEntry,
    ) -> Result<Creature, GatewayError> {
        let identifier = favorite.id.to_string();
        let creature = self.source.get_creature(&identifier).await?;
        creature.ok_or_else(|| GatewayError::not_found(favorite.id.to_string()))
    }

    /// The caller's favorites, each with its creature resolved concurrently.
    ///
    /// # Errors
    ///
    /// Fails as a whole with the first resolution error.
    #[instrument(skip(self))]
    pub async fn favorites_with_creatures(
        &self,
        caller: &CallerId,
    ) -> Result<Vec<FavoriteWithCreature>, GatewayError> {
        let resolutions = self.favorites.list(caller).into_iter().map(|favorite| async move {
            let creature = self.favorite_creature(&favorite).await?;
            Ok::<_, GatewayError>(FavoriteWithCreature { favorite, creature })
        });

        try_join_all(resolutions).await
    }
}
