//! Gallery service — the eight user-facing gallery operations.
//!
//! Mutating operations report a plain `bool`: the caller only needs to know
//! whether to retry its input. The underlying failure is logged here before it
//! is dropped. Lookups return `Result` so absence must be handled explicitly.

use gallery_domain::artwork::Artwork;
use gallery_domain::error::{
    ArtworkNotFoundError, GalleryError, UserNotFoundError, ValidationError,
};
use gallery_domain::favorite::Favorite;
use gallery_domain::id::{ArtworkId, UserId};

use crate::ports::{ArtworkRepository, FavoriteRepository};

/// Collapse a fallible mutation into its success flag, logging the cause of
/// any failure.
fn succeeded(result: Result<bool, GalleryError>, operation: &'static str) -> bool {
    match result {
        Ok(done) => done,
        Err(err) => {
            tracing::warn!(error = ?err, operation, "gallery operation failed");
            false
        }
    }
}

/// Application service for the artwork catalog and users' favorites.
pub struct GalleryService<A, F> {
    artworks: A,
    favorites: F,
}

impl<A, F> GalleryService<A, F>
where
    A: ArtworkRepository,
    F: FavoriteRepository,
{
    /// Create a new service backed by the given repositories.
    pub fn new(artworks: A, favorites: F) -> Self {
        Self {
            artworks,
            favorites,
        }
    }

    /// Insert a new artwork and return it with its store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Validation`] if the artwork already has an id or
    /// an empty title, or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, artwork), fields(title = %artwork.title))]
    pub async fn create_artwork(&self, artwork: Artwork) -> Result<Artwork, GalleryError> {
        if let Some(id) = artwork.id {
            return Err(ValidationError::AlreadyPersisted(id).into());
        }
        artwork.validate()?;
        let id = self.artworks.create(&artwork).await?;
        tracing::debug!(%id, "artwork created");
        Ok(artwork.with_id(id))
    }

    /// Insert a new artwork. Returns `false` if it was rejected or the store failed.
    pub async fn add_artwork(&self, artwork: Artwork) -> bool {
        succeeded(
            self.create_artwork(artwork).await.map(|_| true),
            "add_artwork",
        )
    }

    /// Overwrite every field of an existing artwork.
    ///
    /// Returns `false` when the artwork carries no id, no row has that id, or
    /// the store failed.
    #[tracing::instrument(skip(self, artwork), fields(id = ?artwork.id))]
    pub async fn update_artwork(&self, artwork: Artwork) -> bool {
        succeeded(self.try_update_artwork(&artwork).await, "update_artwork")
    }

    async fn try_update_artwork(&self, artwork: &Artwork) -> Result<bool, GalleryError> {
        let id = artwork.id.ok_or(ValidationError::MissingId)?;
        artwork.validate()?;
        let updated = self.artworks.update(id, artwork).await?;
        if !updated {
            tracing::debug!(%id, "no artwork to update");
        }
        Ok(updated)
    }

    /// Delete an artwork together with every favorite that references it.
    ///
    /// Returns `false` when no artwork has `id` or the store failed.
    #[tracing::instrument(skip(self))]
    pub async fn remove_artwork(&self, id: ArtworkId) -> bool {
        succeeded(self.artworks.delete(id).await, "remove_artwork")
    }

    /// Look up an artwork by id.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::ArtworkNotFound`] when no artwork with `id`
    /// exists, or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_artwork_by_id(&self, id: ArtworkId) -> Result<Artwork, GalleryError> {
        self.artworks
            .get_by_id(id)
            .await?
            .ok_or_else(|| ArtworkNotFoundError { id }.into())
    }

    /// Artworks whose title or description contains `keyword`, ignoring case,
    /// ordered by id. An empty result is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn search_artworks(&self, keyword: &str) -> Result<Vec<Artwork>, GalleryError> {
        self.artworks.search(keyword).await
    }

    /// Mark an artwork as a favorite of a user.
    ///
    /// Returns `false` when the artwork does not exist, the pair is already a
    /// favorite, or the store failed.
    #[tracing::instrument(skip(self))]
    pub async fn add_artwork_to_favorite(&self, user_id: UserId, artwork_id: ArtworkId) -> bool {
        succeeded(
            self.try_add_favorite(Favorite::new(user_id, artwork_id)).await,
            "add_artwork_to_favorite",
        )
    }

    async fn try_add_favorite(&self, favorite: Favorite) -> Result<bool, GalleryError> {
        if self.artworks.get_by_id(favorite.artwork_id).await?.is_none() {
            tracing::debug!(artwork_id = %favorite.artwork_id, "cannot favorite unknown artwork");
            return Ok(false);
        }
        if self.favorites.exists(favorite).await? {
            tracing::debug!("artwork already in favorites");
            return Ok(false);
        }
        self.favorites.add(favorite).await?;
        Ok(true)
    }

    /// Remove an artwork from a user's favorites.
    ///
    /// Returns `false` when the pair was not a favorite or the store failed.
    #[tracing::instrument(skip(self))]
    pub async fn remove_artwork_from_favorite(
        &self,
        user_id: UserId,
        artwork_id: ArtworkId,
    ) -> bool {
        succeeded(
            self.favorites
                .remove(Favorite::new(user_id, artwork_id))
                .await,
            "remove_artwork_from_favorite",
        )
    }

    /// List the artworks a user has favorited, ordered by artwork id.
    ///
    /// Users are not stored by the gallery, so a user without any favorite is
    /// indistinguishable from an unknown one.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::UserNotFound`] when the user has no favorites,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_user_favorite_artworks(
        &self,
        user_id: UserId,
    ) -> Result<Vec<Artwork>, GalleryError> {
        let artworks = self.favorites.artworks_for_user(user_id).await?;
        if artworks.is_empty() {
            return Err(UserNotFoundError { id: user_id }.into());
        }
        Ok(artworks)
    }
}
