//! Storage port — repository traits for persistence.
//!
//! Repositories translate between domain values and stored rows. They hold no
//! business rules: whether an update or delete found its target is reported
//! through the affected-row count, never through a prior lookup.

use std::future::Future;

use gallery_domain::artwork::Artwork;
use gallery_domain::error::GalleryError;
use gallery_domain::favorite::Favorite;
use gallery_domain::id::{ArtworkId, UserId};

/// Repository for the artwork catalog.
pub trait ArtworkRepository {
    /// Insert a new artwork and return the id assigned by the store.
    ///
    /// Any id already present on `artwork` is ignored.
    fn create(
        &self,
        artwork: &Artwork,
    ) -> impl Future<Output = Result<ArtworkId, GalleryError>> + Send;

    /// Get an artwork by its identifier.
    fn get_by_id(
        &self,
        id: ArtworkId,
    ) -> impl Future<Output = Result<Option<Artwork>, GalleryError>> + Send;

    /// Artworks whose title or description contains `keyword`, ignoring case,
    /// ordered by id ascending.
    fn search(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<Artwork>, GalleryError>> + Send;

    /// Overwrite every field of the artwork stored under `id`.
    ///
    /// Returns `false` when no row has that id.
    fn update(
        &self,
        id: ArtworkId,
        artwork: &Artwork,
    ) -> impl Future<Output = Result<bool, GalleryError>> + Send;

    /// Delete an artwork together with every favorite referencing it, as one
    /// atomic change. Returns `false` when no row has that id.
    fn delete(&self, id: ArtworkId) -> impl Future<Output = Result<bool, GalleryError>> + Send;
}

/// Repository for the user ↔ artwork favorites relation.
pub trait FavoriteRepository {
    /// Insert a favorite pair.
    fn add(&self, favorite: Favorite) -> impl Future<Output = Result<(), GalleryError>> + Send;

    /// Whether the pair is already stored.
    fn exists(&self, favorite: Favorite)
    -> impl Future<Output = Result<bool, GalleryError>> + Send;

    /// Delete a favorite pair. Returns `false` when the pair was not stored.
    fn remove(&self, favorite: Favorite)
    -> impl Future<Output = Result<bool, GalleryError>> + Send;

    /// Artworks favorited by `user_id`, ordered by artwork id ascending.
    fn artworks_for_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Artwork>, GalleryError>> + Send;
}
