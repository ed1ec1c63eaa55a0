//! Artwork — a catalog record describing a single piece of art.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{GalleryError, ValidationError};
use crate::id::{ArtistId, ArtworkId};

/// A piece of art in the catalog.
///
/// `id` is `None` until the store has accepted the record and assigned a key.
/// Once set it never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    pub id: Option<ArtworkId>,
    pub title: String,
    pub description: String,
    pub creation_date: NaiveDate,
    pub medium: String,
    pub image_url: String,
    pub artist_id: ArtistId,
}

impl Artwork {
    /// Create a builder for constructing an [`Artwork`].
    #[must_use]
    pub fn builder() -> ArtworkBuilder {
        ArtworkBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Validation`] when `title` is empty.
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::EmptyTitle.into());
        }
        Ok(())
    }

    /// Return a copy carrying the store-assigned id.
    #[must_use]
    pub fn with_id(self, id: ArtworkId) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    /// Whether `keyword` occurs in the title or description, ignoring case.
    #[must_use]
    pub fn matches(&self, keyword: &str) -> bool {
        let keyword = keyword.to_lowercase();
        self.title.to_lowercase().contains(&keyword)
            || self.description.to_lowercase().contains(&keyword)
    }
}

/// Step-by-step builder for [`Artwork`].
#[derive(Debug, Default)]
pub struct ArtworkBuilder {
    title: Option<String>,
    description: Option<String>,
    creation_date: Option<NaiveDate>,
    medium: Option<String>,
    image_url: Option<String>,
    artist_id: Option<ArtistId>,
}

impl ArtworkBuilder {
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn creation_date(mut self, creation_date: NaiveDate) -> Self {
        self.creation_date = Some(creation_date);
        self
    }

    #[must_use]
    pub fn medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    #[must_use]
    pub fn image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }

    #[must_use]
    pub fn artist_id(mut self, artist_id: ArtistId) -> Self {
        self.artist_id = Some(artist_id);
        self
    }

    /// Consume the builder, validate, and return an [`Artwork`].
    ///
    /// Missing text fields default to empty, a missing date to
    /// `NaiveDate::default()` and a missing artist to id `0`.
    ///
    /// # Errors
    ///
    /// Returns [`GalleryError::Validation`] if `title` is missing or empty.
    pub fn build(self) -> Result<Artwork, GalleryError> {
        let artwork = Artwork {
            id: None,
            title: self.title.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            creation_date: self.creation_date.unwrap_or_default(),
            medium: self.medium.unwrap_or_default(),
            image_url: self.image_url.unwrap_or_default(),
            artist_id: self.artist_id.unwrap_or(ArtistId::new(0)),
        };
        artwork.validate()?;
        Ok(artwork)
    }
}
