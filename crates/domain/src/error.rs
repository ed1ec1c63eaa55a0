//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`GalleryError`]
//! via `From`. Not-found conditions carry the id that was looked up so the
//! message shown to the user names it.

use crate::id::{ArtworkId, UserId};

/// Top-level error returned by gallery use-cases.
#[derive(Debug, thiserror::Error)]
pub enum GalleryError {
    /// A domain invariant was violated.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// No artwork exists with the requested id.
    #[error(transparent)]
    ArtworkNotFound(#[from] ArtworkNotFoundError),

    /// The user is unknown to the favorites relation.
    #[error(transparent)]
    UserNotFound(#[from] UserNotFoundError),

    /// The record store failed (connectivity, constraint violation, decoding).
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Domain invariant violations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("title must not be empty")]
    EmptyTitle,
    #[error("artwork already has id {0} and cannot be inserted again")]
    AlreadyPersisted(ArtworkId),
    #[error("artwork has no id")]
    MissingId,
}

/// Raised when an artwork lookup finds no row.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Artwork with ID {id} not found")]
pub struct ArtworkNotFoundError {
    pub id: ArtworkId,
}

/// Raised when a favorites lookup finds nothing for a user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("User with ID {id} not found or has no favorite artworks")]
pub struct UserNotFoundError {
    pub id: UserId,
}
