//! Favorite — the relationship between a user and an artwork they like.

use serde::{Deserialize, Serialize};

use crate::id::{ArtworkId, UserId};

/// A `(user, artwork)` pair. Identified only by its two keys; a given pair
/// exists at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Favorite {
    pub user_id: UserId,
    pub artwork_id: ArtworkId,
}

impl Favorite {
    #[must_use]
    pub const fn new(user_id: UserId, artwork_id: ArtworkId) -> Self {
        Self {
            user_id,
            artwork_id,
        }
    }
}
