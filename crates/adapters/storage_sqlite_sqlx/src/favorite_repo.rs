//! `SQLite` implementation of [`FavoriteRepository`].

use std::future::Future;

use sqlx::SqlitePool;

use gallery_app::ports::FavoriteRepository;
use gallery_domain::artwork::Artwork;
use gallery_domain::error::GalleryError;
use gallery_domain::favorite::Favorite;
use gallery_domain::id::UserId;

use crate::artwork_repo::Wrapper;
use crate::error::StorageError;

const INSERT: &str = "INSERT INTO favorites (user_id, artwork_id) VALUES (?, ?)";
const EXISTS: &str = "SELECT EXISTS (SELECT 1 FROM favorites WHERE user_id = ? AND artwork_id = ?)";
const DELETE: &str = "DELETE FROM favorites WHERE user_id = ? AND artwork_id = ?";
const SELECT_ARTWORKS_BY_USER: &str = r"
    SELECT a.* FROM artworks a
    INNER JOIN favorites f ON f.artwork_id = a.id
    WHERE f.user_id = ?
    ORDER BY a.id ASC
";

/// `SQLite`-backed favorites repository.
pub struct SqliteFavoriteRepository {
    pool: SqlitePool,
}

impl SqliteFavoriteRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl FavoriteRepository for SqliteFavoriteRepository {
    fn add(&self, favorite: Favorite) -> impl Future<Output = Result<(), GalleryError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(favorite.user_id.as_i64())
                .bind(favorite.artwork_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn exists(
        &self,
        favorite: Favorite,
    ) -> impl Future<Output = Result<bool, GalleryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let (found,): (i64,) = sqlx::query_as(EXISTS)
                .bind(favorite.user_id.as_i64())
                .bind(favorite.artwork_id.as_i64())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(found != 0)
        }
    }

    fn remove(
        &self,
        favorite: Favorite,
    ) -> impl Future<Output = Result<bool, GalleryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE)
                .bind(favorite.user_id.as_i64())
                .bind(favorite.artwork_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn artworks_for_user(
        &self,
        user_id: UserId,
    ) -> impl Future<Output = Result<Vec<Artwork>, GalleryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ARTWORKS_BY_USER)
                .bind(user_id.as_i64())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
