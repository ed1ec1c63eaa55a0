//! `SQLite` implementation of [`ArtworkRepository`].

use std::future::Future;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use gallery_app::ports::ArtworkRepository;
use gallery_domain::artwork::Artwork;
use gallery_domain::error::GalleryError;
use gallery_domain::id::{ArtistId, ArtworkId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Artwork`].
pub(crate) struct Wrapper(pub(crate) Artwork);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Artwork> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let creation_date: String = row.try_get("creation_date")?;
        let artist_id: i64 = row.try_get("artist_id")?;

        let creation_date = creation_date
            .parse::<NaiveDate>()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Artwork {
            id: Some(ArtworkId::new(id)),
            title: row.try_get("title")?,
            description: row.try_get("description")?,
            creation_date,
            medium: row.try_get("medium")?,
            image_url: row.try_get("image_url")?,
            artist_id: ArtistId::new(artist_id),
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO artworks (title, description, creation_date, medium, image_url, artist_id)
    VALUES (?, ?, ?, ?, ?, ?)
";
const SELECT_BY_ID: &str = "SELECT * FROM artworks WHERE id = ?";
// `LIKE` only folds ASCII case, so matching happens in `Artwork::matches`.
const SELECT_ALL: &str = "SELECT * FROM artworks ORDER BY id ASC";
const UPDATE: &str = r"
    UPDATE artworks
    SET title = ?, description = ?, creation_date = ?, medium = ?, image_url = ?, artist_id = ?
    WHERE id = ?
";
const DELETE_BY_ID: &str = "DELETE FROM artworks WHERE id = ?";

/// `SQLite`-backed artwork repository.
pub struct SqliteArtworkRepository {
    pool: SqlitePool,
}

impl SqliteArtworkRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ArtworkRepository for SqliteArtworkRepository {
    fn create(
        &self,
        artwork: &Artwork,
    ) -> impl Future<Output = Result<ArtworkId, GalleryError>> + Send {
        let pool = self.pool.clone();
        let artwork = artwork.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(&artwork.title)
                .bind(&artwork.description)
                .bind(artwork.creation_date.to_string())
                .bind(&artwork.medium)
                .bind(&artwork.image_url)
                .bind(artwork.artist_id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(ArtworkId::new(result.last_insert_rowid()))
        }
    }

    fn get_by_id(
        &self,
        id: ArtworkId,
    ) -> impl Future<Output = Result<Option<Artwork>, GalleryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn search(
        &self,
        keyword: &str,
    ) -> impl Future<Output = Result<Vec<Artwork>, GalleryError>> + Send {
        let pool = self.pool.clone();
        let keyword = keyword.to_owned();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows
                .into_iter()
                .map(|w| w.0)
                .filter(|artwork| artwork.matches(&keyword))
                .collect())
        }
    }

    fn update(
        &self,
        id: ArtworkId,
        artwork: &Artwork,
    ) -> impl Future<Output = Result<bool, GalleryError>> + Send {
        let pool = self.pool.clone();
        let artwork = artwork.clone();
        async move {
            let result = sqlx::query(UPDATE)
                .bind(&artwork.title)
                .bind(&artwork.description)
                .bind(artwork.creation_date.to_string())
                .bind(&artwork.medium)
                .bind(&artwork.image_url)
                .bind(artwork.artist_id.as_i64())
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }

    fn delete(&self, id: ArtworkId) -> impl Future<Output = Result<bool, GalleryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(result.rows_affected() > 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> SqliteArtworkRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteArtworkRepository::new(db.pool().clone())
    }

    fn test_artwork(title: &str, description: &str) -> Artwork {
        Artwork::builder()
            .title(title)
            .description(description)
            .creation_date(NaiveDate::from_ymd_opt(1889, 6, 1).unwrap())
            .medium("oil")
            .image_url("https://example.org/image.jpg")
            .artist_id(ArtistId::new(1))
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_create_and_retrieve_artwork_when_valid() {
        let repo = setup().await;
        let artwork = test_artwork("Starry Night", "oil painting");

        let id = repo.create(&artwork).await.unwrap();

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, artwork.with_id(id));
    }

    #[tokio::test]
    async fn should_assign_increasing_ids() {
        let repo = setup().await;
        let first = repo.create(&test_artwork("A", "")).await.unwrap();
        let second = repo.create(&test_artwork("B", "")).await.unwrap();
        assert!(second > first);
    }

    #[tokio::test]
    async fn should_return_none_when_artwork_not_found() {
        let repo = setup().await;
        let result = repo.get_by_id(ArtworkId::new(404)).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn should_search_title_and_description_ignoring_case() {
        let repo = setup().await;
        let night = repo
            .create(&test_artwork("Starry Night", "oil painting"))
            .await
            .unwrap();
        let lilies = repo
            .create(&test_artwork("Water Lilies", "Impressionist series"))
            .await
            .unwrap();

        let by_title = repo.search("starry").await.unwrap();
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].id, Some(night));

        let by_description = repo.search("IMPRESSIONIST").await.unwrap();
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].id, Some(lilies));
    }

    #[tokio::test]
    async fn should_return_search_results_ordered_by_id() {
        let repo = setup().await;
        let first = repo.create(&test_artwork("Sunflowers", "")).await.unwrap();
        let second = repo.create(&test_artwork("Sunrise", "")).await.unwrap();

        let ids: Vec<_> = repo
            .search("sun")
            .await
            .unwrap()
            .into_iter()
            .filter_map(|a| a.id)
            .collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[tokio::test]
    async fn should_return_empty_when_search_matches_nothing() {
        let repo = setup().await;
        repo.create(&test_artwork("Starry Night", "oil painting"))
            .await
            .unwrap();
        assert!(repo.search("bronze").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_match_wildcard_characters_literally() {
        let repo = setup().await;
        repo.create(&test_artwork("Starry Night", "oil painting"))
            .await
            .unwrap();
        let percent = repo.create(&test_artwork("100% Blue", "")).await.unwrap();

        assert!(repo.search("_").await.unwrap().is_empty());
        let results = repo.search("%").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, Some(percent));
    }

    #[tokio::test]
    async fn should_update_every_field_when_artwork_exists() {
        let repo = setup().await;
        let id = repo
            .create(&test_artwork("Starry Night", "oil painting"))
            .await
            .unwrap();

        let replacement = Artwork::builder()
            .title("The Starry Night")
            .description("view from the asylum window")
            .creation_date(NaiveDate::from_ymd_opt(1889, 6, 18).unwrap())
            .medium("oil on canvas")
            .image_url("https://example.org/other.jpg")
            .artist_id(ArtistId::new(2))
            .build()
            .unwrap();
        assert!(repo.update(id, &replacement).await.unwrap());

        let fetched = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(fetched, replacement.with_id(id));
    }

    #[tokio::test]
    async fn should_report_false_when_updating_missing_artwork() {
        let repo = setup().await;
        let updated = repo
            .update(ArtworkId::new(77), &test_artwork("Ghost", ""))
            .await
            .unwrap();
        assert!(!updated);
    }

    #[tokio::test]
    async fn should_delete_artwork_when_exists() {
        let repo = setup().await;
        let id = repo.create(&test_artwork("Starry Night", "")).await.unwrap();

        assert!(repo.delete(id).await.unwrap());
        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert!(!repo.delete(id).await.unwrap());
    }

    #[tokio::test]
    async fn should_search_ignoring_case_beyond_ascii() {
        let repo = setup().await;
        repo.create(&test_artwork("Starry Night", "oil painting"))
            .await
            .unwrap();
        let etoile = repo
            .create(&test_artwork("Étoile du soir", "ÜBER alles"))
            .await
            .unwrap();

        for keyword in ["étoile", "ÉTOILE", "über", "Über"] {
            let results = repo.search(keyword).await.unwrap();
            assert_eq!(results.len(), 1, "keyword {keyword:?}");
            assert_eq!(results[0].id, Some(etoile));
        }
    }
}
