//! Text menu driving the [`GalleryService`].
//!
//! Reads one answer per line from any [`BufRead`] and writes prompts and
//! results to any [`Write`], so sessions can be scripted in tests. Input that
//! does not parse sends the user back to the menu. End of input ends the
//! session as if "Exit" had been chosen.

use std::io::{BufRead, Write};
use std::str::FromStr;

use chrono::NaiveDate;

use gallery_app::ports::{ArtworkRepository, FavoriteRepository};
use gallery_app::services::gallery_service::GalleryService;
use gallery_domain::artwork::Artwork;
use gallery_domain::error::GalleryError;
use gallery_domain::id::{ArtistId, ArtworkId, UserId};

const MENU: &str = "
===== Virtual Art Gallery =====
1. Add Artwork
2. Update Artwork
3. Remove Artwork
4. Get Artwork by ID
5. Search Artworks
6. Add Artwork to User Favorites
7. Remove Artwork from User Favorites
8. Get User Favorite Artworks
9. Exit";

const GOODBYE: &str = "Exiting the Virtual Art Gallery. Goodbye!";

/// Errors that end a console session.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// Reading input or writing output failed.
    #[error("console i/o failed")]
    Io(#[from] std::io::Error),
    /// The gallery store became unusable.
    #[error("gallery store unavailable")]
    Gallery(#[from] GalleryError),
}

/// An interactive session over a gallery service.
pub struct Console<'s, A, F, R, W> {
    service: &'s GalleryService<A, F>,
    input: R,
    output: W,
    closed: bool,
}

impl<'s, A, F, R, W> Console<'s, A, F, R, W>
where
    A: ArtworkRepository,
    F: FavoriteRepository,
    R: BufRead,
    W: Write,
{
    /// Bind a menu session to a service and its input/output streams.
    pub fn new(service: &'s GalleryService<A, F>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
            closed: false,
        }
    }

    /// Show the menu and dispatch choices until the user exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Io`] if the terminal fails, or
    /// [`ConsoleError::Gallery`] when a lookup hits a storage failure.
    pub async fn run(mut self) -> Result<(), ConsoleError> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(choice) = self.ask("Choose an option: ")? else {
                break;
            };
            match choice.trim() {
                "1" => self.add_artwork().await?,
                "2" => self.update_artwork().await?,
                "3" => self.remove_artwork().await?,
                "4" => self.get_artwork_by_id().await?,
                "5" => self.search_artworks().await?,
                "6" => self.add_favorite().await?,
                "7" => self.remove_favorite().await?,
                "8" => self.get_favorites().await?,
                "9" => break,
                _ => writeln!(self.output, "Invalid option. Please try again.")?,
            }
            if self.closed {
                break;
            }
        }
        writeln!(self.output, "{GOODBYE}")?;
        self.output.flush()?;
        Ok(())
    }

    async fn add_artwork(&mut self) -> Result<(), ConsoleError> {
        let Some(artwork) = self.ask_artwork(None)? else {
            return Ok(());
        };
        let message = if self.service.add_artwork(artwork).await {
            "Artwork added successfully."
        } else {
            "Failed to add artwork."
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    async fn update_artwork(&mut self) -> Result<(), ConsoleError> {
        let Some(id) = self.ask_parsed::<ArtworkId>("Enter Artwork ID to update: ", "ID")?
        else {
            return Ok(());
        };
        let Some(artwork) = self.ask_artwork(Some(id))? else {
            return Ok(());
        };
        let message = if self.service.update_artwork(artwork).await {
            "Artwork updated successfully."
        } else {
            "Failed to update artwork."
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    async fn remove_artwork(&mut self) -> Result<(), ConsoleError> {
        let Some(id) = self.ask_parsed::<ArtworkId>("Enter Artwork ID to remove: ", "ID")?
        else {
            return Ok(());
        };
        let message = if self.service.remove_artwork(id).await {
            "Artwork removed successfully."
        } else {
            "Failed to remove artwork."
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    async fn get_artwork_by_id(&mut self) -> Result<(), ConsoleError> {
        let Some(id) = self.ask_parsed::<ArtworkId>("Enter Artwork ID: ", "ID")? else {
            return Ok(());
        };
        match self.service.get_artwork_by_id(id).await {
            Ok(artwork) => writeln!(
                self.output,
                "Artwork: {}, {}",
                artwork.title, artwork.description
            )?,
            Err(err @ GalleryError::ArtworkNotFound(_)) => writeln!(self.output, "{err}")?,
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    async fn search_artworks(&mut self) -> Result<(), ConsoleError> {
        let Some(keyword) = self.ask("Enter keyword to search: ")? else {
            return Ok(());
        };
        let artworks = self.service.search_artworks(&keyword).await?;
        if artworks.is_empty() {
            writeln!(
                self.output,
                "No artworks found matching the keyword \"{keyword}\"."
            )?;
        } else {
            writeln!(self.output, "Search Results:")?;
            self.list(&artworks)?;
        }
        Ok(())
    }

    async fn add_favorite(&mut self) -> Result<(), ConsoleError> {
        let Some((user_id, artwork_id)) = self.ask_favorite()? else {
            return Ok(());
        };
        let message = if self
            .service
            .add_artwork_to_favorite(user_id, artwork_id)
            .await
        {
            "Artwork added to favorites."
        } else {
            "Failed to add to favorites."
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    async fn remove_favorite(&mut self) -> Result<(), ConsoleError> {
        let Some((user_id, artwork_id)) = self.ask_favorite()? else {
            return Ok(());
        };
        let message = if self
            .service
            .remove_artwork_from_favorite(user_id, artwork_id)
            .await
        {
            "Artwork removed from favorites."
        } else {
            "Failed to remove from favorites."
        };
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    async fn get_favorites(&mut self) -> Result<(), ConsoleError> {
        let Some(user_id) = self.ask_parsed::<UserId>("Enter User ID: ", "ID")? else {
            return Ok(());
        };
        match self.service.get_user_favorite_artworks(user_id).await {
            Ok(artworks) => {
                writeln!(self.output, "Favorite Artworks:")?;
                self.list(&artworks)?;
            }
            Err(err @ GalleryError::UserNotFound(_)) => writeln!(self.output, "{err}")?,
            Err(err) => return Err(err.into()),
        }
        Ok(())
    }

    fn list(&mut self, artworks: &[Artwork]) -> Result<(), ConsoleError> {
        for artwork in artworks {
            let id = artwork.id.map(|id| id.to_string()).unwrap_or_default();
            writeln!(self.output, "ID: {id}, Title: {}", artwork.title)?;
        }
        Ok(())
    }

    /// Ask for every artwork field. `id` is `Some` when editing an existing
    /// artwork, which also switches the prompts to "new" values.
    fn ask_artwork(&mut self, id: Option<ArtworkId>) -> Result<Option<Artwork>, ConsoleError> {
        let new = if id.is_some() { "new " } else { "" };
        let Some(title) = self.ask(&format!("Enter {new}Title: "))? else {
            return Ok(None);
        };
        let Some(description) = self.ask(&format!("Enter {new}Description: "))? else {
            return Ok(None);
        };
        let Some(creation_date) = self.ask_parsed::<NaiveDate>(
            &format!("Enter {new}Creation Date (yyyy-mm-dd): "),
            "date (expected yyyy-mm-dd)",
        )?
        else {
            return Ok(None);
        };
        let Some(medium) = self.ask(&format!("Enter {new}Medium: "))? else {
            return Ok(None);
        };
        let Some(image_url) = self.ask(&format!("Enter {new}Image URL: "))? else {
            return Ok(None);
        };
        let Some(artist_id) =
            self.ask_parsed::<ArtistId>(&format!("Enter {new}Artist ID: "), "ID")?
        else {
            return Ok(None);
        };
        Ok(Some(Artwork {
            id,
            title,
            description,
            creation_date,
            medium,
            image_url,
            artist_id,
        }))
    }

    fn ask_favorite(&mut self) -> Result<Option<(UserId, ArtworkId)>, ConsoleError> {
        let Some(user_id) = self.ask_parsed::<UserId>("Enter User ID: ", "ID")? else {
            return Ok(None);
        };
        let Some(artwork_id) = self.ask_parsed::<ArtworkId>("Enter Artwork ID: ", "ID")? else {
            return Ok(None);
        };
        Ok(Some((user_id, artwork_id)))
    }

    /// Prompt and parse one value. Unparseable answers are reported and yield `None`.
    fn ask_parsed<T: FromStr>(
        &mut self,
        label: &str,
        what: &str,
    ) -> Result<Option<T>, ConsoleError> {
        let Some(answer) = self.ask(label)? else {
            return Ok(None);
        };
        match answer.parse::<T>() {
            Ok(value) => Ok(Some(value)),
            Err(_) => {
                writeln!(self.output, "Invalid {what}: {answer}")?;
                Ok(None)
            }
        }
    }

    /// Prompt and read one line without its terminator. `None` at end of input.
    fn ask(&mut self, label: &str) -> Result<Option<String>, ConsoleError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            self.closed = true;
            return Ok(None);
        }
        let len = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(len);
        Ok(Some(line))
    }
}
