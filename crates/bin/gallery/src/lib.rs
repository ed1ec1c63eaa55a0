//! # gallery
//!
//! Console front-end of the virtual art gallery.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Drive the [`GalleryService`](gallery_app::services::gallery_service::GalleryService)
//!   from a text menu
//!
//! Wiring of the concrete adapters lives in `main.rs`; this library part is
//! exposed so the menu can be exercised end to end from `tests/`.

pub mod config;
pub mod console;
