//! # gallery-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `ArtworkRepository` — CRUD and keyword search for artworks
//!   - `FavoriteRepository` — the user ↔ artwork favorites relation
//! - Define the **driving/inbound port** as a use-case struct:
//!   - `GalleryService` — the eight gallery operations
//! - Orchestrate domain objects without knowing *how* persistence works
//!
//! ## Dependency rule
//! Depends on `gallery-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
