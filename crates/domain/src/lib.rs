//! # gallery-domain
//!
//! Pure domain model for the virtual art gallery.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and error conventions
//! - Define **Artworks** (catalog records with a store-assigned id)
//! - Define **Favorites** (user ↔ artwork pairs)
//! - Contain invariant enforcement (non-empty titles, id presence)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod artwork;
pub mod favorite;
