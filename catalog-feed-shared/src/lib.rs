//! # Catalog Feed Shared
//!
//! Data types shared between the repository, pipeline and binary crates.

mod document;
mod product;
mod seed;

pub use document::{IndexedDocument, Metadata};
pub use product::{Availability, Product, NOT_AVAILABLE};
pub use seed::{SeedFile, SeedRecord, REQUIRED_FIELDS};
