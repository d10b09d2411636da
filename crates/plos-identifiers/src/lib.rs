//! Identifier validation and extraction for the PLOS article corpus
//!
//! This crate checks strings against PLOS naming conventions:
//! - DOI validation (journal articles, annotations, PLOS Currents)
//! - Corpus file name validation
//! - Article file download and website URL validation
//! - DOI extraction from free text and filtering of DOI lists
//! - Structural DOI parsing and identifier classification
//!
//! All functions are pure. Patterns are compiled once, on first use, and are
//! safe to share across threads.

pub mod doi;
pub mod error;
pub mod extractors;
pub mod kind;
pub mod patterns;
pub mod validators;

pub use doi::*;
pub use error::*;
pub use extractors::*;
pub use kind::*;
pub use validators::*;

// Setup UniFFI when the feature is enabled
#[cfg(feature = "uniffi")]
uniffi::setup_scaffolding!();
