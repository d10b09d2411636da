//! Identifier families and classification

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;
use crate::validators::{
    validate_currents_doi, validate_doi, validate_file_url, validate_filename, validate_plos_url,
};

/// Families of PLOS identifiers recognized by this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum IdentifierKind {
    /// Journal article or annotation DOI
    Doi,
    /// PLOS Currents DOI
    CurrentsDoi,
    /// Corpus article file name
    Filename,
    /// PLOS ONE article file download URL
    FileUrl,
    /// Journal website article or peer review page
    PlosUrl,
}

impl IdentifierKind {
    /// All kinds, in the order [`classify`] tries them
    pub fn all() -> &'static [IdentifierKind] {
        &[
            IdentifierKind::FileUrl,
            IdentifierKind::PlosUrl,
            IdentifierKind::Doi,
            IdentifierKind::CurrentsDoi,
            IdentifierKind::Filename,
        ]
    }

    /// Short name used on the command line and in serialized output
    pub fn name(&self) -> &'static str {
        match self {
            IdentifierKind::Doi => "doi",
            IdentifierKind::CurrentsDoi => "currents-doi",
            IdentifierKind::Filename => "filename",
            IdentifierKind::FileUrl => "file-url",
            IdentifierKind::PlosUrl => "plos-url",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            IdentifierKind::Doi => "DOI",
            IdentifierKind::CurrentsDoi => "PLOS Currents DOI",
            IdentifierKind::Filename => "Article file name",
            IdentifierKind::FileUrl => "Article file URL",
            IdentifierKind::PlosUrl => "PLOS website URL",
        }
    }

    /// Run the validator for this kind
    pub fn validate(&self, value: &str) -> bool {
        match self {
            IdentifierKind::Doi => validate_doi(value),
            IdentifierKind::CurrentsDoi => validate_currents_doi(value),
            IdentifierKind::Filename => validate_filename(value),
            IdentifierKind::FileUrl => validate_file_url(value),
            IdentifierKind::PlosUrl => validate_plos_url(value),
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IdentifierKind {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "doi" => Ok(IdentifierKind::Doi),
            "currents" | "currents-doi" => Ok(IdentifierKind::CurrentsDoi),
            "filename" => Ok(IdentifierKind::Filename),
            "file-url" => Ok(IdentifierKind::FileUrl),
            "plos-url" => Ok(IdentifierKind::PlosUrl),
            _ => Err(IdentifierError::UnknownKind(s.to_string())),
        }
    }
}

/// Detect which identifier family a string belongs to.
///
/// URLs are tried first since they embed a DOI; a file name is tried last
/// since it is matched anywhere in the string.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn classify(value: &str) -> Option<IdentifierKind> {
    let kind = IdentifierKind::all()
        .iter()
        .copied()
        .find(|kind| kind.validate(value));
    if kind.is_none() {
        tracing::debug!(value = %value, "no identifier kind matched");
    }
    kind
}
