//! PLOS identifier extraction and list filtering

use serde::{Deserialize, Serialize};

use crate::kind::IdentifierKind;
use crate::patterns::{CURRENTS_DOI, FILE_MATCH, FULL_DOI_SEARCH};
use crate::validators::validate_doi;

/// Extracted identifier with position information
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct ExtractedIdentifier {
    pub identifier_type: IdentifierKind,
    pub value: String,
    pub start_index: u32,
    pub end_index: u32,
}

/// Find every PLOS DOI contained in a string, in order of occurrence.
///
/// Review and supplementary suffixes are not part of the returned DOIs.
///
/// The search has no trailing boundary, unlike [`crate::validate_doi`]: a run
/// of more than 7 digits yields its first 7 as a DOI. For
/// `10.1371/journal.pbio.20007779` this returns `10.1371/journal.pbio.2000777`
/// even though `validate_doi` rejects the input.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn find_valid_dois(text: &str) -> Vec<String> {
    FULL_DOI_SEARCH
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Return the DOI candidates that do not follow the PLOS DOI format.
///
/// Used to check linked DOI fields in other articles, such as the targets of
/// retractions and corrections. Input order is preserved.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn show_invalid_dois(dois: Vec<String>) -> Vec<String> {
    dois.into_iter()
        .filter(|doi| {
            let valid = validate_doi(doi);
            if !valid {
                tracing::trace!(doi = %doi, "invalid PLOS DOI");
            }
            !valid
        })
        .collect()
}

/// Return the DOI candidates that do not follow the PLOS Currents format.
///
/// Used to check linked DOI fields in PMC records. Input order is preserved.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn currents_doi_filter(dois: Vec<String>) -> Vec<String> {
    dois.into_iter()
        .filter(|doi| {
            let valid = CURRENTS_DOI.is_match(doi);
            if !valid {
                tracing::trace!(doi = %doi, "invalid PLOS Currents DOI");
            }
            !valid
        })
        .collect()
}

/// Extract all PLOS DOIs with their byte offsets
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn extract_all(text: &str) -> Vec<ExtractedIdentifier> {
    FULL_DOI_SEARCH
        .find_iter(text)
        .map(|m| ExtractedIdentifier {
            identifier_type: IdentifierKind::Doi,
            value: m.as_str().to_string(),
            start_index: m.start() as u32,
            end_index: m.end() as u32,
        })
        .collect()
}

/// Article identifier of a corpus file name, without the `.xml` extension.
///
/// `allofplos_xml/journal.pbio.2000777.xml` gives `journal.pbio.2000777`.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn filename_article_id(filename: &str) -> Option<String> {
    FILE_MATCH
        .find(filename)
        .and_then(|m| m.as_str().strip_suffix(".xml"))
        .map(str::to_string)
}
