//! Structural parsing of PLOS DOIs
//!
//! Splits a DOI accepted by [`crate::validate_doi`] into its journal code,
//! article number or annotation UUID, and optional review/supplementary
//! suffix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdentifierError;
use crate::patterns::{BASE_URL, DOI_PREFIX, FILE_URL_PATH, FULL_DOI_MATCH};

/// The part of a DOI after the `10.1371/` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum DoiBody {
    /// `journal.pbio.2000777`
    Journal { code: String, number: String },
    /// `annotation/3155a3e9-5fbe-435c-a07a-e9a4846ec0b6`
    Annotation { uuid: String },
}

impl DoiBody {
    pub fn as_path(&self) -> String {
        match self {
            DoiBody::Journal { code, number } => format!("journal.{}.{}", code, number),
            DoiBody::Annotation { uuid } => format!("annotation/{}", uuid),
        }
    }
}

/// Marker for a file attached to an article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Enum))]
pub enum DoiSuffix {
    /// Peer review record (`.r001`)
    Review { index: u16 },
    /// Supplementary material (`.s001`)
    Supplementary { index: u16 },
}

impl DoiSuffix {
    fn parse(raw: &str) -> Option<Self> {
        let mut chars = raw.chars();
        let marker = chars.next()?;
        let index = chars.as_str().parse::<u16>().ok()?;
        match marker {
            'r' => Some(DoiSuffix::Review { index }),
            's' => Some(DoiSuffix::Supplementary { index }),
            _ => None,
        }
    }

    pub fn as_str(&self) -> String {
        match self {
            DoiSuffix::Review { index } => format!(".r{:03}", index),
            DoiSuffix::Supplementary { index } => format!(".s{:03}", index),
        }
    }
}

/// A parsed PLOS DOI
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "uniffi", derive(uniffi::Record))]
pub struct PlosDoi {
    /// The matched DOI text, without any trailing content from the input
    pub doi: String,
    pub body: DoiBody,
    pub suffix: Option<DoiSuffix>,
}

impl PlosDoi {
    /// Journal code such as `pbio` or `pone`; `None` for annotations
    pub fn journal_code(&self) -> Option<&str> {
        match &self.body {
            DoiBody::Journal { code, .. } => Some(code),
            DoiBody::Annotation { .. } => None,
        }
    }

    pub fn is_annotation(&self) -> bool {
        matches!(self.body, DoiBody::Annotation { .. })
    }

    /// The DOI of the article itself, with any suffix removed
    pub fn base_doi(&self) -> String {
        format!("{}{}", DOI_PREFIX, self.body.as_path())
    }

    /// PLOS ONE file download URL for this DOI.
    ///
    /// Supplementary files are requested with `type=supplementary`, everything
    /// else with `type=manuscript`.
    pub fn file_url(&self) -> String {
        let (suffix, file_type) = match &self.suffix {
            Some(s @ DoiSuffix::Supplementary { .. }) => (s.as_str(), "supplementary"),
            Some(s) => (s.as_str(), "manuscript"),
            None => (String::new(), "manuscript"),
        };
        format!(
            "{}{}{}{}&type={}",
            BASE_URL,
            FILE_URL_PATH,
            self.body.as_path(),
            suffix,
            file_type
        )
    }
}

impl fmt::Display for PlosDoi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.doi)
    }
}

impl FromStr for PlosDoi {
    type Err = IdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_doi(s)
    }
}

/// Parse a PLOS DOI into its parts.
///
/// Accepts exactly what [`crate::validate_doi`] accepts. Trailing content after
/// the DOI is not part of the result.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn parse_doi(doi: &str) -> Result<PlosDoi, IdentifierError> {
    let invalid = || IdentifierError::InvalidDoi(doi.to_string());

    let caps = FULL_DOI_MATCH.captures(doi).ok_or_else(|| {
        tracing::debug!(doi = %doi, "input does not match the PLOS DOI pattern");
        invalid()
    })?;
    let matched = caps.get(0).ok_or_else(invalid)?;

    let body = match (caps.name("code"), caps.name("number"), caps.name("uuid")) {
        (Some(code), Some(number), _) => DoiBody::Journal {
            code: code.as_str().to_string(),
            number: number.as_str().to_string(),
        },
        (_, _, Some(uuid)) => DoiBody::Annotation {
            uuid: uuid.as_str().to_string(),
        },
        _ => return Err(invalid()),
    };

    let suffix = match caps.name("suffix") {
        Some(m) => Some(DoiSuffix::parse(m.as_str()).ok_or_else(invalid)?),
        None => None,
    };

    Ok(PlosDoi {
        doi: matched.as_str().to_string(),
        body,
        suffix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate_file_url;

    #[test]
    fn test_parse_journal_doi() {
        let doi = parse_doi("10.1371/journal.pbio.2000777").unwrap();
        assert_eq!(doi.journal_code(), Some("pbio"));
        assert_eq!(
            doi.body,
            DoiBody::Journal {
                code: "pbio".to_string(),
                number: "2000777".to_string()
            }
        );
        assert_eq!(doi.suffix, None);
        assert!(!doi.is_annotation());
    }

    #[test]
    fn test_parse_suffixes() {
        let doi = parse_doi("10.1371/journal.pone.0222522.s002").unwrap();
        assert_eq!(doi.suffix, Some(DoiSuffix::Supplementary { index: 2 }));
        assert_eq!(doi.base_doi(), "10.1371/journal.pone.0222522");

        let doi = parse_doi("10.1371/journal.pone.0222522.r010").unwrap();
        assert_eq!(doi.suffix, Some(DoiSuffix::Review { index: 10 }));
        assert_eq!(doi.to_string(), "10.1371/journal.pone.0222522.r010");
    }

    #[test]
    fn test_parse_annotation() {
        let doi: PlosDoi = "10.1371/annotation/3155a3e9-5fbe-435c-a07a-e9a4846ec0b6"
            .parse()
            .unwrap();
        assert!(doi.is_annotation());
        assert_eq!(doi.journal_code(), None);
        assert_eq!(
            doi.body,
            DoiBody::Annotation {
                uuid: "3155a3e9-5fbe-435c-a07a-e9a4846ec0b6".to_string()
            }
        );
    }

    #[test]
    fn test_parse_drops_trailing_content() {
        let doi = parse_doi("10.1371/journal.pbio.2000777 (retracted)").unwrap();
        assert_eq!(doi.doi, "10.1371/journal.pbio.2000777");
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            parse_doi("not-a-doi"),
            Err(IdentifierError::InvalidDoi("not-a-doi".to_string()))
        );
        assert!(parse_doi("10.1371/journal.pbio.20007779").is_err());
        assert!(parse_doi("").is_err());
    }

    #[test]
    fn test_file_url() {
        let doi = parse_doi("10.1371/journal.pcbi.0020147").unwrap();
        assert_eq!(
            doi.file_url(),
            "https://journals.plos.org/plosone/article/file?id=10.1371/journal.pcbi.0020147&type=manuscript"
        );
        assert!(validate_file_url(&doi.file_url()));

        let doi = parse_doi("10.1371/journal.pone.0222522.s002").unwrap();
        assert_eq!(
            doi.file_url(),
            "https://journals.plos.org/plosone/article/file?id=10.1371/journal.pone.0222522.s002&type=supplementary"
        );
        assert!(validate_file_url(&doi.file_url()));
    }
}
