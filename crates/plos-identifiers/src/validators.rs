//! Format validation for PLOS identifiers

use crate::patterns::{
    CURRENTS_DOI, FILE_MATCH, FILE_URL_MATCH, FULL_DOI_MATCH, PLOS_URL_MATCH,
};

/// Check whether a string starts with a valid PLOS DOI.
///
/// The match is anchored at the start of the string but not at the end, so
/// trailing content after a structurally valid DOI is tolerated as long as the
/// DOI ends on a word boundary. `10.1371/journal.pbio.2000777 ` and
/// `10.1371/journal.pbio.2000777.xml` are both accepted, while
/// `10.1371/journal.pbio.20007779` is not. Callers that need the exact DOI
/// should use [`crate::parse_doi`], which reports the matched span.
///
/// # Examples
/// ```
/// use plos_identifiers::validate_doi;
/// assert!(validate_doi("10.1371/journal.pbio.2000777"));
/// assert!(!validate_doi("10.1371/journal.pbio.20007779"));
/// ```
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_doi(doi: &str) -> bool {
    FULL_DOI_MATCH.is_match(doi)
}

/// Check whether a string contains a valid corpus article file name.
///
/// Two forms are accepted anywhere in the string: a journal article
/// (`journal.pbio.2000777.xml`) and a correction notice
/// (`plos.correction.<uuid>.xml`). Directory components are ignored.
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_filename(filename: &str) -> bool {
    FILE_MATCH.is_match(filename)
}

/// Check whether a string is a PLOS ONE article file download URL.
///
/// Both manuscripts and supplementary files are accepted:
/// `https://journals.plos.org/plosone/article/file?id=10.1371/journal.pone.0222522.s002&type=supplementary`
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_file_url(url: &str) -> bool {
    FILE_URL_MATCH.is_match(url)
}

/// Check whether a string contains a PLOS website article or peer review URL
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_plos_url(url: &str) -> bool {
    PLOS_URL_MATCH.is_match(url)
}

/// Check whether a string is a valid PLOS Currents DOI
#[cfg_attr(feature = "uniffi", uniffi::export)]
pub fn validate_currents_doi(doi: &str) -> bool {
    CURRENTS_DOI.is_match(doi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_doi() {
        assert!(validate_doi("10.1371/journal.pbio.2000777"));
        assert!(!validate_doi("10.1371/journal.PBIO.2000777"));
        assert!(validate_doi("10.1371/journal.pBIO.2000777"));
        assert!(!validate_doi("10.1371/journal.pbio.20007779"));
        assert!(!validate_doi("10.1371/journal.pbio.200077"));
        assert!(!validate_doi("doi:10.1371/journal.pbio.2000777"));
        assert!(!validate_doi("10.1038/nature12373"));
    }

    #[test]
    fn test_validate_doi_suffixes() {
        assert!(validate_doi("10.1371/journal.pone.0222522.s002"));
        assert!(validate_doi("10.1371/journal.pone.0222522.r001"));
        // an unknown suffix is trailing content after a valid DOI
        assert!(validate_doi("10.1371/journal.pone.0222522.t001"));
    }

    #[test]
    fn test_validate_doi_tolerates_trailing_content() {
        assert!(validate_doi("10.1371/journal.pbio.2000777 "));
        assert!(validate_doi("10.1371/journal.pbio.2000777.xml"));
        assert!(!validate_doi("10.1371/journal.pbio.2000777abc"));
    }

    #[test]
    fn test_validate_annotation_doi() {
        let doi = "10.1371/annotation/3155a3e9-5fbe-435c-a07a-e9a4846ec0b6";
        assert!(validate_doi(doi));
        // annotations are end-anchored
        assert!(!validate_doi(&format!("{} ", doi)));
        assert!(!validate_doi("10.1371/annotation/3155a3e9-5fbe-435c-a07a"));
    }

    #[test]
    fn test_validate_filename() {
        assert!(validate_filename("allofplos_xml/journal.pbio.2000777.xml"));
        assert!(validate_filename("journal.pone.0000001.xml"));
        assert!(validate_filename(
            "allofplos_xml/plos.correction.3155a3e9-5fbe-435c-a07a-e9a4846ec0b6.xml"
        ));
        assert!(!validate_filename("allofplos_xml/journal.pbio.20007779.xml"));
        assert!(!validate_filename("allofplos_xml/journal.pbio.2000777.txt"));
        // annotation bodies never appear as file names
        assert!(!validate_filename(
            "annotation/3155a3e9-5fbe-435c-a07a-e9a4846ec0b6.xml"
        ));
    }

    #[test]
    fn test_validate_file_url() {
        assert!(validate_file_url(
            "https://journals.plos.org/plosone/article/file?id=10.1371/journal.pcbi.0020147&type=manuscript"
        ));
        assert!(validate_file_url(
            "https://journals.plos.org/plosone/article/file?id=10.1371/journal.pone.0222522.s002&type=supplementary"
        ));
        assert!(!validate_file_url(
            "https://journals.plos.org/plosone/article/file?id=10.1371/journal.pcbi.0020147"
        ));
        assert!(!validate_file_url(
            "https://journals.plos.org/plosbiology/article/file?id=10.1371/journal.pbio.2000777&type=manuscript"
        ));
        assert!(!validate_file_url(
            "see https://journals.plos.org/plosone/article/file?id=10.1371/journal.pcbi.0020147&type=manuscript"
        ));
    }

    #[test]
    fn test_validate_plos_url() {
        assert!(validate_plos_url(
            "https://journals.plos.org/plosbiology/article?id=10.1371/journal.pbio.2000777"
        ));
        assert!(validate_plos_url(
            "https://journals.plos.org/plosone/peerReview?id=10.1371/journal.pone.0222522"
        ));
        assert!(validate_plos_url(
            "link: https://journals.plos.org/plosone/article?id=10.1371/journal.pone.0222522.r001"
        ));
        assert!(!validate_plos_url(
            "https://journals.plos.org/PLOSONE/article?id=10.1371/journal.pone.0222522"
        ));
        assert!(!validate_plos_url(
            "https://journals.plos.org/plosone/article/file?id=10.1371/journal.pone.0222522"
        ));
        // the page type alternation is confined to the path segment
        assert!(!validate_plos_url("https://journals.plos.org/plosone/article"));
        assert!(!validate_plos_url("peerReview?id=10.1371/journal.pone.0222522"));
    }

    #[test]
    fn test_validate_currents_doi() {
        assert!(validate_currents_doi(
            "10.1371/currents.dis.ad70cd1c8bc585e9470046cde334ee4b"
        ));
        assert!(validate_currents_doi("10.1371/currents.RRN1226"));
        assert!(validate_currents_doi("10.1371/4f7f57285b804"));
        assert!(validate_currents_doi("10.1371/4fd1286980c08"));
        assert!(validate_currents_doi(
            "10.1371/ad70cd1c8bc585e9470046cde334ee4b"
        ));
        assert!(!validate_currents_doi("10.1371/currents.RRN12260"));
        assert!(!validate_currents_doi("10.1371/journal.pbio.2000777"));
        assert!(!validate_currents_doi("10.1371/4f7f57285b8045"));
    }
}
