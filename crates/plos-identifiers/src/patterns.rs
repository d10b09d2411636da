//! PLOS identifier patterns
//!
//! Every composite regex is assembled from the named fragments below, so the
//! article body shape is shared verbatim between the anchored "match" patterns
//! and the unanchored "search" patterns. The 7 main PLOS journals and the
//! defunct PLOS Clinical Trials share one DOI shape; PLOS Currents has its own.

use lazy_static::lazy_static;
use regex::Regex;

/// Registrant prefix carried by every PLOS DOI
pub const DOI_PREFIX: &str = "10.1371/";

/// Base URL of the PLOS ONE site, used for article file downloads
pub const BASE_URL: &str = "https://journals.plos.org/plosone/";

/// Root of the journals website shared by all PLOS journals
pub const SITE_URL: &str = "https://journals.plos.org/";

/// Path between [`BASE_URL`] and the DOI body in a file download URL
pub const FILE_URL_PATH: &str = "article/file?id=10.1371/";

/// Query between the page type and the DOI body in a website URL
pub const PAGE_QUERY: &str = "?id=10.1371/";

// Atoms

pub const PREFIX_SEARCH: &str = r"10\.1371/";

pub const PREFIX_MATCH: &str = r"^10\.1371/";

/// 8-4-4-4-12 token used by annotations and corrections
pub const UUID_SHAPE: &str =
    r"[a-zA-Z0-9]{8}-[a-zA-Z0-9]{4}-[a-zA-Z0-9]{4}-[a-zA-Z0-9]{4}-[a-zA-Z0-9]{12}";

/// `journal.` + 4-letter journal code + `.` + 7-digit article number
pub const JOURNAL_BODY: &str = r"journal\.(?P<code>p[a-zA-Z]{3})\.(?P<number>\d{7})";

/// Review (`.r001`) or supplementary file (`.s001`) marker
pub const SUFFIX_MATCH: &str = r"(\.(?P<suffix>[rs][0-9]{3}))?";

pub const TYPE_MATCH: &str = r"((article)|(peerReview))";

pub const FILE_TYPE_SUFFIX: &str = r"&type=((manuscript)|(supplementary))";

/// PLOS Currents body; every alternative must end the string
pub const BODY_CURRENTS: &str = r"((currents\.[a-zA-Z]{2,9}\.[a-zA-Z0-9]{32}$)|(currents\.RRN\d{4}$)|([a-zA-Z0-9]{13}$)|([a-zA-Z0-9]{32}$))";

lazy_static! {
    /// Article body for full matches; annotation DOIs must end the string
    pub static ref BODY_MATCH: String = format!(
        r"(({})|(annotation/(?P<uuid>{})$))",
        JOURNAL_BODY, UUID_SHAPE
    );

    /// Article body for searching inside larger text
    pub static ref BODY_SEARCH: String = format!(
        r"(({})|(annotation/(?P<uuid>{})))",
        JOURNAL_BODY, UUID_SHAPE
    );

    /// Article body as it appears in corpus file names
    pub static ref FILE_SEARCH: String = format!(
        r"(({})|(plos\.correction\.{}))",
        JOURNAL_BODY, UUID_SHAPE
    );
}

lazy_static! {
    // Start-anchored only. The trailing word boundary rejects a longer digit
    // run but tolerates other trailing content.
    pub(crate) static ref FULL_DOI_MATCH: Regex = Regex::new(&format!(
        r"{}{}{}\b",
        PREFIX_MATCH, *BODY_MATCH, SUFFIX_MATCH
    ))
    .unwrap();

    pub(crate) static ref FULL_DOI_SEARCH: Regex =
        Regex::new(&format!("{}{}", PREFIX_SEARCH, *BODY_SEARCH)).unwrap();

    pub(crate) static ref CURRENTS_DOI: Regex =
        Regex::new(&format!("{}{}", PREFIX_MATCH, BODY_CURRENTS)).unwrap();

    pub(crate) static ref FILE_MATCH: Regex =
        Regex::new(&format!(r"{}\.xml", *FILE_SEARCH)).unwrap();

    pub(crate) static ref FILE_URL_MATCH: Regex = Regex::new(&format!(
        "^{}{}{}{}{}",
        regex::escape(BASE_URL),
        regex::escape(FILE_URL_PATH),
        *BODY_SEARCH,
        SUFFIX_MATCH,
        FILE_TYPE_SUFFIX
    ))
    .unwrap();

    pub(crate) static ref PLOS_URL_MATCH: Regex = Regex::new(&format!(
        "{}[a-z]+/{}{}{}{}",
        regex::escape(SITE_URL),
        TYPE_MATCH,
        regex::escape(PAGE_QUERY),
        *BODY_SEARCH,
        SUFFIX_MATCH
    ))
    .unwrap();
}
