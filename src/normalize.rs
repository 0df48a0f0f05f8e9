//! Name normalization applied once when a name enters the candidate pool
//! and to every raw query before scoring.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize a raw name for matching.
///
/// Lowercases, drops `.` and `,`, turns `-` into a space, strips diacritics
/// (NFD, remove combining marks, NFC) and collapses whitespace.
///
/// ```
/// use namescreen::normalize::precompute;
///
/// assert_eq!(precompute("  Nicolás  Maduro-Moros. "), "nicolas maduro moros");
/// ```
pub fn precompute(raw: &str) -> String {
    let stripped: String = raw
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .nfc()
        .flat_map(char::to_lowercase)
        .filter(|c| *c != '.' && *c != ',')
        .map(|c| if c == '-' { ' ' } else { c })
        .collect();

    stripped.split_whitespace().collect::<Vec<_>>().join(" ")
}
