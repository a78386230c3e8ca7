//! The offense-code cleaner.
//!
//! Raw commitment records carry offense codes like `PC187(A)` or
//! `HS11378(B)(1)`: a statutory-category abbreviation, the bare code, and
//! parenthetical subsection references. The severity reference tables are
//! keyed by the bare code alone, so both decorations are stripped before
//! matching.

use rdi_model::StatuteCategory;

/// Clean a single offense code, passing missing values through unchanged.
///
/// The value is trimmed and uppercased, a leading category abbreviation is
/// removed (first match in [`StatuteCategory::ALL`] order wins), and the
/// value is truncated at the first `(`. Malformed input comes back
/// best-effort; this never fails.
///
/// ```
/// use rdi_normalize::clean_offense_code;
///
/// assert_eq!(clean_offense_code(Some("PC187(A)")).as_deref(), Some("187"));
/// assert_eq!(clean_offense_code(Some("vc10851")).as_deref(), Some("10851"));
/// assert_eq!(clean_offense_code(None), None);
/// ```
pub fn clean_offense_code(code: Option<&str>) -> Option<String> {
    code.map(clean_value)
}

fn clean_value(raw: &str) -> String {
    let upper = raw.trim().to_uppercase();
    let mut code = upper.as_str();

    // Leading abbreviation only; `10851VC` keeps its trailing VC. Plain
    // prefix check, no word boundary: `CCXXX` loses its CC.
    for category in StatuteCategory::ALL {
        if let Some(rest) = code.strip_prefix(category.abbreviation()) {
            code = rest;
            break;
        }
    }

    // Everything from the first parenthesis on is subsection annotation,
    // including stacked groups like `(B)(1)`.
    if let Some(open) = code.find('(') {
        code = &code[..open];
    }

    code.trim().to_string()
}
