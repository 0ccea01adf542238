//! Rendering an edition for file-name templates.

use crate::vocab;

/// Letter case for rendered edition tags.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagCase {
    /// `{edition tags}`: everything lowercase.
    Lower,
    /// `{Edition Tags}`: each word capitalized.
    #[default]
    Title,
    /// `{EDITION TAGS}`: everything uppercase.
    Upper,
}

const SEPARATORS: [char; 4] = [' ', '-', '.', '_'];

/// Render an edition string in the requested case.
///
/// Separators are kept as written. In title case, ordinal suffixes stay
/// lowercase (`10th`) and `IMAX`, `3D`, `HDR`, `DV` and `SDR` are always
/// uppercase.
///
/// ```
/// use reelcut_parser::{format_edition_tags, TagCase};
///
/// assert_eq!(format_edition_tags("imax.eDiTioN", TagCase::Title), "IMAX.Edition");
/// assert_eq!(format_edition_tags("10TH anniversary edition", TagCase::Lower), "10th anniversary edition");
/// ```
pub fn format_edition_tags(edition: &str, case: TagCase) -> String {
    match case {
        TagCase::Lower => edition.to_lowercase(),
        TagCase::Upper => edition.to_uppercase(),
        TagCase::Title => {
            let mut out = String::with_capacity(edition.len());
            let mut word = String::new();
            for c in edition.chars() {
                if SEPARATORS.contains(&c) {
                    push_title_word(&mut out, &word);
                    word.clear();
                    out.push(c);
                } else {
                    word.push(c);
                }
            }
            push_title_word(&mut out, &word);
            out
        }
    }
}

fn push_title_word(out: &mut String, word: &str) {
    let lower = word.to_lowercase();
    if vocab::is_uppercase_tag(&lower) {
        out.push_str(&word.to_uppercase());
        return;
    }

    let mut chars = lower.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
