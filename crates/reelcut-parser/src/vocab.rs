//! Closed vocabularies for edition markers and container extensions.
//!
//! Word lookups go through compile-time `phf` tables keyed by the lowercased
//! token. The two numeric shapes (`50th`, `2in1`) are parsed with winnow.

use phf::{phf_map, phf_set};
use winnow::ascii::{digit1, Caseless};
use winnow::combinator::{alt, opt, separated_pair, terminated};
use winnow::prelude::*;
use winnow::ModalResult;

use crate::model::{Connector, EditionMarker, NamedCut};

/// The role a word plays in the edition grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Term {
    /// A marker on its own, optionally followed by a connector.
    Standalone(EditionMarker),
    /// Only a marker when a connector follows (`Special Edition`, `Final Cut`).
    Qualifier(EditionMarker),
    /// First word of a two-word marker; `tail` is the required second word.
    PairHead {
        tail: &'static str,
        marker: EditionMarker,
    },
    /// `Cut`, `Edition`, `Version`.
    Connector(Connector),
}

static TERMS: phf::Map<&'static str, Term> = phf_map! {
    "directors" => Term::Standalone(EditionMarker::DirectorsCut),
    "director's" => Term::Standalone(EditionMarker::DirectorsCut),
    "directors'" => Term::Standalone(EditionMarker::DirectorsCut),
    "director" => Term::Qualifier(EditionMarker::DirectorsCut),
    "collectors" => Term::Standalone(EditionMarker::CollectorsEdition),
    "collector's" => Term::Standalone(EditionMarker::CollectorsEdition),
    "collectors'" => Term::Standalone(EditionMarker::CollectorsEdition),
    "extended" => Term::Standalone(EditionMarker::Extended),
    "theatrical" => Term::Standalone(EditionMarker::Theatrical),
    "ultimate" => Term::Standalone(EditionMarker::Ultimate),
    "despecialized" => Term::Standalone(EditionMarker::Despecialized),
    "uncensored" => Term::Standalone(EditionMarker::Uncensored),
    "remastered" => Term::Standalone(EditionMarker::Remastered),
    "unrated" => Term::Standalone(EditionMarker::Unrated),
    "uncut" => Term::Standalone(EditionMarker::Uncut),
    "imax" => Term::Standalone(EditionMarker::Imax),
    "restored" => Term::Standalone(EditionMarker::Restored),
    "fanedit" => Term::Standalone(EditionMarker::FanEdit),
    "openmatte" => Term::Standalone(EditionMarker::OpenMatte),
    "fan" => Term::PairHead { tail: "edit", marker: EditionMarker::FanEdit },
    "open" => Term::PairHead { tail: "matte", marker: EditionMarker::OpenMatte },
    "anniversary" => Term::Qualifier(EditionMarker::AnniversaryEdition(None)),
    "special" => Term::Qualifier(EditionMarker::Named(NamedCut::Special, Connector::Edition)),
    "final" => Term::Qualifier(EditionMarker::Named(NamedCut::Final, Connector::Cut)),
    "assembly" => Term::Qualifier(EditionMarker::Named(NamedCut::Assembly, Connector::Cut)),
    "imperial" => Term::Qualifier(EditionMarker::Named(NamedCut::Imperial, Connector::Edition)),
    "diamond" => Term::Qualifier(EditionMarker::Named(NamedCut::Diamond, Connector::Edition)),
    "signature" => Term::Qualifier(EditionMarker::Named(NamedCut::Signature, Connector::Edition)),
    "hunter" => Term::Qualifier(EditionMarker::Named(NamedCut::Hunter, Connector::Edition)),
    "rekall" => Term::Qualifier(EditionMarker::Named(NamedCut::Rekall, Connector::Edition)),
    "rogue" => Term::Qualifier(EditionMarker::Named(NamedCut::Rogue, Connector::Cut)),
    "rouge" => Term::Qualifier(EditionMarker::Named(NamedCut::Rogue, Connector::Cut)),
    "cut" => Term::Connector(Connector::Cut),
    "edition" => Term::Connector(Connector::Edition),
    "version" => Term::Connector(Connector::Version),
};

static CONTAINER_EXTENSIONS: phf::Set<&'static str> = phf_set! {
    "mkv", "mp4", "m4v", "avi", "ts", "m2ts", "mts", "mov", "wmv", "webm",
    "mpg", "mpeg", "mpe", "mpv", "flv", "f4v", "3gp", "3g2", "ogv", "ogm",
    "vob", "mxf", "asf", "divx", "xvid", "iso", "img", "strm",
};

/// Special strings that are always rendered uppercase in edition tags.
static UPPERCASE_TAGS: phf::Set<&'static str> = phf_set! {
    "imax", "3d", "hdr", "dv", "sdr",
};

/// Lowercase a token and fold typographic apostrophes to `'`.
pub(crate) fn normalize(word: &str) -> String {
    word.chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' | '`' | '\u{b4}' => '\'',
            c => c,
        })
        .flat_map(char::to_lowercase)
        .collect()
}

/// Look up a normalized word in the built-in edition vocabulary.
pub(crate) fn term(normalized: &str) -> Option<&'static Term> {
    TERMS.get(normalized)
}

/// Whether `ext` (any case, no leading dot) is a known container extension.
pub fn is_container_extension(ext: &str) -> bool {
    CONTAINER_EXTENSIONS.contains(ext.to_ascii_lowercase().as_str())
}

/// Whether a lowercased word is always rendered uppercase in edition tags.
pub(crate) fn is_uppercase_tag(lower: &str) -> bool {
    UPPERCASE_TAGS.contains(lower)
}

fn ordinal_number(input: &mut &str) -> ModalResult<u16> {
    terminated(
        digit1
            .try_map(str::parse::<u16>)
            .verify(|n: &u16| (1..=999).contains(n)),
        opt(alt((
            Caseless("st"),
            Caseless("nd"),
            Caseless("rd"),
            Caseless("th"),
        ))),
    )
    .parse_next(input)
}

fn reissue_ratio(input: &mut &str) -> ModalResult<(u8, u8)> {
    separated_pair(
        digit1.try_map(str::parse::<u8>),
        Caseless("in"),
        digit1.try_map(str::parse::<u8>),
    )
    .verify(|&(n, m): &(u8, u8)| m >= 1 && n > m)
    .parse_next(input)
}

/// Parse an anniversary ordinal such as `50th`, `1st` or a bare `25`.
pub(crate) fn ordinal(word: &str) -> Option<u16> {
    ordinal_number.parse(word).ok()
}

/// Parse a reissue token such as `2in1`.
pub(crate) fn reissue(word: &str) -> Option<(u8, u8)> {
    reissue_ratio.parse(word).ok()
}

/// English ordinal suffix for `n` (`st`, `nd`, `rd`, `th`).
pub(crate) fn ordinal_suffix(n: u16) -> &'static str {
    match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    }
}
