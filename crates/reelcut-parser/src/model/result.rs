//! Extraction output types.

use std::fmt;

use super::EditionMarker;
use crate::lexer::Span;

/// The edition and trailer extracted from a filename.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditionResult {
    /// Edition descriptor, words joined by single spaces. Empty when none was found.
    pub edition: String,
    /// Container extension, or the residual trailing fragment.
    pub trailer: String,
}

impl EditionResult {
    /// Returns true if no edition marker was found.
    pub fn is_standard(&self) -> bool {
        self.edition.is_empty()
    }
}

impl fmt::Display for EditionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}", self.edition, self.trailer)
    }
}

/// Release metadata recognized and discarded during extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoiseKind {
    Year,
    Resolution,
    Source,
    VideoCodec,
    AudioCodec,
    /// Group name after the final hyphen (`-m2g`)
    ReleaseGroup,
}

/// One discarded metadata token.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Noise {
    pub kind: NoiseKind,
    pub text: String,
    pub span: Span,
}

/// Where the trailer came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrailerSource {
    /// The segment after the last `.` is a known container extension.
    Extension,
    /// Text following the edition or the last year.
    Residual,
    /// No boundary was found; the segment after the last `.` was used as-is.
    LastSegment,
    /// Nothing to report.
    #[default]
    Empty,
}

/// Detailed report of a single extraction.
///
/// Offsets in `edition_span` and `noise` are relative to the final path
/// segment of the input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Extraction {
    pub result: EditionResult,
    /// Markers making up the selected edition, in order.
    pub markers: Vec<EditionMarker>,
    pub edition_span: Option<Span>,
    /// The last four digit year in the filename.
    pub year: Option<u16>,
    pub noise: Vec<Noise>,
    pub trailer_source: TrailerSource,
}

impl From<Extraction> for EditionResult {
    fn from(extraction: Extraction) -> Self {
        extraction.result
    }
}
