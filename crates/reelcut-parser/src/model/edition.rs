//! Edition markers recognized in release filenames.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::vocab;

/// Word binding to the marker before it: `Cut`, `Edition` or `Version`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connector {
    Cut,
    Edition,
    Version,
}

impl fmt::Display for Connector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Connector::Cut => "Cut",
            Connector::Edition => "Edition",
            Connector::Version => "Version",
        };
        write!(f, "{}", s)
    }
}

/// Qualifiers that only name an edition when followed by a [`Connector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NamedCut {
    Special,
    Final,
    Assembly,
    Imperial,
    Diamond,
    Signature,
    Hunter,
    Rekall,
    Rogue,
}

impl fmt::Display for NamedCut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NamedCut::Special => "Special",
            NamedCut::Final => "Final",
            NamedCut::Assembly => "Assembly",
            NamedCut::Imperial => "Imperial",
            NamedCut::Diamond => "Diamond",
            NamedCut::Signature => "Signature",
            NamedCut::Hunter => "Hunter",
            NamedCut::Rekall => "Rekall",
            NamedCut::Rogue => "Rogue",
        };
        write!(f, "{}", s)
    }
}

/// A single edition marker.
///
/// Several markers can make up one edition: "Extended Directors Cut Fan Edit"
/// is `[Extended, DirectorsCut, FanEdit]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EditionMarker {
    /// Director's Cut (also a lone "Directors")
    DirectorsCut,
    /// Collector's Edition
    CollectorsEdition,
    Extended,
    Theatrical,
    Ultimate,
    Unrated,
    Uncut,
    Uncensored,
    Remastered,
    Restored,
    /// Despecialized (fan edit restoring the original release)
    Despecialized,
    Imax,
    FanEdit,
    OpenMatte,
    /// A qualifier plus the connector it was written with ("Special Edition", "Final Cut")
    Named(NamedCut, Connector),
    /// Anniversary edition, with the ordinal when one was given ("50th")
    AnniversaryEdition(Option<u16>),
    /// Multi-film reissue such as "2in1"
    ReissueRatio(u8, u8),
    /// A keyword added through configuration, as configured
    Custom(String),
}

impl fmt::Display for EditionMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditionMarker::DirectorsCut => write!(f, "Director's Cut"),
            EditionMarker::CollectorsEdition => write!(f, "Collector's Edition"),
            EditionMarker::Extended => write!(f, "Extended"),
            EditionMarker::Theatrical => write!(f, "Theatrical"),
            EditionMarker::Ultimate => write!(f, "Ultimate"),
            EditionMarker::Unrated => write!(f, "Unrated"),
            EditionMarker::Uncut => write!(f, "Uncut"),
            EditionMarker::Uncensored => write!(f, "Uncensored"),
            EditionMarker::Remastered => write!(f, "Remastered"),
            EditionMarker::Restored => write!(f, "Restored"),
            EditionMarker::Despecialized => write!(f, "Despecialized"),
            EditionMarker::Imax => write!(f, "IMAX"),
            EditionMarker::FanEdit => write!(f, "Fan Edit"),
            EditionMarker::OpenMatte => write!(f, "Open Matte"),
            EditionMarker::Named(name, connector) => write!(f, "{} {}", name, connector),
            EditionMarker::AnniversaryEdition(Some(n)) => {
                write!(f, "{}{} Anniversary Edition", n, vocab::ordinal_suffix(*n))
            }
            EditionMarker::AnniversaryEdition(None) => write!(f, "Anniversary Edition"),
            EditionMarker::ReissueRatio(n, m) => write!(f, "{}in{}", n, m),
            EditionMarker::Custom(s) => write!(f, "{}", s),
        }
    }
}

impl FromStr for EditionMarker {
    type Err = ParseError;

    /// Parse a single marker written the way it would appear in a filename.
    ///
    /// Only the built-in vocabulary is recognized, so `Custom` markers do not
    /// parse back.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::extractor::parse_marker(s)
            .ok_or_else(|| ParseError(format!("unknown edition marker: {}", s)))
    }
}
