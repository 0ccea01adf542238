//! Data model types for extracted edition information.

mod edition;
mod result;
mod tags;

pub use edition::{Connector, EditionMarker, NamedCut};
pub use result::{EditionResult, Extraction, Noise, NoiseKind, TrailerSource};
pub use tags::{format_edition_tags, TagCase};
