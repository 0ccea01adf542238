//! # reelcut-parser
//!
//! Edition and container extension extraction for movie release filenames.
//!
//! Given a free-form filename such as
//! `Prometheus.(Special.Edition.Remastered).2012.[Bluray-1080p].mkv`, the
//! extractor finds the edition descriptor (`Special Edition Remastered`) and
//! the trailer (`mkv`). Extraction is a pure function and never fails.
//!
//! ## Quick Start
//!
//! ```
//! use reelcut_parser::extract;
//!
//! let result = extract("2001 A Space Odyssey Director's Cut (1968).mkv");
//!
//! assert_eq!(result.edition, "Director's Cut");
//! assert_eq!(result.trailer, "mkv");
//! ```
//!
//! ## Configurable Extraction
//!
//! ```
//! use reelcut_parser::Extractor;
//! use reelcut_parser::config::ExtractorConfig;
//!
//! let config = ExtractorConfig::builder()
//!     .extra_keyword("Criterion")
//!     .build()
//!     .unwrap();
//!
//! let extractor = Extractor::new(config);
//! let result = extractor.extract("Movie.1999.Criterion.Remastered.mkv");
//! assert_eq!(result.edition, "Criterion Remastered");
//! ```

pub mod config;
pub mod error;
pub mod lexer;
pub mod model;

mod extractor;
mod vocab;

// Re-export main types for convenience
pub use model::{
    format_edition_tags, Connector, EditionMarker, EditionResult, Extraction, NamedCut, Noise,
    NoiseKind, TagCase, TrailerSource,
};

pub use config::{ExtractorConfig, RunPreference};
pub use error::{ConfigError, ParseError};
pub use extractor::Extractor;
pub use vocab::is_container_extension;

/// Extract the edition and trailer from a filename using default settings.
///
/// This is the simplest way to run the extractor. For more control, use
/// [`Extractor`] with a custom [`ExtractorConfig`].
///
/// # Examples
///
/// ```
/// use reelcut_parser::extract;
///
/// let result = extract("Prometheus.(Extended.Theatrical.Version.IMAX).BluRay.1080p.2012.asdf");
/// assert_eq!(result.edition, "Extended Theatrical Version IMAX");
/// assert_eq!(result.trailer, "asdf");
/// ```
pub fn extract(filename: &str) -> EditionResult {
    Extractor::default().extract(filename)
}

/// Extract from many filenames in parallel using default settings.
///
/// Results are returned in input order.
///
/// ```
/// use reelcut_parser::extract_batch;
///
/// let results = extract_batch(&["Movie IMAX 2012.mkv", "Movie 2012.avi"]);
/// assert_eq!(results[0].edition, "IMAX");
/// assert_eq!(results[1].trailer, "avi");
/// ```
#[cfg(feature = "parallel")]
pub fn extract_batch<S>(filenames: &[S]) -> Vec<EditionResult>
where
    S: AsRef<str> + Sync,
{
    Extractor::default().extract_batch(filenames)
}
