//! Edition and trailer extraction.
//!
//! The filename is tokenized, then scanned left to right for edition markers.
//! Adjacent markers in the same bracket group are merged greedily into runs,
//! and the longest run becomes the edition. The trailer is the container
//! extension when there is one, otherwise whatever follows the edition or the
//! last year.

use std::collections::{HashMap, HashSet};
use std::ops::Range;

use crate::config::{normalize_extension, ExtractorConfig, RunPreference};
use crate::lexer::{Lexeme, Span, Token, TokenStream};
use crate::model::{
    EditionMarker, EditionResult, Extraction, Noise, NoiseKind, TrailerSource,
};
use crate::vocab::{self, Term};

/// A configurable edition extractor.
///
/// ```
/// use reelcut_parser::Extractor;
///
/// let extractor = Extractor::default();
/// let result = extractor.extract("Movie IMAX 2012.mkv");
/// assert_eq!(result.edition, "IMAX");
/// assert_eq!(result.trailer, "mkv");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    config: ExtractorConfig,
    /// Normalized keyword -> keyword as configured.
    keywords: HashMap<String, String>,
    extensions: HashSet<String>,
}

/// A maximal sequence of adjacent markers.
#[derive(Debug)]
struct Run {
    start: usize,
    end: usize,
    markers: Vec<EditionMarker>,
}

impl Run {
    fn len(&self) -> usize {
        self.end - self.start
    }
}

impl Extractor {
    /// Create a new extractor with the given configuration.
    ///
    /// Extra extensions that fail validation are skipped; use
    /// [`ExtractorConfig::builder`] to have them reported instead.
    pub fn new(config: ExtractorConfig) -> Self {
        let keywords = config
            .extra_keywords
            .iter()
            .map(|k| (vocab::normalize(k), k.clone()))
            .collect();
        let extensions = config
            .extra_extensions
            .iter()
            .filter_map(|ext| normalize_extension(ext).ok())
            .collect();

        Self {
            config,
            keywords,
            extensions,
        }
    }

    /// The configuration this extractor was built with.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract the edition and trailer from a filename.
    ///
    /// Never fails: input without an edition yields an empty `edition`, and
    /// empty input yields an empty result.
    pub fn extract(&self, filename: &str) -> EditionResult {
        self.extract_detailed(filename).result
    }

    /// Extract the edition and trailer, reporting how they were found.
    pub fn extract_detailed(&self, filename: &str) -> Extraction {
        let name = if self.config.strip_path {
            final_segment(filename)
        } else {
            filename
        };
        let stream = TokenStream::new(name);
        let lexemes = stream.lexemes();

        let runs = self.find_runs(lexemes);
        #[cfg(feature = "tracing")]
        for run in &runs {
            tracing::trace!(
                start = run.start,
                len = run.len(),
                text = %join_words(&lexemes[run.start..run.end]),
                "candidate edition run"
            );
        }

        // Token ranges of every run, winning or not; none of them is noise.
        let covered: Vec<Range<usize>> = runs.iter().map(|run| run.start..run.end).collect();

        // `max_by_key` keeps the last of equal maxima.
        let best = match self.config.run_preference {
            RunPreference::Last => runs.into_iter().max_by_key(Run::len),
            RunPreference::First => runs.into_iter().rev().max_by_key(Run::len),
        };

        let mut extraction = Extraction::default();
        if let Some(run) = &best {
            let words = &lexemes[run.start..run.end];
            extraction.result.edition = join_words(words);
            extraction.edition_span = Some(Span::new(
                words[0].span.start,
                words[words.len() - 1].span.end,
            ));
            extraction.markers = run.markers.clone();
        }

        let extension = name
            .rfind('.')
            .map(|dot| &name[dot + 1..])
            .filter(|ext| self.is_extension(ext));

        let mut last_year_end = None;
        for (i, lexeme) in lexemes.iter().enumerate() {
            let kind = match lexeme.token {
                Token::Year(text) => {
                    extraction.year = text.parse().ok();
                    last_year_end = Some(lexeme.span.end);
                    NoiseKind::Year
                }
                Token::Resolution(_) => NoiseKind::Resolution,
                Token::Source(_) => NoiseKind::Source,
                Token::VideoCodec(_) => NoiseKind::VideoCodec,
                Token::AudioCodec(_) => NoiseKind::AudioCodec,
                Token::Word(_) if is_release_group(lexemes, i, extension.is_some(), &covered) => {
                    NoiseKind::ReleaseGroup
                }
                _ => continue,
            };
            extraction.noise.push(Noise {
                kind,
                text: lexeme.text.to_string(),
                span: lexeme.span,
            });
        }

        let boundary = match (extraction.edition_span.map(|s| s.end), last_year_end) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        };

        let (trailer, source) = if let Some(ext) = extension {
            (ext.to_string(), TrailerSource::Extension)
        } else if let Some(boundary) = boundary {
            let start = trailer_start(lexemes, &extraction.noise, boundary);
            (residual(&name[start..]), TrailerSource::Residual)
        } else if let Some(dot) = name.rfind('.') {
            (name[dot + 1..].to_string(), TrailerSource::LastSegment)
        } else {
            (String::new(), TrailerSource::Empty)
        };
        extraction.result.trailer = trailer;
        extraction.trailer_source = if extraction.result.trailer.is_empty() {
            TrailerSource::Empty
        } else {
            source
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            edition = %extraction.result.edition,
            trailer = %extraction.result.trailer,
            trailer_source = ?extraction.trailer_source,
            "extracted edition"
        );

        extraction
    }

    /// Extract from many filenames in parallel, preserving input order.
    #[cfg(feature = "parallel")]
    pub fn extract_batch<S>(&self, filenames: &[S]) -> Vec<EditionResult>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        filenames
            .par_iter()
            .map(|name| self.extract(name.as_ref()))
            .collect()
    }

    fn is_extension(&self, ext: &str) -> bool {
        vocab::is_container_extension(ext) || self.extensions.contains(&ext.to_ascii_lowercase())
    }

    /// Scan for runs of adjacent markers, absorbing greedily left to right.
    fn find_runs(&self, lexemes: &[Lexeme<'_>]) -> Vec<Run> {
        let mut runs = Vec::new();
        let mut i = 0;

        while i < lexemes.len() {
            let Some((marker, len)) = self.marker_at(lexemes, i) else {
                i += 1;
                continue;
            };

            let start = i;
            let group = lexemes[start].group;
            let mut markers = vec![marker];
            i += len;

            while i < lexemes.len() && lexemes[i].group == group {
                match self.marker_at(lexemes, i) {
                    Some((marker, len)) => {
                        markers.push(marker);
                        i += len;
                    }
                    None => break,
                }
            }

            runs.push(Run {
                start,
                end: i,
                markers,
            });
        }

        runs
    }

    /// Match a single marker starting at `i`, returning it and the number of
    /// tokens it spans.
    fn marker_at(&self, lexemes: &[Lexeme<'_>], i: usize) -> Option<(EditionMarker, usize)> {
        let group = lexemes.get(i)?.group;
        let word = |j: usize| {
            lexemes
                .get(j)
                .filter(|l| l.is_word() && l.group == group)
                .map(|l| vocab::normalize(l.text))
        };
        let connector_at = |j: usize| match word(j).as_deref().and_then(vocab::term) {
            Some(Term::Connector(c)) => Some(*c),
            _ => None,
        };
        let with_connector = |marker: EditionMarker, len: usize| {
            let len = if connector_at(i + len).is_some() {
                len + 1
            } else {
                len
            };
            (marker, len)
        };

        let first = word(i)?;

        if let Some(n) = vocab::ordinal(&first) {
            if word(i + 1).as_deref() == Some("anniversary") {
                return Some(with_connector(EditionMarker::AnniversaryEdition(Some(n)), 2));
            }
        }
        if let Some((n, m)) = vocab::reissue(&first) {
            return Some(with_connector(EditionMarker::ReissueRatio(n, m), 1));
        }

        match vocab::term(&first) {
            Some(Term::Standalone(marker)) => Some(with_connector(marker.clone(), 1)),
            Some(Term::Qualifier(marker)) => {
                let connector = connector_at(i + 1)?;
                let marker = match marker {
                    EditionMarker::Named(name, _) => EditionMarker::Named(*name, connector),
                    other => other.clone(),
                };
                Some((marker, 2))
            }
            Some(Term::PairHead { tail, marker }) => {
                if word(i + 1).as_deref() == Some(*tail) {
                    Some(with_connector(marker.clone(), 2))
                } else {
                    None
                }
            }
            Some(Term::Connector(_)) => None,
            None => self
                .keywords
                .get(&first)
                .map(|keyword| with_connector(EditionMarker::Custom(keyword.clone()), 1)),
        }
    }
}

/// A word right after a hyphen that ends the name (or precedes the
/// extension) is a release group tag, unless an edition run covers it.
fn is_release_group(
    lexemes: &[Lexeme<'_>],
    i: usize,
    has_extension: bool,
    runs: &[Range<usize>],
) -> bool {
    let last = if has_extension {
        lexemes.len().checked_sub(2)
    } else {
        lexemes.len().checked_sub(1)
    };
    last == Some(i)
        && lexemes[i].after_hyphen
        && !lexemes[i].in_brackets()
        && !runs.iter().any(|run| run.contains(&i))
}

/// Parse exactly one built-in marker spanning the whole input.
pub(crate) fn parse_marker(s: &str) -> Option<EditionMarker> {
    let stream = TokenStream::new(s);
    let (marker, len) = Extractor::default().marker_at(stream.lexemes(), 0)?;
    (len == stream.len()).then_some(marker)
}

/// Where the residual trailer begins.
///
/// Metadata after the boundary is skipped when a plain word follows it
/// (`BluRay.1080p.asdf` yields `asdf`). A residual made only of metadata
/// and a release group is kept whole.
fn trailer_start(lexemes: &[Lexeme<'_>], noise: &[Noise], boundary: usize) -> usize {
    let metadata_end = noise
        .iter()
        .filter(|n| n.span.start >= boundary && n.kind != NoiseKind::ReleaseGroup)
        .map(|n| n.span.end)
        .max();

    match metadata_end {
        Some(end)
            if lexemes.iter().any(|l| {
                l.span.start >= end && l.is_word() && !noise.iter().any(|n| n.span == l.span)
            }) =>
        {
            end
        }
        _ => boundary,
    }
}

/// The last `/`- or `\`-separated component of a path.
fn final_segment(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

fn join_words(lexemes: &[Lexeme<'_>]) -> String {
    lexemes
        .iter()
        .map(|l| l.text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text after a boundary, without surrounding delimiters or the closing
/// bracket of the group the boundary ended in.
fn residual(rest: &str) -> String {
    rest.trim_start_matches(|c: char| c.is_whitespace() || matches!(c, '.' | '-' | '_' | ')' | ']'))
        .trim_end_matches(|c: char| c.is_whitespace() || matches!(c, '.' | '-' | '_'))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Connector, NamedCut};

    fn extract(input: &str) -> EditionResult {
        Extractor::default().extract(input)
    }

    #[test]
    fn test_fan_edit_with_residual_trailer() {
        let result = extract("Prometheus.Special.Edition.Fan Edit.2012..BRRip.x264.AAC-m2g");
        assert_eq!(result.edition, "Special Edition Fan Edit");
        assert_eq!(result.trailer, "BRRip.x264.AAC-m2g");
    }

    #[test]
    fn test_grouped_edition_with_bracketed_noise() {
        let result = extract("Prometheus.(Special.Edition.Remastered).2012.[Bluray-1080p].mkv");
        assert_eq!(result.edition, "Special Edition Remastered");
        assert_eq!(result.trailer, "mkv");
    }

    #[test]
    fn test_directors_cut_before_year() {
        let result = extract("2001 A Space Odyssey Director's Cut (1968).mkv");
        assert_eq!(result.edition, "Director's Cut");
        assert_eq!(result.trailer, "mkv");
    }

    #[test]
    fn test_imax() {
        let result = extract("Movie IMAX 2012.mkv");
        assert_eq!(result.edition, "IMAX");
        assert_eq!(result.trailer, "mkv");
    }

    #[test]
    fn test_lone_directors() {
        let result = extract("A Fake Movie 2035 Directors 2012.mkv");
        assert_eq!(result.edition, "Directors");
        assert_eq!(result.trailer, "mkv");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        let result = extract("Prometheus.(Extended.Theatrical.Version.IMAX).BluRay.1080p.2012.asdf");
        assert_eq!(result.edition, "Extended Theatrical Version IMAX");
        assert_eq!(result.trailer, "asdf");
    }

    #[test]
    fn test_metadata_before_residual_word_is_skipped() {
        let result = extract("Prometheus.(Extended.Theatrical.Version.IMAX).2012.BluRay.1080p.asdf");
        assert_eq!(result.trailer, "asdf");

        let result = extract("Movie.(Extended.Edition).1080p.BD25");
        assert_eq!(result.trailer, "BD25");
    }

    #[test]
    fn test_metadata_only_residual_is_kept_whole() {
        let result = extract("Movie.Extended.2012.1080p.x264-GROUP");
        assert_eq!(result.trailer, "1080p.x264-GROUP");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(extract(""), EditionResult::default());
    }

    #[test]
    fn test_no_edition() {
        let result = extract("Mission Impossible: Rogue Nation 2012 Bluray");
        assert!(result.is_standard());
        assert_eq!(result.trailer, "Bluray");
    }

    #[test]
    fn test_no_boundary_uses_last_segment() {
        let result = extract("Some.Movie.Name");
        assert!(result.is_standard());
        assert_eq!(result.trailer, "Name");

        let detailed = Extractor::default().extract_detailed("Some.Movie.Name");
        assert_eq!(detailed.trailer_source, TrailerSource::LastSegment);
    }

    #[test]
    fn test_edition_at_end_leaves_empty_trailer() {
        let result = extract("My.Movie.GERMAN.Extended.Cut");
        assert_eq!(result.edition, "Extended Cut");
        assert_eq!(result.trailer, "");

        let result = extract("2001: A Space Odyssey 1968 (Extended Directors Cut FanEdit)");
        assert_eq!(result.edition, "Extended Directors Cut FanEdit");
        assert_eq!(result.trailer, "");
    }

    #[test]
    fn test_path_components_are_ignored() {
        let result = extract("/movies/Director's Cut/Movie.2012.Extended.mkv");
        assert_eq!(result.edition, "Extended");
        assert_eq!(result.trailer, "mkv");

        let result = extract(r"C:\Movies\Movie.2012.Unrated.avi");
        assert_eq!(result.edition, "Unrated");
        assert_eq!(result.trailer, "avi");
    }

    #[test]
    fn test_qualifier_needs_connector() {
        assert!(extract("The Final Countdown 1980.mkv").is_standard());
        assert_eq!(extract("Fake Movie Final Cut 2016").edition, "Final Cut");
        assert!(extract("Movie Fan 2012.mkv").is_standard());
    }

    #[test]
    fn test_connector_binds_backward_only() {
        assert!(extract("Movie Edition 2012.mkv").is_standard());
        assert_eq!(
            extract("Movie Special Edition Director's Cut 2012.mkv").edition,
            "Special Edition Director's Cut"
        );
    }

    #[test]
    fn test_runs_do_not_cross_groups() {
        let result = extract("Movie Extended (Director's Cut) 2012.mkv");
        assert_eq!(result.edition, "Director's Cut");
    }

    #[test]
    fn test_longest_run_wins() {
        let result = extract("Extended.Movie.2012.Directors.Cut.IMAX.mkv");
        assert_eq!(result.edition, "Directors Cut IMAX");
    }

    #[test]
    fn test_tie_break_preference() {
        let input = "Uncut.Movie.2012.Remastered.mkv";
        assert_eq!(extract(input).edition, "Remastered");

        let config = ExtractorConfig::builder()
            .run_preference(RunPreference::First)
            .build()
            .unwrap();
        assert_eq!(Extractor::new(config).extract(input).edition, "Uncut");
    }

    #[test]
    fn test_plural_possessive_spellings() {
        assert_eq!(extract("Movie Directors' Cut 2012.mkv").edition, "Directors' Cut");
        assert_eq!(
            extract("Movie.2012.Collectors'.Edition.mkv").edition,
            "Collectors' Edition"
        );
    }

    #[test]
    fn test_case_insensitive_match_preserves_case() {
        assert_eq!(extract("Movie director's cut 2012.mkv").edition, "director's cut");
        assert_eq!(extract("Movie DIRECTOR'S CUT 2012.mkv").edition, "DIRECTOR'S CUT");
    }

    #[test]
    fn test_markers_reported() {
        let extraction = Extractor::default()
            .extract_detailed("Prometheus 2012 Extended Directors Cut Fan Edit");
        assert_eq!(
            extraction.markers,
            vec![
                EditionMarker::Extended,
                EditionMarker::DirectorsCut,
                EditionMarker::FanEdit
            ]
        );

        let extraction = Extractor::default().extract_detailed("Prometheus 50th Anniversary Edition 2012.mkv");
        assert_eq!(extraction.result.edition, "50th Anniversary Edition");
        assert_eq!(
            extraction.markers,
            vec![EditionMarker::AnniversaryEdition(Some(50))]
        );

        let extraction = Extractor::default().extract_detailed("Movie.Special.Version.mkv");
        assert_eq!(
            extraction.markers,
            vec![EditionMarker::Named(NamedCut::Special, Connector::Version)]
        );
    }

    #[test]
    fn test_edition_span() {
        let input = "Movie IMAX 2012.mkv";
        let extraction = Extractor::default().extract_detailed(input);
        let span = extraction.edition_span.unwrap();
        assert_eq!(&input[span.start..span.end], "IMAX");
    }

    #[test]
    fn test_noise_is_reported() {
        let extraction = Extractor::default()
            .extract_detailed("Prometheus.Special.Edition.Fan Edit.2012..BRRip.x264.AAC-m2g");
        let kinds: Vec<_> = extraction.noise.iter().map(|n| n.kind).collect();
        assert_eq!(
            kinds,
            vec![
                NoiseKind::Year,
                NoiseKind::Source,
                NoiseKind::VideoCodec,
                NoiseKind::AudioCodec,
                NoiseKind::ReleaseGroup,
            ]
        );
        assert_eq!(extraction.year, Some(2012));
        assert_eq!(extraction.noise[4].text, "m2g");
        assert_eq!(extraction.trailer_source, TrailerSource::Residual);
    }

    #[test]
    fn test_release_group_before_extension() {
        let extraction =
            Extractor::default().extract_detailed("Movie.2012.Extended.1080p.BluRay.x264-GROUP.mkv");
        assert!(extraction
            .noise
            .iter()
            .any(|n| n.kind == NoiseKind::ReleaseGroup && n.text == "GROUP"));
        assert_eq!(extraction.trailer_source, TrailerSource::Extension);
    }

    #[test]
    fn test_hyphenated_connector_is_not_a_release_group() {
        for input in ["Movie.2012.Special-Edition.mkv", "Movie.2012.Directors-Cut"] {
            let extraction = Extractor::default().extract_detailed(input);
            let span = extraction.edition_span.unwrap();
            assert!(
                extraction
                    .noise
                    .iter()
                    .all(|n| n.span.end <= span.start || n.span.start >= span.end),
                "{}: {:?}",
                input,
                extraction.noise
            );
            assert!(extraction
                .noise
                .iter()
                .all(|n| n.kind != NoiseKind::ReleaseGroup));
        }

        let extraction = Extractor::default().extract_detailed("Movie.2012.Directors-Cut");
        assert_eq!(extraction.result.edition, "Directors Cut");
        assert_eq!(extraction.result.trailer, "");
    }

    #[test]
    fn test_last_year_is_reported() {
        let extraction = Extractor::default().extract_detailed("2001 A Space Odyssey (1968).mkv");
        assert_eq!(extraction.year, Some(1968));
    }

    #[test]
    fn test_custom_keyword() {
        let config = ExtractorConfig::builder()
            .extra_keyword("Criterion")
            .build()
            .unwrap();
        let extraction = Extractor::new(config).extract_detailed("Movie.1999.CRITERION.Remastered.mkv");
        assert_eq!(extraction.result.edition, "CRITERION Remastered");
        assert_eq!(
            extraction.markers,
            vec![
                EditionMarker::Custom("Criterion".to_string()),
                EditionMarker::Remastered
            ]
        );
    }

    #[test]
    fn test_custom_extension() {
        let config = ExtractorConfig::builder()
            .extra_extension("rmvb")
            .build()
            .unwrap();
        let result = Extractor::new(config).extract("Movie.2012.Uncut.BRRip.RMVB");
        assert_eq!(result.edition, "Uncut");
        assert_eq!(result.trailer, "RMVB");
    }

    #[test]
    fn test_strip_path_disabled() {
        let input = "Extended Cut/Movie 2012";
        assert!(extract(input).is_standard());

        let config = ExtractorConfig::builder().strip_path(false).build().unwrap();
        let result = Extractor::new(config).extract(input);
        assert_eq!(result.edition, "Extended");
    }

    #[test]
    fn test_reissue() {
        let result = extract("Movie 2in1 2012.mkv");
        assert_eq!(result.edition, "2in1");
    }

    #[test]
    fn test_parse_marker_whole_input() {
        assert_eq!(parse_marker("Fan Edit"), Some(EditionMarker::FanEdit));
        assert_eq!(parse_marker("Fan Edit 2012"), None);
        assert_eq!(parse_marker(""), None);
    }
}
