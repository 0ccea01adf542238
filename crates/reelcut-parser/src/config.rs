//! Extractor configuration.

use crate::error::{ConfigError, Result};
use crate::lexer::{Lexer, Token};

/// Which run wins when several edition runs have the same length.
///
/// Edition tags conventionally follow the title, so the default prefers the
/// rightmost run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunPreference {
    /// Prefer the run closest to the end of the filename.
    #[default]
    Last,
    /// Prefer the run closest to the start of the filename.
    First,
}

/// Configuration for the extractor.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use reelcut_parser::config::{ExtractorConfig, RunPreference};
///
/// let config = ExtractorConfig::builder()
///     .run_preference(RunPreference::First)
///     .extra_extension("rmvb")
///     .extra_keyword("Criterion")
///     .build()
///     .unwrap();
/// assert_eq!(config.extra_extensions, vec!["rmvb"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExtractorConfig {
    /// Tie-break between equally long edition runs.
    /// Default: Last
    pub run_preference: RunPreference,

    /// Container extensions recognized in addition to the built-in list,
    /// lowercase and without a leading dot.
    pub extra_extensions: Vec<String>,

    /// Single-word edition keywords recognized in addition to the built-in
    /// vocabulary. Matched case-insensitively, like the built-ins.
    pub extra_keywords: Vec<String>,

    /// Whether to ignore directory components of the input.
    /// Default: true
    pub strip_path: bool,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            run_preference: RunPreference::default(),
            extra_extensions: Vec::new(),
            extra_keywords: Vec::new(),
            strip_path: true,
        }
    }
}

impl ExtractorConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ExtractorConfigBuilder {
        ExtractorConfigBuilder::default()
    }

    /// Check the extra extensions and keywords.
    ///
    /// The builder calls this; use it directly on configurations that were
    /// deserialized or assembled by hand.
    pub fn validate(&self) -> Result<()> {
        for ext in &self.extra_extensions {
            normalize_extension(ext)?;
        }
        for keyword in &self.extra_keywords {
            validate_keyword(keyword)?;
        }
        Ok(())
    }
}

/// Builder for `ExtractorConfig`.
#[derive(Debug, Clone, Default)]
pub struct ExtractorConfigBuilder {
    run_preference: Option<RunPreference>,
    extra_extensions: Vec<String>,
    extra_keywords: Vec<String>,
    strip_path: Option<bool>,
}

impl ExtractorConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set which of two equally long edition runs wins.
    pub fn run_preference(mut self, preference: RunPreference) -> Self {
        self.run_preference = Some(preference);
        self
    }

    /// Recognize an additional container extension (`"rmvb"` or `".rmvb"`).
    pub fn extra_extension(mut self, ext: impl Into<String>) -> Self {
        self.extra_extensions.push(ext.into());
        self
    }

    /// Recognize an additional standalone edition keyword.
    pub fn extra_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.extra_keywords.push(keyword.into());
        self
    }

    /// Set whether directory components of the input are ignored.
    ///
    /// Default: true
    pub fn strip_path(mut self, enabled: bool) -> Self {
        self.strip_path = Some(enabled);
        self
    }

    /// Build the configuration.
    ///
    /// Extensions are lowercased with any leading dot removed.
    pub fn build(self) -> Result<ExtractorConfig> {
        let extra_extensions = self
            .extra_extensions
            .iter()
            .map(|ext| normalize_extension(ext))
            .collect::<Result<Vec<_>>>()?;
        for keyword in &self.extra_keywords {
            validate_keyword(keyword)?;
        }

        Ok(ExtractorConfig {
            run_preference: self.run_preference.unwrap_or_default(),
            extra_extensions,
            extra_keywords: self.extra_keywords,
            strip_path: self.strip_path.unwrap_or(true),
        })
    }
}

pub(crate) fn normalize_extension(ext: &str) -> Result<String> {
    let trimmed = ext.strip_prefix('.').unwrap_or(ext);
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyExtension);
    }
    if !trimmed.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ConfigError::InvalidExtension(ext.to_string()));
    }
    Ok(trimmed.to_ascii_lowercase())
}

fn validate_keyword(keyword: &str) -> Result<()> {
    if keyword.is_empty() {
        return Err(ConfigError::EmptyKeyword);
    }
    let splits = |c: char| c.is_whitespace() || matches!(c, '.' | '-' | '_' | '[' | ']' | '(' | ')');
    if keyword.chars().any(splits) {
        return Err(ConfigError::InvalidKeyword(keyword.to_string()));
    }
    // Years and release metadata (`2012`, `4K`, `DTS`) never lex as words,
    // so they could never match.
    match Lexer::new(keyword).tokens() {
        [(Token::Word(_), _)] => Ok(()),
        _ => Err(ConfigError::InvalidKeyword(keyword.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.run_preference, RunPreference::Last);
        assert!(config.extra_extensions.is_empty());
        assert!(config.extra_keywords.is_empty());
        assert!(config.strip_path);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = ExtractorConfig::builder()
            .run_preference(RunPreference::First)
            .extra_extension(".RMVB")
            .extra_keyword("Criterion")
            .strip_path(false)
            .build()
            .unwrap();

        assert_eq!(config.run_preference, RunPreference::First);
        assert_eq!(config.extra_extensions, vec!["rmvb".to_string()]);
        assert_eq!(config.extra_keywords, vec!["Criterion".to_string()]);
        assert!(!config.strip_path);
    }

    #[test]
    fn test_builder_partial() {
        let config = ExtractorConfig::builder()
            .extra_keyword("Criterion")
            .build()
            .unwrap();

        assert_eq!(config.run_preference, RunPreference::Last); // default
        assert!(config.strip_path); // default
    }

    #[test]
    fn test_invalid_extensions() {
        assert_eq!(
            ExtractorConfig::builder().extra_extension(".").build(),
            Err(ConfigError::EmptyExtension)
        );
        assert_eq!(
            ExtractorConfig::builder().extra_extension("m k v").build(),
            Err(ConfigError::InvalidExtension("m k v".to_string()))
        );
    }

    #[test]
    fn test_invalid_keywords() {
        assert_eq!(
            ExtractorConfig::builder().extra_keyword("").build(),
            Err(ConfigError::EmptyKeyword)
        );
        assert_eq!(
            ExtractorConfig::builder().extra_keyword("Black.Edition").build(),
            Err(ConfigError::InvalidKeyword("Black.Edition".to_string()))
        );
    }

    #[test]
    fn test_metadata_keywords_are_rejected() {
        for keyword in ["4K", "DTS", "2012", "1080p", "BluRay"] {
            assert_eq!(
                ExtractorConfig::builder().extra_keyword(keyword).build(),
                Err(ConfigError::InvalidKeyword(keyword.to_string())),
                "{}",
                keyword
            );
        }
        assert!(ExtractorConfig::builder()
            .extra_keyword("Criterion")
            .build()
            .is_ok());
    }

    #[test]
    fn test_validate_hand_built_config() {
        let config = ExtractorConfig {
            extra_keywords: vec!["Two Words".to_string()],
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
