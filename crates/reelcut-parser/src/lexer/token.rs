//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized by the lexer.
///
/// Release metadata (year, resolution, source, codecs) gets its own variants so
/// the extractor can recognize it as noise. Everything else that is not a
/// delimiter or bracket falls through to [`Token::Word`], so every character of
/// the input lands in some token.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"\s+")]
pub enum Token<'src> {
    /// Four digit year (1900-2099)
    #[regex(r"(19|20)[0-9]{2}", priority = 10)]
    Year(&'src str),

    /// Video resolution (e.g., 2160p, 1080p, 720p, 1080i, 4K, UHD)
    #[regex(r"(?i)([0-9]{3,4}[pi]|4k|uhd)", priority = 10)]
    Resolution(&'src str),

    /// Release source (BluRay, BRRip, WEB-DL, HDTV, ...)
    #[regex(
        r"(?i)(blu-?ray|brrip|bdrip|bdremux|remux|web-?dl|web-?rip|hdtv|hdrip|dvdrip|dvd-?r|hdcam|telesync|hdts)",
        priority = 9
    )]
    Source(&'src str),

    /// Video codec (x264, x265, H.264, HEVC, XviD, ...)
    #[regex(r"(?i)(x264|x265|h\.?264|h\.?265|hevc|avc|xvid|divx|av1)", priority = 9)]
    VideoCodec(&'src str),

    /// Audio codec (AAC, AC3, DTS-HD, TrueHD, ...)
    #[regex(
        r"(?i)(aac|e?ac-?3|dts|dts-?hd|truehd|atmos|flac|mp3|ddp?[0-9]\.[0-9])",
        priority = 9
    )]
    AudioCodec(&'src str),

    /// Dot delimiter
    #[token(".")]
    Dot,

    /// Hyphen delimiter
    #[token("-")]
    Hyphen,

    /// Underscore delimiter
    #[token("_")]
    Underscore,

    /// Opening square bracket
    #[token("[")]
    BracketOpen,

    /// Closing square bracket
    #[token("]")]
    BracketClose,

    /// Opening parenthesis
    #[token("(")]
    ParenOpen,

    /// Closing parenthesis
    #[token(")")]
    ParenClose,

    /// Any other run of characters (lower priority than specific patterns)
    #[regex(r"[^\s.\-_\[\]()]+", priority = 1)]
    Word(&'src str),
}

impl<'src> Token<'src> {
    /// Returns true for `.`, `-` and `_`.
    pub fn is_delimiter(&self) -> bool {
        matches!(self, Token::Dot | Token::Hyphen | Token::Underscore)
    }

    /// Returns true for any bracket or parenthesis.
    pub fn is_bracket(&self) -> bool {
        matches!(
            self,
            Token::BracketOpen | Token::BracketClose | Token::ParenOpen | Token::ParenClose
        )
    }
}
