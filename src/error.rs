use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid pattern for field '{field}': {source}")]
    Pattern {
        field: &'static str,
        source: regex::Error,
    },

    /// The pattern text contains characters that can only come from a
    /// botched encoding round-trip (e.g. UTF-8 bytes read as Latin-1).
    /// Such a pattern would compile fine and then never match anything.
    #[error("pattern for field '{0}' contains mis-encoded characters")]
    CorruptedPattern(&'static str),

    #[error("failed to write workbook: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
}
