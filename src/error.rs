//! Error enum

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Csv(csv::Error),
    /// A lexicon record did not contain exactly two lines (key, value).
    MalformedLexicon {
        record: String,
        lines: usize,
    },
    /// A sentence identifier required for substitution is absent from the lexicon.
    MissingLexiconEntry(String),
    /// A morphosemantic-links row carried fewer than the four required fields.
    ShortCsvRow {
        line: u64,
        fields: usize,
    },
    /// An alignment block had no `# ::id` comment line. Carries the block's first line.
    MissingId(String),
    /// An alignment block had no graph body. Carries the sentence identifier.
    EmptyGraph(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Error {
        Error::Csv(e)
    }
}
