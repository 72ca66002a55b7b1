use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The scoring parameter '{parameter}' must be finite, but it is {value}.")]
    InvalidScoringParameters { parameter: &'static str, value: f64 },

    #[error("Unsupported alignment mode {0}. Use 1 for global or 2 for local alignment.")]
    UnsupportedAlignmentMode(u8),

    #[error("Unsupported alignment mode '{0}'. Use 'global' or 'local'.")]
    UnsupportedAlignmentModeName(String),

    #[error("An IO error occurred: {0}.")]
    Io(#[from] std::io::Error),

    #[error("A parsing error of kind '{kind:?}' occurred when the remaining input was '{input}'.")]
    Parser {
        input: String,
        kind: nom::error::ErrorKind,
    },

    #[error("Parsing was unsuccessful due to incomplete input: {0:?}.")]
    ParserIncomplete(nom::Needed),
}
