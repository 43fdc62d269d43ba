use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenDiffError {
    #[error(transparent)]
    Parse(#[from] gendiff_parse::ParseError),

    #[error(transparent)]
    Format(#[from] gendiff_format::FormatError),

    #[error("invalid configuration: {0}")]
    Config(String),
}

pub type GenDiffResult<T> = Result<T, GenDiffError>;
