use crate::compiler::frontend::reader::Input;
use nom::error::{VerboseError, VerboseErrorKind};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
    #[error("ReadError: {}", describe(.0))]
    ReadError(Vec<ReadErrorDetail>),
    #[error("Incomplete input")]
    IncompleteInput,
    #[error("ParseError: {0}")]
    ParseError(String),
}

impl Error {
    pub fn parse_error<M: Into<String>>(message: M) -> Self {
        Error::ParseError(message.into())
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Error::IncompleteInput)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReadErrorDetail {
    pub context: String,
    pub span: String,
    pub line: usize,
    pub column: usize,
}

impl std::fmt::Display for ReadErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.column, self.context)
    }
}

fn describe(details: &[ReadErrorDetail]) -> String {
    details
        .first()
        .map(|d| d.to_string())
        .unwrap_or_else(|| String::from("unknown error"))
}

type NomError<'a> = VerboseError<Input<'a>>;

// An error raised at the very end of the input means the reader ran out of
// text in the middle of a datum.
impl<'a> From<nom::Err<NomError<'a>>> for Error {
    fn from(e: nom::Err<NomError<'a>>) -> Error {
        match e {
            nom::Err::Incomplete(_) => Error::IncompleteInput,
            nom::Err::Failure(e) | nom::Err::Error(e) => {
                match e.errors.first() {
                    Some((input, _)) if input.fragment().is_empty() => Error::IncompleteInput,
                    _ => Error::ReadError(e.errors.iter().map(|elt| elt.into()).collect()),
                }
            }
        }
    }
}

impl<'a> From<&(Input<'a>, VerboseErrorKind)> for ReadErrorDetail {
    fn from(e: &(Input<'a>, VerboseErrorKind)) -> ReadErrorDetail {
        let (input, kind) = e;
        let context = match kind {
            VerboseErrorKind::Context(ctx) => ctx.to_string(),
            VerboseErrorKind::Char(c) => format!("expected {}", c),
            VerboseErrorKind::Nom(k) => format!("while parsing {:?}", k),
        };

        ReadErrorDetail {
            context,
            span: input.fragment().to_string(),
            line: input.location_line() as usize,
            column: input.get_column(),
        }
    }
}
