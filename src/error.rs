use std::error;
use std::fmt;

use nom::Err;

#[derive(PartialEq, Eq, Debug, Clone)]
#[non_exhaustive]
pub enum Error {
    ParseError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::ParseError(s) => write!(f, "{s}"),
        }
    }
}

impl error::Error for Error {}

impl From<nom::error::Error<&str>> for Error {
    fn from(err: nom::error::Error<&str>) -> Self {
        Error::ParseError(format!("Parsing error: {:?} at {:?}", err.code, err.input))
    }
}

impl From<Err<nom::error::Error<&str>>> for Error {
    fn from(err: Err<nom::error::Error<&str>>) -> Self {
        match err {
            Err::Error(e) | Err::Failure(e) => Error::from(e),
            Err::Incomplete(_) => Error::ParseError(String::from("Parsing error: incomplete input")),
        }
    }
}
