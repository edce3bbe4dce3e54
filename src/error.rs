use std::fmt::{self, Display, Formatter};

/// Longest slice of an upstream body carried inside an error message.
const SNIPPET_LEN: usize = 512;

#[derive(Debug)]
pub enum Error {
    Fetch(String),
    Parse(String),
    Encode(serde_json::Error),
    Decode(String),
    Config(String),
    Io(std::io::Error),
}

impl Error {
    pub fn decode_error(msg: &str) -> Self {
        Self::Decode(msg.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Fetch(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fetch(msg) => write!(f, "Fetch error: {msg}"),
            Self::Parse(msg) => write!(f, "Parse error: {msg}"),
            Self::Encode(e) => write!(f, "Encode error: {e}"),
            Self::Decode(msg) => write!(f, "Decode error: {msg}"),
            Self::Config(msg) => write!(f, "Config error: {msg}"),
            Self::Io(e) => write!(f, "IO error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Encode(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// cuts `s` down to at most [`SNIPPET_LEN`] bytes without splitting a char
pub fn snippet(s: &str) -> &str {
    if s.len() <= SNIPPET_LEN {
        return s;
    }
    let mut end = SNIPPET_LEN;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

pub type Result<T> = std::result::Result<T, Error>;
