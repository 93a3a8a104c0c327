use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A stored payload.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl Value {
    /// Interprets a raw token from the command line.
    ///
    /// Double-quoted text is always a string, with the quotes stripped, so
    /// `"123"` stays text. Otherwise integers and `true`/`false` are
    /// recognized and everything else is kept as a string. A leading `+`
    /// keeps the token as text so it displays exactly as given.
    pub fn parse(token: &str) -> Self {
        if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            return Self::Str(token[1..token.len() - 1].to_owned());
        }

        if !token.starts_with('+') {
            if let Ok(n) = token.parse::<i64>() {
                return Self::Int(n);
            }
        }

        match token {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Str(token.to_owned()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{}", n),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}
