use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::{DataStorage, Value};

/// A single line of the command language
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Set(String, Value),
    Get(String),
    Remove(String),
    Count,
    Exit,
}

/// Outcome of applying a command
#[derive(Clone, Debug, PartialEq)]
pub enum Reply {
    Ok,
    Value(Value),
    NotFound,
    Count(usize),
}

impl Command {
    /// Runs this command against `storage`.
    pub fn apply(self, storage: &mut DataStorage<String, Value>) -> Reply {
        match self {
            Self::Set(key, value) => {
                storage.insert(key, value);
                Reply::Ok
            }
            Self::Get(key) => match storage.get(&key) {
                Some(value) => Reply::Value(value.clone()),
                None => Reply::NotFound,
            },
            Self::Remove(key) => {
                storage.remove(&key);
                Reply::Ok
            }
            Self::Count => Reply::Count(storage.count()),
            Self::Exit => Reply::Ok,
        }
    }
}

// Keys are bare words; quoting is only understood for values
fn check_key(name: &str, key: &str) -> Result<String> {
    if key.contains('"') {
        return Err(Error::ParseError(format!("{}: keys cannot contain quotes", name)));
    }
    Ok(key.to_owned())
}

// Returns the only key argument of `name`, rejecting missing or extra ones
fn single_key(name: &str, rest: Option<&str>) -> Result<String> {
    let mut args = rest.unwrap_or("").split_whitespace();

    match (args.next(), args.next()) {
        (Some(key), None) => check_key(name, key),
        (None, _) => Err(Error::ParseError(format!("{}: missing key", name))),
        (Some(_), Some(_)) => Err(Error::ParseError(format!("{}: too many arguments", name))),
    }
}

fn no_args(name: &str, rest: Option<&str>) -> Result<()> {
    match rest.map(str::trim) {
        None | Some("") => Ok(()),
        Some(_) => Err(Error::ParseError(format!("{}: takes no arguments", name))),
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let mut parts = line.splitn(2, char::is_whitespace);

        let name = parts.next().unwrap_or("").to_lowercase();
        let rest = parts.next();

        match name.as_str() {
            "set" => {
                let mut args = rest.unwrap_or("").trim_start().splitn(2, char::is_whitespace);
                let key = match args.next() {
                    Some(key) if !key.is_empty() => check_key("set", key)?,
                    _ => return Err(Error::ParseError("set: missing key".to_owned())),
                };
                let value = match args.next().map(str::trim) {
                    Some(value) if !value.is_empty() => Value::parse(value),
                    _ => return Err(Error::ParseError("set: missing value".to_owned())),
                };
                Ok(Self::Set(key, value))
            }
            "get" => Ok(Self::Get(single_key("get", rest)?)),
            "rm" | "remove" => Ok(Self::Remove(single_key("rm", rest)?)),
            "count" => no_args("count", rest).map(|_| Self::Count),
            "exit" | "quit" => no_args("exit", rest).map(|_| Self::Exit),
            "" => Err(Error::ParseError("empty command".to_owned())),
            other => Err(Error::ParseError(format!("unknown command \"{}\"", other))),
        }
    }
}

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Ok => Ok(()),
            Self::Value(value) => write!(f, "{}", value),
            Self::NotFound => write!(f, "Key not found"),
            Self::Count(n) => write!(f, "{}", n),
        }
    }
}
