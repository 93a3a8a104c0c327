pub mod command;
mod error;
pub mod shell;
mod storage;
mod value;

pub use command::{Command, Reply};
pub use error::{Error, Result};
pub use shell::Shell;
pub use storage::DataStorage;
pub use value::Value;
