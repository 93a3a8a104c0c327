use std::io::{BufRead, Write};

use crate::command::{Command, Reply};
use crate::{DataStorage, Result, Value};

/// Interactive front-end over a single `DataStorage`.
///
/// The storage lives as long as the shell does; nothing is written to disk.
pub struct Shell {
    storage: DataStorage<String, Value>,
}

impl Shell {
    pub fn new(storage: DataStorage<String, Value>) -> Self {
        Shell { storage }
    }

    pub fn storage(&self) -> &DataStorage<String, Value> {
        &self.storage
    }

    // Returns `false` once the session should end
    fn handle_line(&mut self, line: &str, output: &mut impl Write) -> Result<bool> {
        let command: Command = match line.parse() {
            Ok(command) => command,
            Err(e) => {
                log::warn!("Rejected line {:?}: {}", line, e);
                writeln!(output, "error: {}", e)?;
                return Ok(true);
            }
        };

        log::debug!("Executing {:?}", command);

        if command == Command::Exit {
            return Ok(false);
        }

        match command.apply(&mut self.storage) {
            Reply::Ok => (),
            reply => writeln!(output, "{}", reply)?,
        }

        Ok(true)
    }

    /// Reads commands from `input` until `exit` or end of input, writing
    /// replies to `output`.
    pub fn run(&mut self, mut input: impl BufRead, mut output: impl Write) -> Result<()> {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            // A line that is not UTF-8 is rejected like any other bad line
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    log::warn!("Rejected non UTF-8 line: {}", e);
                    writeln!(output, "error: invalid UTF-8")?;
                    output.flush()?;
                    continue;
                }
            };
            let trimmed = line.trim();

            // Skip blanks and comments
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if !self.handle_line(trimmed, &mut output)? {
                break;
            }

            output.flush()?;
        }

        log::info!("Session done, {} keys held", self.storage.count());

        Ok(())
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(DataStorage::new())
    }
}
