/// Datastore shell
use std::fs::File;
use std::io::{self, BufReader};

use clap::{App, Arg};
use datastore::{DataStorage, Result, Shell};

fn main() -> Result<()> {
    env_logger::init();

    let matches = App::new("datastore")
        .version(env!("CARGO_PKG_VERSION"))
        .author(env!("CARGO_PKG_AUTHORS"))
        .about("In-memory key-value shell")
        .arg(
            Arg::with_name("capacity")
                .long("capacity")
                .value_name("N")
                .help("Initial number of keys to reserve room for"),
        )
        .arg(
            Arg::with_name("script")
                .value_name("SCRIPT")
                .help("Read commands from this file instead of stdin"),
        )
        .get_matches();

    let storage = match matches.value_of("capacity") {
        Some(capacity) => DataStorage::with_capacity(capacity.parse()?),
        None => DataStorage::new(),
    };

    let mut shell = Shell::new(storage);
    let stdout = io::stdout();

    match matches.value_of("script") {
        Some(path) => {
            log::info!("Reading commands from {}", path);
            let file = File::open(path)?;
            shell.run(BufReader::new(file), stdout.lock())?;
        }
        None => {
            let stdin = io::stdin();
            shell.run(stdin.lock(), stdout.lock())?;
        }
    }

    Ok(())
}
