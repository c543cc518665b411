//! A tiny interactive shell over one INI document.
//!
//! Commands are read from stdin as whitespace-separated words:
//!
//! ```text
//! read <path>                      decode a file and merge it in
//! write <path>                     encode and save the document
//! find <section> <key>             print one value
//! update <section> <key> <value>   set one value
//! ```
//!
//! Run with: cargo run --example interactive
//! Set `RUST_LOG=debug` to see what the library does.

use inifile::Document;
use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;

/// Whitespace-separated words from a line-oriented reader.
struct Words<R> {
    lines: io::Lines<R>,
    pending: std::vec::IntoIter<String>,
}

impl<R: BufRead> Words<R> {
    fn new(reader: R) -> Self {
        Words {
            lines: reader.lines(),
            pending: Vec::new().into_iter(),
        }
    }
}

impl<R: BufRead> Iterator for Words<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(word) = self.pending.next() {
                return Some(Ok(word));
            }
            match self.lines.next()? {
                Ok(line) => {
                    self.pending = line
                        .split_whitespace()
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                        .into_iter();
                }
                Err(e) => return Some(Err(e)),
            }
        }
    }
}

/// The document being edited, owned by the shell session.
#[derive(Default)]
struct Session {
    document: Document,
}

impl Session {
    fn read(&mut self, path: PathBuf) -> inifile::Result<()> {
        let loaded = inifile::read_file(path)?;
        self.document.extend(loaded);
        Ok(())
    }

    fn write(&self, path: PathBuf) -> inifile::Result<()> {
        inifile::write_file(path, &self.document)
    }

    fn find(&self, section: &str, key: &str) -> Result<String, &'static str> {
        let found = self.document.find(section).ok_or("Unknown section name.")?;
        let value = found.get(key).ok_or("Unknown key name.")?;
        Ok(format!("[{section}] {key}: {value}"))
    }

    fn update(&mut self, section: String, key: String, value: String) {
        self.document.set(section, key, value);
    }
}

fn report(command: &str, result: inifile::Result<()>) {
    if let Err(e) = result {
        eprintln!("Error at {command}: {e}");
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let stdin = io::stdin();
    let mut words = Words::new(stdin.lock());
    let mut next_word = || words.next().transpose();
    let mut session = Session::default();

    while let Some(command) = next_word()? {
        match command.as_str() {
            "read" => {
                let Some(path) = next_word()? else { break };
                report("read", session.read(path.into()));
            }
            "write" => {
                let Some(path) = next_word()? else { break };
                report("write", session.write(path.into()));
            }
            "find" => {
                let (Some(section), Some(key)) = (next_word()?, next_word()?) else {
                    break;
                };
                match session.find(&section, &key) {
                    Ok(line) => println!("{line}"),
                    Err(e) => eprintln!("{e}"),
                }
            }
            "update" => {
                let (Some(section), Some(key), Some(value)) =
                    (next_word()?, next_word()?, next_word()?)
                else {
                    break;
                };
                session.update(section, key, value);
                log::info!("document now has {} section(s)", session.document.len());
            }
            _ => eprintln!("Unknown command."),
        }
    }

    Ok(())
}
