//! Reading subjects (IP addresses) from a file or stdin.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

/// Where to read IP addresses from when none are given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Standard input (`-i -`)
    Stdin,
    /// A text file, one address per line
    File(PathBuf),
}

impl InputSource {
    /// Interpret an `--input` argument; `-` means stdin.
    pub fn from_arg(arg: &str) -> Self {
        if arg == "-" {
            Self::Stdin
        } else {
            Self::File(PathBuf::from(arg))
        }
    }

    /// Read every non-blank line, trimmed, in file order.
    pub fn read_lines(&self) -> io::Result<Vec<String>> {
        match self {
            Self::Stdin => read_lines(io::stdin().lock()),
            Self::File(path) => read_lines(BufReader::new(File::open(path)?)),
        }
    }
}

/// Collect trimmed, non-blank lines from a reader.
pub fn read_lines(reader: impl BufRead) -> io::Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            lines.push(line.to_string());
        }
    }
    Ok(lines)
}
