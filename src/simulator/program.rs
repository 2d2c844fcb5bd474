// Program collection from files and other line sources

use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

use crate::error::{Result, SimError};
use crate::isa::is_terminator;

/// Where the instruction lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgramSource {
  File(PathBuf),
  Stdin,
  Interactive,
}

/// Trim lines, drop blanks and `#` comments, and stop after the first `end`.
pub fn collect_program<I, S>(lines: I) -> Result<Vec<String>>
where
  I: IntoIterator<Item = S>,
  S: AsRef<str>,
{
  let mut program = Vec::new();
  for line in lines {
    let line = line.as_ref().trim();
    if line.is_empty() || line.starts_with('#') {
      continue;
    }
    program.push(line.to_string());
    if is_terminator(line) {
      return Ok(program);
    }
  }
  Err(SimError::MissingEnd)
}

pub fn load_program(path: &Path) -> Result<Vec<String>> {
  let content = fs::read_to_string(path)?;
  let program = collect_program(content.lines())?;
  log::info!("loaded {} instructions from {}", program.len(), path.display());
  Ok(program)
}

pub fn read_program<R: BufRead>(reader: R) -> Result<Vec<String>> {
  let lines = reader.lines().collect::<std::io::Result<Vec<_>>>()?;
  collect_program(lines)
}
