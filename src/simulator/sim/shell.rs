use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::{Result, SimError};
use crate::isa::is_terminator;

pub const STEP_PROMPT: &str = "(cpusim) ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
  Step(u32), // Step N times
  Continue,
  Registers,
  Quit,
}

/// Where step mode gets its next command from.
pub trait CommandSource {
  fn next_command(&mut self) -> Result<Command>;
}

/// Parse one step-mode command line. Empty input steps once.
pub fn parse_command(line: &str) -> std::result::Result<Command, String> {
  let trimmed = line.trim();

  if trimmed.is_empty() {
    return Ok(Command::Step(1));
  }

  // si command: step N times
  if let Some(num_str) = trimmed.strip_prefix("si") {
    let num_str = num_str.trim();
    if num_str.is_empty() {
      return Err("'si' requires a number, e.g., 'si 10'".to_string());
    }
    return match num_str.parse::<u32>() {
      Ok(n) if n > 0 => Ok(Command::Step(n)),
      Ok(_) => Err("step count must be greater than 0".to_string()),
      Err(e) => Err(format!("invalid number '{}': {}", num_str, e)),
    };
  }

  match trimmed {
    "c" => Ok(Command::Continue),
    "r" => Ok(Command::Registers),
    "q" => Ok(Command::Quit),
    _ => Err(format!(
      "Unknown command: '{}'. Use Enter to step, 'si N' to step N times, 'c' to continue, 'r' for registers, 'q' to quit",
      trimmed
    )),
  }
}

/// Line editor for collecting a program and for step-mode commands.
pub struct Shell {
  editor: DefaultEditor,
  history: bool,
}

impl Shell {
  pub fn new(history: bool) -> Result<Self> {
    Ok(Self {
      editor: DefaultEditor::new()?,
      history,
    })
  }

  fn remember(&mut self, line: &str) {
    if self.history && !line.is_empty() {
      let _ = self.editor.add_history_entry(line);
    }
  }

  /// Prompt for instructions until a line whose opcode is `end`.
  /// Blank lines are skipped; the `end` line is included.
  pub fn read_program(&mut self, prompt: &str) -> Result<Vec<String>> {
    println!("Enter instructions (type 'end' to finish):");
    let mut program = Vec::new();

    loop {
      match self.editor.readline(prompt) {
        Ok(line) => {
          let trimmed = line.trim();
          if trimmed.is_empty() {
            continue;
          }
          self.remember(trimmed);
          program.push(trimmed.to_string());
          if is_terminator(trimmed) {
            return Ok(program);
          }
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Err(SimError::InputClosed),
        Err(err) => return Err(err.into()),
      }
    }
  }
}

impl CommandSource for Shell {
  fn next_command(&mut self) -> Result<Command> {
    loop {
      match self.editor.readline(STEP_PROMPT) {
        Ok(line) => {
          let trimmed = line.trim().to_string();
          self.remember(&trimmed);
          match parse_command(&trimmed) {
            Ok(cmd) => return Ok(cmd),
            Err(msg) => eprintln!("Error: {}", msg),
          }
        }
        // Ctrl-C / Ctrl-D: quit
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => return Ok(Command::Quit),
        Err(err) => return Err(err.into()),
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn enter_steps_once() {
    assert_eq!(parse_command(""), Ok(Command::Step(1)));
    assert_eq!(parse_command("   "), Ok(Command::Step(1)));
  }

  #[test]
  fn si_takes_a_count() {
    assert_eq!(parse_command("si 5"), Ok(Command::Step(5)));
    assert!(parse_command("si").is_err());
    assert!(parse_command("si 0").is_err());
    assert!(parse_command("si x").is_err());
  }

  #[test]
  fn single_letter_commands() {
    assert_eq!(parse_command("c"), Ok(Command::Continue));
    assert_eq!(parse_command("r"), Ok(Command::Registers));
    assert_eq!(parse_command(" q "), Ok(Command::Quit));
    assert!(parse_command("run").is_err());
  }
}
