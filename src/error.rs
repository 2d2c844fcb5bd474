use thiserror::Error;

/// Malformed instruction text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
  #[error("empty instruction")]
  Empty,

  #[error("unknown opcode '{0}'")]
  UnknownOpcode(String),

  #[error("missing destination register")]
  MissingDestination,

  /// Not of the form `r0`..`r7`.
  #[error("invalid register '{0}'")]
  InvalidRegister(String),

  #[error("invalid immediate '{0}'")]
  InvalidImmediate(String),
}

/// Errors raised by the execution engine. All of them abort the run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
  #[error("cannot parse '{instruction}': {source}")]
  Parse {
    instruction: String,
    #[source]
    source: ParseError,
  },

  #[error("division by zero in '{instruction}'")]
  DivisionByZero { instruction: String },

  #[error("cpu is halted")]
  Halted,
}

/// Errors surfaced by the simulator front end.
#[derive(Error, Debug)]
pub enum SimError {
  #[error(transparent)]
  Exec(#[from] ExecError),

  #[error("program has no 'end' instruction")]
  MissingEnd,

  #[error("input closed before 'end'")]
  InputClosed,

  #[error("readline error: {0}")]
  Readline(#[from] rustyline::error::ReadlineError),

  #[error("configuration error: {0}")]
  Config(#[from] config::ConfigError),

  #[error("cannot render configuration: {0}")]
  ConfigRender(#[from] toml::ser::Error),

  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("JSON error: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T, E = SimError> = std::result::Result<T, E>;
