use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::simulator::config::config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMode {
  Continuous,
  Step,
}

/// How the end-of-run report is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
  #[default]
  Text,
  Json,
}

impl FromStr for OutputFormat {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "text" => Ok(OutputFormat::Text),
      "json" => Ok(OutputFormat::Json),
      _ => Err(format!("Unknown output format: {} (expected text or json)", s)),
    }
  }
}

impl fmt::Display for OutputFormat {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OutputFormat::Text => write!(f, "text"),
      OutputFormat::Json => write!(f, "json"),
    }
  }
}

#[derive(Debug, Clone)]
pub struct SimConfig {
  pub step_mode: StepMode,
  /// Print the per-instruction trace (text format only)
  pub trace: bool,
  pub format: OutputFormat,
  pub prompt: String,
  pub history: bool,
}

impl From<&AppConfig> for SimConfig {
  fn from(config: &AppConfig) -> Self {
    Self {
      step_mode: if config.simulation.step_mode {
        StepMode::Step
      } else {
        StepMode::Continuous
      },
      trace: config.simulation.trace,
      format: config.simulation.format,
      prompt: config.shell.prompt.clone(),
      history: config.shell.history,
    }
  }
}

impl Default for SimConfig {
  fn default() -> Self {
    Self::from(&AppConfig::default())
  }
}
