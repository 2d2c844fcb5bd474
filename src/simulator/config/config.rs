use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;
use crate::simulator::sim::mode::OutputFormat;

/// Built-in defaults, lowest priority layer.
const DEFAULT_CONFIG: &str = include_str!("default.toml");

/// Environment variables override files, e.g. `CPUSIM_SIMULATION__STEP_MODE=true`.
pub const ENV_PREFIX: &str = "CPUSIM";

/// Simulation section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SimulationSection {
  #[serde(default)]
  pub quiet: bool,
  #[serde(default)]
  pub step_mode: bool,
  #[serde(default = "default_trace")]
  pub trace: bool,
  #[serde(default)]
  pub format: OutputFormat,
}

fn default_trace() -> bool {
  true
}

impl Default for SimulationSection {
  fn default() -> Self {
    Self {
      quiet: false,
      step_mode: false,
      trace: default_trace(),
      format: OutputFormat::Text,
    }
  }
}

/// Interactive shell section
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ShellSection {
  #[serde(default = "default_prompt")]
  pub prompt: String,
  #[serde(default = "default_history")]
  pub history: bool,
}

fn default_prompt() -> String {
  "Instruction: ".to_string()
}

fn default_history() -> bool {
  true
}

impl Default for ShellSection {
  fn default() -> Self {
    Self {
      prompt: default_prompt(),
      history: default_history(),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
  #[serde(default)]
  pub simulation: SimulationSection,
  #[serde(default)]
  pub shell: ShellSection,
}

/// Command line values that win over every config layer.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
  pub quiet: bool,
  pub step: bool,
  pub no_trace: bool,
  pub format: Option<OutputFormat>,
  pub prompt: Option<String>,
}

/// Load the embedded default.toml only.
pub fn load_default_config() -> Result<AppConfig> {
  let config = Config::builder()
    .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    .build()?;
  Ok(config.try_deserialize()?)
}

/// Defaults, then `path` if given, then `CPUSIM_*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
  load_layered(path, ENV_PREFIX)
}

fn load_layered(path: Option<&Path>, env_prefix: &str) -> Result<AppConfig> {
  let mut builder = Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));
  if let Some(path) = path {
    builder = builder.add_source(File::from(path).required(true));
  }
  let config = builder
    .add_source(
      Environment::with_prefix(env_prefix)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true),
    )
    .build()?;

  let app: AppConfig = config.try_deserialize()?;
  log::debug!("loaded configuration: {:?}", app);
  Ok(app)
}

pub fn apply_cli_overrides(config: &mut AppConfig, overrides: &CliOverrides) {
  if overrides.quiet {
    config.simulation.quiet = true;
  }
  if overrides.step {
    config.simulation.step_mode = true;
  }
  if overrides.no_trace {
    config.simulation.trace = false;
  }
  if let Some(format) = overrides.format {
    config.simulation.format = format;
  }
  if let Some(prompt) = &overrides.prompt {
    config.shell.prompt = prompt.clone();
  }
}

/// Effective configuration as TOML, for `--print-config`.
pub fn render_config(config: &AppConfig) -> Result<String> {
  Ok(toml::to_string_pretty(config)?)
}
