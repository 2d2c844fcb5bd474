pub mod config;

pub use self::config::{apply_cli_overrides, load_config, load_default_config, render_config, AppConfig, CliOverrides};
