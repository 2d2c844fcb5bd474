// Logging setup
use env_logger::{Builder, Env};

/// Install the env_logger backend. `RUST_LOG` wins over the default level;
/// quiet mode drops the default to warnings. Safe to call more than once.
pub fn init_log(quiet: bool) {
  let default_level = if quiet { "warn" } else { "info" };
  let _ = Builder::from_env(Env::default().default_filter_or(default_level))
    .format_timestamp(None)
    .format_target(false)
    .try_init();
}
