use clap::Parser;
use cpusim::simulator::config::{apply_cli_overrides, load_config, render_config, CliOverrides};
use cpusim::simulator::utils::log::init_log;
use cpusim::simulator::ProgramSource;
use cpusim::{OutputFormat, SimConfig, SimError, Simulator};
use std::path::PathBuf;
use std::process::ExitCode;

/// cpusim - a minimal register machine simulator
#[derive(Parser, Debug)]
#[command(name = "cpusim")]
#[command(version = "0.1.0")]
#[command(about = "Encode and execute mov/add/sub/mul/div/end programs with cycle accounting", long_about = None)]
struct Args {
  /// Program file, one instruction per line ('-' reads stdin). Prompts for input when omitted
  #[arg(value_name = "PROGRAM")]
  program: Option<PathBuf>,

  /// Configuration file (TOML) layered over the built-in defaults
  #[arg(short, long, value_name = "FILE")]
  config: Option<PathBuf>,

  /// Enable step mode (interactive stepping)
  #[arg(short, long)]
  step: bool,

  /// Quiet mode (suppress log messages)
  #[arg(short, long)]
  quiet: bool,

  /// Do not print the per-instruction trace
  #[arg(long)]
  no_trace: bool,

  /// Report format: text or json
  #[arg(short, long, value_name = "FORMAT")]
  format: Option<OutputFormat>,

  /// Prompt shown while collecting instructions interactively
  #[arg(long, value_name = "TEXT")]
  prompt: Option<String>,

  /// Print the effective configuration and exit
  #[arg(long)]
  print_config: bool,
}

fn run(args: Args) -> Result<(), SimError> {
  let mut app_config = load_config(args.config.as_deref())?;
  apply_cli_overrides(
    &mut app_config,
    &CliOverrides {
      quiet: args.quiet,
      step: args.step,
      no_trace: args.no_trace,
      format: args.format,
      prompt: args.prompt,
    },
  );

  init_log(app_config.simulation.quiet);

  if args.print_config {
    print!("{}", render_config(&app_config)?);
    return Ok(());
  }

  let source = match args.program {
    Some(path) if path.as_os_str() == "-" => ProgramSource::Stdin,
    Some(path) => ProgramSource::File(path),
    None => ProgramSource::Interactive,
  };

  let simulator = Simulator::new(SimConfig::from(&app_config));
  log::debug!("simulator config: {:?}", simulator.config());
  simulator.run(&source)?;
  Ok(())
}

fn main() -> ExitCode {
  let args = Args::parse();
  let quiet = args.quiet;

  match run(args) {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      // config errors surface before the logger is up
      init_log(quiet);
      log::error!("{}", e);
      ExitCode::FAILURE
    }
  }
}
