use std::io::{self, Write};

use super::program::{load_program, read_program, ProgramSource};
use super::sim::mode::{OutputFormat, SimConfig, StepMode};
use super::sim::shell::{Command, CommandSource, Shell};
use super::utils::report::{print_final_state, print_json, print_registers, ConsoleTrace};
use crate::cpu::{Cpu, RunReport};
use crate::error::Result;

pub struct Simulator {
  config: SimConfig,
}

impl Simulator {
  pub fn new(config: SimConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &SimConfig {
    &self.config
  }

  /// Collect the instruction lines for one run.
  pub fn load(&self, source: &ProgramSource) -> Result<Vec<String>> {
    log::info!("reading program from {:?}", source);
    match source {
      ProgramSource::File(path) => load_program(path),
      ProgramSource::Stdin => read_program(io::stdin().lock()),
      ProgramSource::Interactive => Shell::new(self.config.history)?.read_program(&self.config.prompt),
    }
  }

  /// Load a program and run it, writing trace and report to stdout.
  pub fn run(&self, source: &ProgramSource) -> Result<RunReport> {
    let program = self.load(source)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match self.config.step_mode {
      StepMode::Continuous => self.execute(&program, &mut out, None),
      StepMode::Step => {
        let mut shell = Shell::new(self.config.history)?;
        writeln!(out, "Step mode - Enter to step, 'si N' for N steps, 'c' to continue, 'r' for registers, 'q' to quit")?;
        out.flush()?;
        self.execute(&program, &mut out, Some(&mut shell))
      }
    }
  }

  /// Execute `program` on a fresh CPU. With `commands`, the run pauses
  /// before each instruction until the source hands out more steps.
  pub fn execute<W: Write>(
    &self,
    program: &[String],
    out: &mut W,
    mut commands: Option<&mut dyn CommandSource>,
  ) -> Result<RunReport> {
    let text_output = self.config.format == OutputFormat::Text;
    let mut cpu = Cpu::new();
    let mut tracer = ConsoleTrace::new(&mut *out, text_output && self.config.trace);

    // steps left before the next prompt, None runs to the end
    let mut budget = commands.as_ref().map(|_| 0u32);

    'run: for line in program {
      if !cpu.is_running() {
        break;
      }
      if budget == Some(0) {
        if let Some(source) = commands.as_mut() {
          loop {
            match source.next_command()? {
              Command::Step(n) => {
                budget = Some(n.max(1));
                break;
              }
              Command::Continue => {
                budget = None;
                break;
              }
              Command::Registers => {
                let out = tracer.out();
                print_registers(out, cpu.registers())?;
                out.flush()?;
              }
              Command::Quit => {
                log::info!("run stopped before '{}'", line);
                break 'run;
              }
            }
          }
        }
      }

      cpu.execute_line(line, &mut tracer)?;
      if let Some(n) = budget.as_mut() {
        *n = n.saturating_sub(1);
      }
    }
    tracer.finish()?;

    let report = cpu.report();
    match self.config.format {
      OutputFormat::Text => {
        writeln!(out, "\nExecution complete.")?;
        print_final_state(out, &report)?;
      }
      OutputFormat::Json => print_json(out, &report)?,
    }
    out.flush()?;
    Ok(report)
  }
}
