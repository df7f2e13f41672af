//! TacVM Driver
//!
//! Builds one of the bundled three-address programs, runs it through the
//! execution engine and reports the resulting binding environment.

use anyhow::{Result, anyhow};
use clap::{Parser, Subcommand};
use std::process::ExitCode;
use tacvm::{Binding, BindingState, Executor, Instruction, Location, OpCode, demos};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "tacvm", version, about = "Three-address code execution engine")]
struct Cli {
    /// Log filter. Overrides the TACVM_LOG environment variable.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List the bundled demo programs
    List,
    /// Execute a bundled demo program
    Run {
        /// Name of the demo, see `list`
        name: String,
    },
    /// Print the size in bits of the core types
    Sizes,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = cli
        .log
        .clone()
        .or_else(|| std::env::var("TACVM_LOG").ok())
        .unwrap_or_else(|| "info".to_string());
    tracing_subscriber::fmt().with_env_filter(log_level).init();

    match dispatch(cli.command) {
        Ok(code) => code,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn dispatch(command: Command) -> Result<ExitCode> {
    match command {
        Command::List => {
            for demo in demos::DEMOS {
                println!("{:12} {}", demo.name, demo.description);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Run { name } => run_demo(&name),
        Command::Sizes => {
            macro_rules! sizeof_each {
                [$($t:ty),*] => {
                    [ $( (stringify!($t), std::mem::size_of::<$t>()) ),* ]
                };
            }
            for (ty, size) in sizeof_each![Location, OpCode, Instruction, Binding] {
                println!("{ty:12} {:4}", size * 8);
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_demo(name: &str) -> Result<ExitCode> {
    let demo = demos::find(name).ok_or_else(|| anyhow!("Unknown demo '{}'", name))?;
    let program = demo.program();
    info!("Running demo: {}", demo.name);

    for instr in &program {
        println!("instr: {instr}");
    }

    let mut executor = Executor::new();
    match executor.run(&program) {
        Ok(()) => {
            for binding in executor.bindings().iter() {
                match binding.state() {
                    BindingState::Bound(value) => println!("{} = {:.6}", binding.location, value),
                    BindingState::Unbound => println!("{} = <unbound>", binding.location),
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            println!("error: {e}");
            Ok(ExitCode::FAILURE)
        }
    }
}
