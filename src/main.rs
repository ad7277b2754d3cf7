use std::{fs, process::ExitCode};

use anyhow::Context;
use foolang::{Compiler, FooError, OptimizerConfig, cli::*};
use palc::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	match Cli::parse().command {
		Command::Compile { input, output, no_optimize } => {
			if !input.exists() {
				eprintln!("Error: File not found: {}", input.display());
				return ExitCode::FAILURE;
			}

			let config = if no_optimize { OptimizerConfig::disabled() } else { OptimizerConfig::default() };
			let result = Compiler::new(config).compile_file(&input).and_then(|js| {
				match &output {
					Some(path) => {
						fs::write(path, js).with_context(|| format!("Failed to write {}", path.display()))?;
						println!("Compiled {} -> {}", input.display(), path.display());
					}
					None => println!("{js}"),
				}
				Ok::<(), FooError>(())
			});

			if let Err(e) = result {
				eprintln!("{e}");
				return ExitCode::FAILURE;
			}
			ExitCode::SUCCESS
		}
	}
}
