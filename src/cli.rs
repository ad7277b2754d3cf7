use std::path::PathBuf;

use palc::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "foolang", after_long_help = "Foolang - A simple DSL that transpiles to JavaScript.")]
pub struct Cli {
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Compile a .foo file to JavaScript
	Compile {
		/// Input .foo file
		input:       PathBuf,
		/// Output .js file, printed to stdout when omitted
		#[arg(short, long)]
		output:      Option<PathBuf>,
		/// Disable optimizations
		#[arg(long)]
		no_optimize: bool,
	},
}
