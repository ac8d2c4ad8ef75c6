//! Command-line surface (§5). A flat argument set — this tool has one job,
//! unlike the teacher's subcommand-per-operation CLI.

use std::path::PathBuf;

use clap::Parser;

const DEFAULT_INPUT: &str = "public/email_network.json";

#[derive(Parser, Debug)]
#[command(name = "corrgraph")]
#[command(about = "Deduplicate email network nodes in a correspondence graph", long_about = None)]
pub struct Cli {
	/// Input JSON file
	#[arg(value_name = "FILE", default_value = DEFAULT_INPUT)]
	pub input: PathBuf,

	/// Output JSON file (default: overwrite input)
	#[arg(short, long, value_name = "FILE")]
	pub output: Option<PathBuf>,

	/// Print stats only, do not write
	#[arg(long)]
	pub dry_run: bool,

	/// Print merge groups (use with --dry-run)
	#[arg(long)]
	pub report: bool,

	/// Skip Layer 4 (fuzzy edit-distance matching)
	#[arg(long)]
	pub no_fuzzy: bool,

	/// Increase log verbosity (-v, -vv)
	#[arg(short, long, action = clap::ArgAction::Count)]
	pub verbose: u8,
}
