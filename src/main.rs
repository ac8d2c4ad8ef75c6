use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use corrgraph::cli::Cli;

fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "corrgraph=info",
		1 => "corrgraph=debug",
		_ => "corrgraph=trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	match corrgraph::run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			error!("{e}");
			eprintln!("Error: {e}");
			ExitCode::from(e.exit_code() as u8)
		}
	}
}
