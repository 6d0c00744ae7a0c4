use clap::Args;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Logging flags.
#[derive(Args, Clone, Default, Debug)]
pub struct Log {
	/// Increase verbosity; once for debug, twice for trace.
	#[arg(long, short, action = clap::ArgAction::Count)]
	pub verbose: u8,
}

impl Log {
	pub fn level(&self) -> LevelFilter {
		match self.verbose {
			0 => LevelFilter::INFO,
			1 => LevelFilter::DEBUG,
			_ => LevelFilter::TRACE,
		}
	}

	/// Initialize logging to stderr, leaving stdout for the token output.
	pub fn init(&self) {
		let filter = EnvFilter::builder()
			.with_default_directive(self.level().into())
			.from_env_lossy();

		tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_writer(std::io::stderr)
			.init();
	}
}
