//! Generate a signed access token for a room.
//!
//! ```text
//! room-token --api-key KEY --api-secret SECRET --identity alice --room demo [--nome Alice] [--horas 6]
//! ```
//!
//! Prints the token and a summary of the parameters to stdout.

mod log;

use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use log::Log;
use room_token::AccessToken;

#[derive(Parser, Clone, Debug)]
struct Cli {
	#[command(flatten)]
	log: Log,

	/// The API key of the room service.
	#[arg(long)]
	api_key: String,

	/// The API secret of the room service.
	#[arg(long)]
	api_secret: String,

	/// The identity of the participant.
	#[arg(long)]
	identity: String,

	/// The name of the room to join.
	#[arg(long)]
	room: String,

	/// The display name of the participant.
	#[arg(long, default_value = "")]
	nome: String,

	/// Expiry in hours.
	#[arg(long, default_value_t = 6)]
	horas: u64,
}

fn ttl_from_hours(horas: u64) -> anyhow::Result<Duration> {
	let secs = horas.checked_mul(60 * 60).context("expiry hours too large")?;
	Ok(Duration::from_secs(secs))
}

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	cli.log.init();

	let token = AccessToken::new(&cli.api_key, &cli.api_secret, &cli.identity, &cli.room)
		.with_name(&cli.nome)
		.with_ttl(ttl_from_hours(cli.horas)?)
		.sign()
		.context("failed to generate token")?;

	tracing::debug!(identity = %cli.identity, room = %cli.room, "token signed");

	println!();
	println!("{}", "=".repeat(50));
	println!("TOKEN GENERATED");
	println!("{}", "=".repeat(50));
	println!();
	println!("Token: {token}");
	println!();
	println!("Details:");
	println!("- API key: {}", cli.api_key);
	println!("- Identity: {}", cli.identity);
	println!("- Room: {}", cli.room);
	println!(
		"- Name: {}",
		if cli.nome.is_empty() { "(none)" } else { cli.nome.as_str() }
	);
	println!("- Expires in: {} hours", cli.horas);
	println!();
	println!("{}", "=".repeat(50));

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
		Cli::try_parse_from(std::iter::once("room-token").chain(args.iter().copied()))
	}

	#[test]
	fn test_defaults() {
		let cli = parse(&[
			"--api-key",
			"key",
			"--api-secret",
			"secret",
			"--identity",
			"alice",
			"--room",
			"demo",
		])
		.unwrap();

		assert_eq!(cli.nome, "");
		assert_eq!(cli.horas, 6);
	}

	#[test]
	fn test_optional_flags() {
		let cli = parse(&[
			"--api-key",
			"key",
			"--api-secret",
			"secret",
			"--identity",
			"alice",
			"--room",
			"demo",
			"--nome",
			"Alice",
			"--horas",
			"2",
		])
		.unwrap();

		assert_eq!(cli.nome, "Alice");
		assert_eq!(cli.horas, 2);
	}

	#[test]
	fn test_missing_room() {
		let err = parse(&["--api-key", "key", "--api-secret", "secret", "--identity", "alice"]).unwrap_err();
		assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
	}

	#[test]
	fn test_missing_credentials() {
		assert!(parse(&["--identity", "alice", "--room", "demo"]).is_err());
	}

	#[test]
	fn test_ttl_from_hours() {
		assert_eq!(ttl_from_hours(6).unwrap(), Duration::from_secs(6 * 60 * 60));
		assert!(ttl_from_hours(u64::MAX).is_err());
	}
}
