use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use jsonwebtoken::{Algorithm, EncodingKey, Header};

use crate::{Claims, Grant};

/// Tokens expire 6 hours after signing unless a ttl is provided.
pub const DEFAULT_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// An access token for a single participant in a single room.
///
/// Construct one with the API credentials, then [`sign`](Self::sign) it to get the
/// compact JWT handed to the client.
#[derive(Debug, Clone)]
pub struct AccessToken {
	/// The API key, used as the `iss` claim.
	pub api_key: String,

	/// The API secret, used to sign the token with HS256.
	pub api_secret: String,

	/// The participant identity.
	pub identity: String,

	/// The display name shown to other participants.
	pub name: String,

	/// The permissions granted to the participant.
	pub grant: Grant,

	/// How long the token is valid after signing.
	pub ttl: Duration,
}

impl AccessToken {
	/// A token granting full access to the given room, expiring after [`DEFAULT_TTL`].
	pub fn new(
		api_key: impl Into<String>,
		api_secret: impl Into<String>,
		identity: impl Into<String>,
		room: &str,
	) -> Self {
		Self {
			api_key: api_key.into(),
			api_secret: api_secret.into(),
			identity: identity.into(),
			name: String::new(),
			grant: Grant::room(room),
			ttl: DEFAULT_TTL,
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = name.into();
		self
	}

	pub fn with_ttl(mut self, ttl: Duration) -> Self {
		self.ttl = ttl;
		self
	}

	/// Sign the token, returning the compact JWT.
	///
	/// `nbf` and `exp` are computed from the current time, so each call produces a
	/// fresh token. Fails when the API key or secret is empty (`jsonwebtoken` would
	/// accept them, but the room server never will) or when the ttl overflows unix time.
	pub fn sign(&self) -> anyhow::Result<String> {
		anyhow::ensure!(!self.api_key.is_empty(), "empty API key");
		anyhow::ensure!(!self.api_secret.is_empty(), "empty API secret");

		let now = SystemTime::now()
			.duration_since(UNIX_EPOCH)
			.context("system clock before unix epoch")?
			.as_secs();

		let exp = now
			.checked_add(self.ttl.as_secs())
			.context("ttl overflows unix time")?;

		let claims = Claims {
			iss: self.api_key.clone(),
			sub: self.identity.clone(),
			jti: self.identity.clone(),
			name: self.name.clone(),
			nbf: now,
			exp,
			video: self.grant.clone(),
		};

		let key = EncodingKey::from_secret(self.api_secret.as_bytes());
		jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key).context("failed to sign token")
	}
}
