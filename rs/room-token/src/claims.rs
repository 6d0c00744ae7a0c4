use serde::{Deserialize, Serialize};

use crate::Grant;

/// The JWT claims carried by an access token.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
	/// Issuer; the API key the token was signed with.
	pub iss: String,

	/// Subject; the participant identity.
	pub sub: String,

	/// Token id; the same as the identity.
	pub jti: String,

	/// Display name of the participant, omitted from the payload when empty.
	#[serde(default, skip_serializing_if = "String::is_empty")]
	pub name: String,

	/// Not valid before, in unix seconds; set to the signing time.
	pub nbf: u64,

	/// Expiry, in unix seconds.
	pub exp: u64,

	/// The room permissions.
	pub video: Grant,
}
