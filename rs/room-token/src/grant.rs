use serde::{Deserialize, Serialize};

/// The room permissions embedded in an access token.
///
/// Serialized as the `video` claim with camelCase keys, which is the shape the
/// room server expects on connect.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Grant {
	/// The room this grant applies to.
	pub room: String,

	/// Allowed to join the room.
	pub room_join: bool,

	/// Allowed to publish audio/video tracks.
	pub can_publish: bool,

	/// Allowed to subscribe to other participants' tracks.
	pub can_subscribe: bool,

	/// Allowed to publish data messages.
	pub can_publish_data: bool,
}

impl Grant {
	/// A full grant for the given room: join, publish, subscribe, and publish data.
	pub fn room(name: &str) -> Self {
		Self {
			room: name.to_string(),
			room_join: true,
			can_publish: true,
			can_subscribe: true,
			can_publish_data: true,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_room_grant() {
		let grant = Grant::room("demo");
		assert_eq!(grant.room, "demo");
		assert!(grant.room_join);
		assert!(grant.can_publish);
		assert!(grant.can_subscribe);
		assert!(grant.can_publish_data);
	}

	#[test]
	fn test_camel_case_keys() {
		let value = serde_json::to_value(Grant::room("demo")).unwrap();
		assert_eq!(value["room"], "demo");
		assert_eq!(value["roomJoin"], true);
		assert_eq!(value["canPublish"], true);
		assert_eq!(value["canSubscribe"], true);
		assert_eq!(value["canPublishData"], true);
	}
}
