//! Access token generation for the room service.
//!
//! Build an [`AccessToken`] from API credentials, a participant identity, and a room
//! [`Grant`], then sign it into the compact JWT a client presents when joining a room.
//!
//! See [`Claims`] for the claims structure.

mod claims;
mod grant;
mod token;

pub use claims::*;
pub use grant::*;
pub use token::*;
