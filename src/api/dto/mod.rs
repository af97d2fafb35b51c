//! Data Transfer Objects for API requests and responses.
//!
//! Inbound payloads deserialize leniently (missing fields default), mirroring
//! the tolerant binding of the upstream clients; outbound bodies wrap the
//! entity under a named key (`"country"` / `"province"`).

pub mod country;
pub mod health;
pub mod province;
