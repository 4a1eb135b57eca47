// YouTube Data API v3 — thin read-only client and endpoint wrappers.

pub mod channels;
pub mod client;
pub mod search;
pub mod videos;
