//! Network layer: wire types and the remote service client.

pub mod api;
pub mod types;
