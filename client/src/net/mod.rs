//! Network layer: request building, reply decoding, and the HTTP calls.

pub mod api;
pub mod chat;
