//! Networking: the HTTP pipeline, the typed endpoint surface, and the
//! wire types shared between them.

pub mod api;
pub mod http;
pub mod types;
