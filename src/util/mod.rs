//! Cross-cutting helpers shared by routed pages.

pub mod auth;
pub mod download;
pub mod notify;
