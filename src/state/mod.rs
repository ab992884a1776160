//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The only durable state this client owns is the persisted login
//! session; everything else is page-local signals.

pub mod session;
