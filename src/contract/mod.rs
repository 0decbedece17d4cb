//! Pantheon contract binding and session.

pub mod bindings;
pub mod session;
pub mod types;

pub use bindings::Pantheon;
pub use session::PantheonSession;
pub use types::{TokenCreated, TokenSpec};
