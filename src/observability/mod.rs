//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events with structured fields (tx_hash, address, block)
//!
//! Consumers:
//!     → logging.rs fmt subscriber (stdout)
//! ```

pub mod logging;

pub use logging::init_logging;
