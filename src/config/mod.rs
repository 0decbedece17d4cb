//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config/config.yml (YAML)
//!     → loader.rs (read & deserialize)
//!     → validation.rs (semantic checks)
//!     → SdkConfig (validated, immutable)
//!     → handed to the workflow runner
//! ```
//!
//! # Design Decisions
//! - Config is loaded once and never mutated
//! - Only the endpoint, key and contract address are required
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError, DEFAULT_CONFIG_PATH};
pub use schema::{BlockchainConfig, SdkConfig, WorkflowConfig};
pub use validation::ValidationError;
