//! Pantheon SDK example: whitelist, ERC404 creation and CID bookkeeping
//! against a deployed Pantheon contract.

pub mod blockchain;
pub mod config;
pub mod contract;
pub mod observability;
pub mod workflow;

pub use config::SdkConfig;
pub use workflow::{WorkflowError, WorkflowReport, WorkflowRunner};
