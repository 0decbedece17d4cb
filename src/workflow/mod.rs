//! Workflow subsystem.
//!
//! # Data Flow
//! ```text
//! SdkConfig
//!     → runner.rs (14 sequential steps)
//!     → ledger.rs traits (connector → node → contract session)
//!     → report.rs (WorkflowReport on success, WorkflowError{step} on failure)
//! ```

pub mod ledger;
pub mod report;
pub mod runner;

pub use ledger::{ContractSession, LedgerConnector, LedgerNode};
pub use report::{Step, StepFailure, WorkflowError, WorkflowReport};
pub use runner::WorkflowRunner;
