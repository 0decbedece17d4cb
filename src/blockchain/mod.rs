//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! SdkConfig (RPC URL, private key)
//!     → client.rs (RPC connection, chain id, signing provider)
//!     → wallet.rs (key parsing, chain-bound signer, fresh identities)
//!     → transaction.rs (receipt polling until mined)
//! ```
//!
//! # Security Constraints
//! - Never log private keys or sensitive data
//! - Read-only RPC calls have a configurable timeout
//! - Finalization waits are unbounded

pub mod client;
pub mod transaction;
pub mod types;
pub mod wallet;

pub use client::{AlloyConnector, AlloyNode};
pub use transaction::ReceiptPoller;
pub use types::{BlockchainError, BlockchainResult, ChainId, Finalized};
pub use wallet::{Identity, SigningKey, Wallet};
