//! Chain-specific types and error definitions.

use alloy::primitives::TxHash;
use thiserror::Error;

/// Chain ID type for strong typing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChainId(pub u64);

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<ChainId> for u64 {
    fn from(id: ChainId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A transaction that has been mined into a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finalized {
    /// The transaction hash.
    pub tx_hash: TxHash,
    /// Block the transaction was included in.
    pub block_number: u64,
}

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Invalid private key format or signer construction error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Address could not be parsed.
    #[error("Invalid address '{0}'")]
    InvalidAddress(String),

    /// Contract call or transaction submission failed.
    #[error("Contract call {method} failed: {reason}")]
    Contract { method: &'static str, reason: String },

    /// Transaction was reverted on-chain.
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),

    /// Receipt came back without a block number.
    #[error("Receipt for {0} has no block number")]
    MissingBlockNumber(TxHash),

    /// No matching event in the queried block.
    #[error("{event} event not found in block {block}")]
    EventNotFound { event: &'static str, block: u64 },
}

impl BlockchainError {
    /// Wrap a contract-level failure with the method that produced it.
    pub fn contract(method: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Contract {
            method,
            reason: err.to_string(),
        }
    }
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;
