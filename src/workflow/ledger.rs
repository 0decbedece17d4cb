//! Capability set the runner needs from a ledger.
//!
//! The alloy-backed implementation lives in `blockchain::client` and
//! `contract::session`. Tests swap in an in-memory ledger.

use alloy::primitives::{Address, TxHash, U256};
use async_trait::async_trait;

use crate::blockchain::types::{BlockchainResult, ChainId, Finalized};
use crate::blockchain::wallet::Wallet;
use crate::config::BlockchainConfig;
use crate::contract::types::{TokenCreated, TokenSpec};

/// Opens connections to a ledger node.
#[async_trait]
pub trait LedgerConnector: Send + Sync {
    type Node: LedgerNode;

    /// Dial the endpoint.
    async fn connect(&self, rpc_url: &str, tuning: &BlockchainConfig) -> BlockchainResult<Self::Node>;
}

/// A connected, not yet authenticated node.
#[async_trait]
pub trait LedgerNode: Send + Sync {
    type Session: ContractSession;

    /// Chain identifier used for replay-protected signing.
    async fn chain_id(&self) -> BlockchainResult<ChainId>;

    /// Bind a signing session to a deployed contract.
    fn bind_contract(&self, wallet: &Wallet, contract: Address) -> BlockchainResult<Self::Session>;
}

/// Typed calls against the Pantheon contract.
///
/// Writes return the transaction hash as soon as the node accepts the
/// transaction; [`ContractSession::wait_for_finalization`] blocks until it is
/// mined.
#[async_trait]
pub trait ContractSession: Send + Sync {
    async fn add_to_whitelist(&self, account: Address) -> BlockchainResult<TxHash>;

    async fn is_whitelisted(&self, account: Address) -> BlockchainResult<bool>;

    async fn create_token(&self, token: &TokenSpec) -> BlockchainResult<TxHash>;

    /// `ERC404Created` events emitted in exactly `block`.
    async fn created_events_in_block(&self, block: u64) -> BlockchainResult<Vec<TokenCreated>>;

    async fn add_cids(&self, id: U256, owner: Address, cids: &[String]) -> BlockchainResult<TxHash>;

    async fn contribution(&self, id: U256, owner: Address) -> BlockchainResult<U256>;

    async fn cids(&self, id: U256, owner: Address) -> BlockchainResult<Vec<String>>;

    /// Block until the transaction is mined. No timeout.
    async fn wait_for_finalization(&self, tx_hash: TxHash) -> BlockchainResult<Finalized>;
}
