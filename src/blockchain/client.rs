//! Blockchain RPC client.
//!
//! # Responsibilities
//! - Connect to JSON-RPC endpoint
//! - Query the chain identifier under a request timeout
//! - Build the wallet-filled provider used for contract writes

use alloy::primitives::Address;
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use async_trait::async_trait;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::transaction::ReceiptPoller;
use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::blockchain::wallet::Wallet;
use crate::config::BlockchainConfig;
use crate::contract::session::PantheonSession;
use crate::workflow::ledger::{LedgerConnector, LedgerNode};

/// Connects to HTTP JSON-RPC endpoints through alloy.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlloyConnector;

#[async_trait]
impl LedgerConnector for AlloyConnector {
    type Node = AlloyNode;

    async fn connect(&self, rpc_url: &str, tuning: &BlockchainConfig) -> BlockchainResult<AlloyNode> {
        let url: url::Url = rpc_url
            .parse()
            .map_err(|e| BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", rpc_url, e)))?;

        let provider = ProviderBuilder::new().connect_http(url.clone()).erased();

        tracing::info!(rpc_url = %url, "Connected to RPC endpoint");

        Ok(AlloyNode {
            url,
            provider,
            timeout_duration: Duration::from_secs(tuning.rpc_timeout_secs),
            poll_interval: Duration::from_millis(tuning.poll_interval_ms),
        })
    }
}

/// A connected JSON-RPC node.
#[derive(Clone)]
pub struct AlloyNode {
    url: url::Url,
    /// Read-only provider.
    provider: DynProvider,
    /// Request timeout duration.
    timeout_duration: Duration,
    /// Receipt poll interval.
    poll_interval: Duration,
}

#[async_trait]
impl LedgerNode for AlloyNode {
    type Session = PantheonSession;

    async fn chain_id(&self) -> BlockchainResult<ChainId> {
        match timeout(self.timeout_duration, self.provider.get_chain_id()).await {
            Ok(Ok(id)) => Ok(ChainId(id)),
            Ok(Err(e)) => Err(BlockchainError::Rpc(format!("eth_chainId failed: {}", e))),
            Err(_) => Err(BlockchainError::Timeout(self.timeout_duration.as_secs())),
        }
    }

    fn bind_contract(&self, wallet: &Wallet, contract: Address) -> BlockchainResult<PantheonSession> {
        if contract.is_zero() {
            return Err(BlockchainError::InvalidAddress(contract.to_string()));
        }

        let signing_provider = ProviderBuilder::new()
            .wallet(wallet.network_wallet())
            .connect_http(self.url.clone())
            .erased();

        let poller = ReceiptPoller::new(self.provider.clone(), self.poll_interval);

        tracing::info!(
            contract = %contract,
            signer = %wallet.address(),
            "Pantheon contract bound"
        );

        Ok(PantheonSession::new(contract, signing_provider, poller))
    }
}

impl std::fmt::Debug for AlloyNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlloyNode")
            .field("rpc_url", &self.url.as_str())
            .field("timeout", &self.timeout_duration)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
