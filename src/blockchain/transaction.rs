//! Finalization monitoring.
//!
//! # Responsibilities
//! - Poll for the receipt of a submitted transaction
//! - Reject reverted transactions
//! - Extract the inclusion block for event lookups

use alloy::primitives::TxHash;
use alloy::providers::{DynProvider, Provider};
use std::time::Duration;
use tokio::time::interval;

use crate::blockchain::types::{BlockchainError, BlockchainResult, Finalized};

/// Polls `eth_getTransactionReceipt` until a transaction is mined.
#[derive(Clone)]
pub struct ReceiptPoller {
    provider: DynProvider,
    poll_interval: Duration,
}

impl ReceiptPoller {
    /// Create a new poller.
    pub fn new(provider: DynProvider, poll_interval: Duration) -> Self {
        Self {
            provider,
            poll_interval,
        }
    }

    /// Wait for a transaction to be mined.
    ///
    /// There is no overall timeout: if the network never includes the
    /// transaction this never returns. RPC errors while polling are logged
    /// and the poll continues.
    pub async fn wait_for_finalization(&self, tx_hash: TxHash) -> BlockchainResult<Finalized> {
        let mut ticker = interval(self.poll_interval);

        loop {
            ticker.tick().await;

            let receipt = match self.provider.get_transaction_receipt(tx_hash).await {
                Ok(Some(r)) => r,
                Ok(None) => {
                    tracing::debug!(tx_hash = %tx_hash, "Transaction not yet mined");
                    continue;
                }
                Err(e) => {
                    tracing::warn!(tx_hash = %tx_hash, error = %e, "Receipt retrieval failed");
                    continue;
                }
            };

            return finalize(tx_hash, receipt.status(), receipt.block_number);
        }
    }
}

impl std::fmt::Debug for ReceiptPoller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReceiptPoller")
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}

/// Turn a mined receipt into a [`Finalized`] record.
pub(crate) fn finalize(
    tx_hash: TxHash,
    succeeded: bool,
    block_number: Option<u64>,
) -> BlockchainResult<Finalized> {
    if !succeeded {
        return Err(BlockchainError::Reverted(tx_hash));
    }

    let block_number = block_number.ok_or(BlockchainError::MissingBlockNumber(tx_hash))?;

    Ok(Finalized {
        tx_hash,
        block_number,
    })
}
